use anyhow::{format_err, Context as _, Result};
use dotastats_model::stats::PlayerStats;
use dotastats_model::{AccountId, SteamIdentifier};
use log::{error, info};
use reqwest::Client;

use super::config::{Config, RosterEntry};
use super::opendota::{OpenDotaClient, PlayerProfile, WinLoss};
use super::steam::SteamClient;
use crate::utils::{print_err_info, unwrap_or_def_verbose};

/// Where per-player data comes from. Implemented over HTTP in production.
pub(crate) trait StatsSource {
    async fn resolve_vanity(&self, vanity: &str) -> Result<Option<AccountId>>;
    async fn steam_persona_name(&self, account: AccountId) -> Result<Option<String>>;
    async fn profile(&self, account: AccountId) -> Result<PlayerProfile>;
    async fn win_loss(&self, account: AccountId) -> Result<WinLoss>;
}

pub(crate) struct HttpStatsSource {
    opendota: OpenDotaClient,
    steam: Option<SteamClient>,
}

impl HttpStatsSource {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .context("Cannot build HTTP client")?;
        let steam = config
            .steam_api_key
            .as_ref()
            .map(|key| SteamClient::new(client.clone(), &config.steam_base_url, key.as_str()));
        if steam.is_none() {
            info!("No Steam API key configured, Steam lookups disabled");
        }
        Ok(Self {
            opendota: OpenDotaClient::new(client, &config.opendota_base_url),
            steam,
        })
    }
}

impl StatsSource for HttpStatsSource {
    async fn resolve_vanity(&self, vanity: &str) -> Result<Option<AccountId>> {
        match &self.steam {
            Some(steam) => steam.resolve_vanity(vanity).await,
            None => Err(format_err!(
                "Cannot resolve \"{vanity}\": vanity names need a Steam API key"
            )),
        }
    }

    async fn steam_persona_name(&self, account: AccountId) -> Result<Option<String>> {
        match &self.steam {
            Some(steam) => steam.persona_name(account).await,
            None => Ok(None),
        }
    }

    async fn profile(&self, account: AccountId) -> Result<PlayerProfile> {
        self.opendota.player(account).await
    }

    async fn win_loss(&self, account: AccountId) -> Result<WinLoss> {
        self.opendota.win_loss(account).await
    }
}

/// Fetches every roster entry in order. Players whose account cannot be determined are
/// skipped; failed stat lookups fall back to empty stats.
pub(crate) async fn collect_stats(
    source: &impl StatsSource,
    roster: &[RosterEntry],
    fallback_name_prefix: &str,
) -> Vec<PlayerStats> {
    let mut stats = Vec::with_capacity(roster.len());
    for entry in roster {
        if let Some(player) = collect_player(source, entry, fallback_name_prefix).await {
            stats.push(player);
        }
    }
    info!("Collected stats for {}/{} players", stats.len(), roster.len());
    stats
}

async fn collect_player(
    source: &impl StatsSource,
    entry: &RosterEntry,
    fallback_name_prefix: &str,
) -> Option<PlayerStats> {
    let account = match &entry.identifier {
        SteamIdentifier::Account(account) => *account,
        SteamIdentifier::Vanity(vanity) => match source.resolve_vanity(vanity).await {
            Ok(Some(account)) => account,
            Ok(None) => {
                error!("Cannot get Steam account for {vanity}");
                return None;
            }
            Err(e) => {
                error!("{e:#}");
                return None;
            }
        },
    };
    info!("Processing account {account}");

    let profile = unwrap_or_def_verbose(
        source
            .profile(account)
            .await
            .with_context(|| format!("OpenDota profile of {account}")),
    );
    let win_loss = unwrap_or_def_verbose(
        source
            .win_loss(account)
            .await
            .with_context(|| format!("OpenDota win/loss of {account}")),
    );

    let name = match &entry.name {
        Some(name) => name.clone(),
        None => display_name(source, account, &profile, fallback_name_prefix).await,
    };

    Some(
        PlayerStats::new(account, name)
            .with_record(win_loss.win, win_loss.lose)
            .with_rank(profile.rank_tier, profile.leaderboard_rank),
    )
}

async fn display_name(
    source: &impl StatsSource,
    account: AccountId,
    profile: &PlayerProfile,
    fallback_name_prefix: &str,
) -> String {
    let steam_name = match source.steam_persona_name(account).await {
        Ok(name) => name,
        Err(e) => {
            print_err_info(&e.context(format!("Steam persona name of {account}")));
            None
        }
    };
    steam_name
        .or_else(|| profile.persona_name().map(String::from))
        .unwrap_or_else(|| format!("{fallback_name_prefix}{}", account.short_suffix(6)))
}
