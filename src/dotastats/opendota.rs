use anyhow::{Context, Result};
use dotastats_model::stats::{lenient_count, lenient_number};
use dotastats_model::AccountId;
use log::debug;
use reqwest::Client;
use serde::Deserialize;

/// Subset of `GET /players/{account_id}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PlayerProfile {
    #[serde(default)]
    pub profile: Option<ProfileInfo>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub rank_tier: Option<i64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub leaderboard_rank: Option<i64>,
}

impl PlayerProfile {
    pub fn persona_name(&self) -> Option<&str> {
        self.profile
            .as_ref()
            .and_then(|p| p.personaname.as_deref())
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProfileInfo {
    #[serde(default)]
    pub personaname: Option<String>,
}

/// `GET /players/{account_id}/wl`
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct WinLoss {
    #[serde(default, deserialize_with = "lenient_count")]
    pub win: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    pub lose: u32,
}

pub struct OpenDotaClient {
    client: Client,
    base_url: String,
}

impl OpenDotaClient {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn player_url(&self, account: AccountId) -> String {
        format!("{}/players/{account}", self.base_url)
    }

    pub async fn player(&self, account: AccountId) -> Result<PlayerProfile> {
        let url = self.player_url(account);
        debug!("OpenDota: GET {url}");
        let profile = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .with_context(|| format!("Unexpected response from {url}"))?;
        Ok(profile)
    }

    pub async fn win_loss(&self, account: AccountId) -> Result<WinLoss> {
        let url = format!("{}/wl", self.player_url(account));
        debug!("OpenDota: GET {url}");
        let win_loss = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .with_context(|| format!("Unexpected response from {url}"))?;
        Ok(win_loss)
    }
}
