use anyhow::{Context, Result};
use dotastats_model::AccountId;
use log::{debug, warn};
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SteamResponse<T> {
    response: T,
}

#[derive(Debug, Default, PartialEq, Deserialize)]
struct VanityResolution {
    #[serde(default)]
    success: i64,
    #[serde(default)]
    steamid: Option<String>,
}

impl VanityResolution {
    fn account(&self) -> Option<AccountId> {
        if self.success != 1 {
            return None;
        }
        let steam_id64: u64 = self.steamid.as_deref()?.trim().parse().ok()?;
        AccountId::from_steam_id64(steam_id64)
    }
}

#[derive(Debug, Default, Deserialize)]
struct PlayerSummaries {
    #[serde(default)]
    players: Vec<PlayerSummary>,
}

#[derive(Debug, Default, Deserialize)]
struct PlayerSummary {
    #[serde(default)]
    personaname: Option<String>,
}

impl PlayerSummaries {
    fn persona_name(self) -> Option<String> {
        self.players
            .into_iter()
            .next()
            .and_then(|p| p.personaname)
            .filter(|n| !n.trim().is_empty())
    }
}

/// Steam Web API, only usable with a key.
pub struct SteamClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SteamClient {
    pub fn new(client: Client, base_url: &str, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    pub async fn resolve_vanity(&self, vanity: &str) -> Result<Option<AccountId>> {
        let url = format!("{}/ISteamUser/ResolveVanityURL/v1/", self.base_url);
        debug!("Steam: GET {url} vanityurl={vanity}");
        let resolution: SteamResponse<VanityResolution> = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("vanityurl", vanity)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .with_context(|| format!("Unexpected response from {url}"))?;
        let account = resolution.response.account();
        if account.is_none() {
            warn!("Steam: cannot resolve vanity name {vanity}");
        }
        Ok(account)
    }

    pub async fn persona_name(&self, account: AccountId) -> Result<Option<String>> {
        let url = format!("{}/ISteamUser/GetPlayerSummaries/v2/", self.base_url);
        let steam_id64 = account.to_steam_id64().to_string();
        debug!("Steam: GET {url} steamids={steam_id64}");
        let summaries: SteamResponse<PlayerSummaries> = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("steamids", steam_id64.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .with_context(|| format!("Unexpected response from {url}"))?;
        Ok(summaries.response.persona_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_vanity() -> Result<()> {
        let r: SteamResponse<VanityResolution> = serde_json::from_str(
            r#"{"response": {"steamid": "76561197960287930", "success": 1}}"#,
        )?;
        assert_eq!(r.response.account(), Some(AccountId::new(22202)));
        Ok(())
    }

    #[test]
    fn unresolved_vanity() -> Result<()> {
        let r: SteamResponse<VanityResolution> =
            serde_json::from_str(r#"{"response": {"success": 42, "message": "No match"}}"#)?;
        assert_eq!(r.response.account(), None);
        Ok(())
    }

    #[test]
    fn malformed_steam_id() {
        let r = VanityResolution {
            success: 1,
            steamid: Some("not-a-number".into()),
        };
        assert_eq!(r.account(), None);
    }

    #[test]
    fn first_persona_name() -> Result<()> {
        let r: SteamResponse<PlayerSummaries> = serde_json::from_str(
            r#"{"response": {"players": [{"steamid": "76561197960287930", "personaname": "Rabscuttle"}]}}"#,
        )?;
        assert_eq!(r.response.persona_name().as_deref(), Some("Rabscuttle"));
        Ok(())
    }

    #[test]
    fn no_players() -> Result<()> {
        let r: SteamResponse<PlayerSummaries> =
            serde_json::from_str(r#"{"response": {"players": []}}"#)?;
        assert_eq!(r.response.persona_name(), None);
        Ok(())
    }
}
