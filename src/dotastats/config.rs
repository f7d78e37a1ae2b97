use std::time::Duration;

use dotastats_model::SteamIdentifier;
use log::{error, info, warn};
use rankengine::RankEngineOptions;
use serde::{Deserialize, Serialize};

pub const ENV_WEBHOOK_URL: &str = "DISCORD_WEBHOOK_URL";
pub const ENV_STEAM_API_KEY: &str = "STEAM_API_KEY";
pub const ENV_STEAM_IDS: &str = "STEAM_IDS";
pub const ENV_PLAYER_NAMES: &str = "PLAYER_NAMES";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub webhook_url: String,

    /// Enables vanity name resolution and Steam persona names.
    #[serde(default)]
    pub steam_api_key: Option<String>,

    #[serde(default)]
    pub players: Vec<PlayerEntry>,

    #[serde(default = "default_last_place_phrases")]
    pub last_place_phrases: Vec<String>,

    #[serde(default = "default_opendota_base_url")]
    pub opendota_base_url: String,

    #[serde(default = "default_steam_base_url")]
    pub steam_base_url: String,

    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    #[serde(default = "default_webhook_timeout_ms")]
    pub webhook_timeout_ms: u64,

    #[serde(default = "default_fallback_name_prefix")]
    pub fallback_name_prefix: String,
}

fn default_last_place_phrases() -> Vec<String> {
    RankEngineOptions::default().last_place_phrases
}

fn default_opendota_base_url() -> String {
    "https://api.opendota.com/api".into()
}

fn default_steam_base_url() -> String {
    "https://api.steampowered.com".into()
}

fn default_request_timeout_ms() -> u64 {
    15 * 1000
}

fn default_webhook_timeout_ms() -> u64 {
    10 * 1000
}

fn default_fallback_name_prefix() -> String {
    "Player_".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            webhook_url: Default::default(),
            steam_api_key: None,
            players: Default::default(),
            last_place_phrases: default_last_place_phrases(),
            opendota_base_url: default_opendota_base_url(),
            steam_base_url: default_steam_base_url(),
            request_timeout_ms: default_request_timeout_ms(),
            webhook_timeout_ms: default_webhook_timeout_ms(),
            fallback_name_prefix: default_fallback_name_prefix(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerEntry {
    /// SteamID64, account id or vanity name.
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl PlayerEntry {
    pub fn new(id: impl Into<String>, name: Option<String>) -> Self {
        Self {
            id: id.into(),
            name,
        }
    }
}

/// Parsed roster entry, ready for stats collection.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry {
    pub identifier: SteamIdentifier,
    pub name: Option<String>,
}

impl Config {
    /// Overrides file values with the environment variables the report has always used.
    /// `lookup` is usually `|k| std::env::var(k).ok()`.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_WEBHOOK_URL).filter(|v| !v.trim().is_empty()) {
            self.webhook_url = url.trim().to_string();
        }
        if let Some(key) = lookup(ENV_STEAM_API_KEY).filter(|v| !v.trim().is_empty()) {
            self.steam_api_key = Some(key.trim().to_string());
        }
        let Some(ids) = lookup(ENV_STEAM_IDS).filter(|v| !v.trim().is_empty()) else {
            return;
        };
        let ids: Vec<&str> = ids.split(',').map(str::trim).collect();
        let names: Vec<String> = lookup(ENV_PLAYER_NAMES)
            .map(|v| v.split(',').map(|n| n.trim().to_string()).collect())
            .unwrap_or_default();
        let names = if names.len() == ids.len() {
            names
        } else {
            if !names.is_empty() {
                warn!(
                    "{ENV_PLAYER_NAMES} has {} entries but {ENV_STEAM_IDS} has {}, ignoring names",
                    names.len(),
                    ids.len()
                );
            }
            vec![String::new(); ids.len()]
        };
        self.players = ids
            .into_iter()
            .zip(names)
            .filter(|(id, _)| !id.is_empty())
            .map(|(id, name)| PlayerEntry::new(id, Some(name).filter(|n| !n.is_empty())))
            .collect();
        info!("Roster taken from {ENV_STEAM_IDS}: {} players", self.players.len());
    }

    /// Invalid entries are logged and skipped.
    pub fn roster(&self) -> Vec<RosterEntry> {
        self.players
            .iter()
            .filter_map(|p| match SteamIdentifier::try_from(p.id.as_str()) {
                Ok(identifier) => Some(RosterEntry {
                    identifier,
                    name: p.name.clone(),
                }),
                Err(e) => {
                    error!("Skipping roster entry: {e}");
                    None
                }
            })
            .collect()
    }

    pub fn rank_engine_options(&self) -> RankEngineOptions {
        RankEngineOptions {
            last_place_phrases: self.last_place_phrases.clone(),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn webhook_timeout(&self) -> Duration {
        Duration::from_millis(self.webhook_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use anyhow::Result;
    use dotastats_model::AccountId;

    use super::*;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| vars.get(k).cloned()
    }

    #[test]
    fn empty_yaml_is_default() -> Result<()> {
        let config: Config = serde_yaml::from_str("{}")?;
        assert_eq!(config, Config::default());
        assert_eq!(config.request_timeout(), Duration::from_secs(15));
        assert_eq!(config.webhook_timeout(), Duration::from_secs(10));
        Ok(())
    }

    #[test]
    fn yaml_players() -> Result<()> {
        let config: Config = serde_yaml::from_str(
            "webhookUrl: https://discord.test/hook\nplayers:\n  - id: \"105248644\"\n    name: Alice\n  - id: gabelogannewell\n",
        )?;
        assert_eq!(config.webhook_url, "https://discord.test/hook");
        assert_eq!(
            config.roster(),
            vec![
                RosterEntry {
                    identifier: SteamIdentifier::Account(AccountId::new(105248644)),
                    name: Some("Alice".into()),
                },
                RosterEntry {
                    identifier: SteamIdentifier::Vanity("gabelogannewell".into()),
                    name: None,
                },
            ]
        );
        Ok(())
    }

    #[test]
    fn env_overrides_file() {
        let mut config = Config {
            webhook_url: "from-file".into(),
            players: vec![PlayerEntry::new("1", None)],
            ..Default::default()
        };
        config.apply_env_overrides(env(&[
            (ENV_WEBHOOK_URL, "https://discord.test/env"),
            (ENV_STEAM_API_KEY, "secret"),
            (ENV_STEAM_IDS, "76561198000000000, 42"),
            (ENV_PLAYER_NAMES, "Alice,Bob"),
        ]));
        assert_eq!(config.webhook_url, "https://discord.test/env");
        assert_eq!(config.steam_api_key.as_deref(), Some("secret"));
        assert_eq!(
            config.players,
            vec![
                PlayerEntry::new("76561198000000000", Some("Alice".into())),
                PlayerEntry::new("42", Some("Bob".into())),
            ]
        );
    }

    #[test]
    fn mismatched_names_are_ignored() {
        let mut config = Config::default();
        config.apply_env_overrides(env(&[
            (ENV_STEAM_IDS, "1,2,3"),
            (ENV_PLAYER_NAMES, "Alice,Bob"),
        ]));
        assert!(config.players.iter().all(|p| p.name.is_none()));
        assert_eq!(config.players.len(), 3);
    }

    #[test]
    fn blank_ids_are_dropped() {
        let mut config = Config::default();
        config.apply_env_overrides(env(&[(ENV_STEAM_IDS, "1,,2,")]));
        assert_eq!(
            config.players,
            vec![PlayerEntry::new("1", None), PlayerEntry::new("2", None)]
        );
    }

    #[test]
    fn missing_env_keeps_file_values() {
        let mut config = Config {
            webhook_url: "from-file".into(),
            players: vec![PlayerEntry::new("7", Some("Seven".into()))],
            ..Default::default()
        };
        let before = config.clone();
        config.apply_env_overrides(env(&[(ENV_WEBHOOK_URL, "  ")]));
        assert_eq!(config, before);
    }

    #[test]
    fn blank_steam_ids_keep_file_roster() {
        let mut config = Config {
            players: vec![PlayerEntry::new("105248644", Some("Alice".into()))],
            ..Default::default()
        };
        let before = config.clone();
        config.apply_env_overrides(env(&[(ENV_STEAM_IDS, ""), (ENV_PLAYER_NAMES, "Bob")]));
        assert_eq!(config, before);
        config.apply_env_overrides(env(&[(ENV_STEAM_IDS, "   ")]));
        assert_eq!(config, before);
    }

    #[test]
    fn invalid_roster_entries_are_skipped() {
        let config = Config {
            players: vec![PlayerEntry::new(" ", None), PlayerEntry::new("5", None)],
            ..Default::default()
        };
        assert_eq!(
            config.roster(),
            vec![RosterEntry {
                identifier: SteamIdentifier::Account(AccountId::new(5)),
                name: None,
            }]
        );
    }
}
