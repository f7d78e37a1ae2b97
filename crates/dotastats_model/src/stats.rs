use log::warn;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::AccountId;

/// Raw per-player data as gathered from the stats providers, before any derivation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    #[serde(default)]
    pub account: AccountId,
    pub name: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub wins: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    pub losses: u32,
    #[serde(default, deserialize_with = "lenient_number")]
    pub rank_tier: Option<i64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub leaderboard_rank: Option<i64>,
}

impl PlayerStats {
    pub fn new(account: AccountId, name: impl Into<String>) -> Self {
        PlayerStats {
            account,
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_record(mut self, wins: u32, losses: u32) -> Self {
        self.wins = wins;
        self.losses = losses;
        self
    }

    pub fn with_rank(mut self, rank_tier: Option<i64>, leaderboard_rank: Option<i64>) -> Self {
        self.rank_tier = rank_tier;
        self.leaderboard_rank = leaderboard_rank;
        self
    }

    pub fn total_matches(&self) -> u64 {
        self.wins as u64 + self.losses as u64
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientNumber {
    Integer(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

impl LenientNumber {
    fn into_i64(self) -> Option<i64> {
        match self {
            LenientNumber::Integer(v) => Some(v),
            LenientNumber::Float(v) if v.fract() == 0.0 && v.abs() < i64::MAX as f64 => {
                Some(v as i64)
            }
            LenientNumber::Text(s) => s.trim().parse().ok(),
            LenientNumber::Float(_) | LenientNumber::Other(_) => None,
        }
    }
}

/// Accepts any JSON/YAML value; anything that is not an integer becomes `None`.
pub fn lenient_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<LenientNumber> = Option::deserialize(deserializer)?;
    Ok(value.and_then(LenientNumber::into_i64))
}

/// Like [`lenient_number`], but for counters: missing, negative or malformed values are 0.
pub fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = lenient_number(deserializer)?;
    Ok(match value {
        Some(v) => u32::try_from(v).unwrap_or_else(|_| {
            warn!("Ignoring out of range counter value: {v}");
            0
        }),
        None => 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn deserialize_complete() -> Result<()> {
        let stats: PlayerStats = serde_json::from_str(
            r#"{"account": 1234, "name": "Alice", "wins": 10, "losses": 5, "rankTier": 65, "leaderboardRank": null}"#,
        )?;
        assert_eq!(
            stats,
            PlayerStats::new(AccountId::new(1234), "Alice")
                .with_record(10, 5)
                .with_rank(Some(65), None)
        );
        assert_eq!(stats.total_matches(), 15);
        Ok(())
    }

    #[test]
    fn missing_fields_default() -> Result<()> {
        let stats: PlayerStats = serde_json::from_str(r#"{"name": "Bob"}"#)?;
        assert_eq!(stats.wins, 0);
        assert_eq!(stats.losses, 0);
        assert_eq!(stats.rank_tier, None);
        assert_eq!(stats.leaderboard_rank, None);
        assert_eq!(stats.account, AccountId::default());
        Ok(())
    }

    #[test]
    fn malformed_numbers_degrade() -> Result<()> {
        let stats: PlayerStats = serde_json::from_str(
            r#"{"name": "Carol", "wins": -3, "losses": "7", "rankTier": "abc", "leaderboardRank": 2.5}"#,
        )?;
        assert_eq!(stats.wins, 0);
        assert_eq!(stats.losses, 7);
        assert_eq!(stats.rank_tier, None);
        assert_eq!(stats.leaderboard_rank, None);
        Ok(())
    }

    #[test]
    fn yaml_input() -> Result<()> {
        let stats: Vec<PlayerStats> = serde_yaml::from_str(
            "- name: Dave\n  wins: 3\n  losses: 7\n  rankTier: 81\n  leaderboardRank: 12\n",
        )?;
        assert_eq!(stats[0].rank_tier, Some(81));
        assert_eq!(stats[0].leaderboard_rank, Some(12));
        Ok(())
    }
}
