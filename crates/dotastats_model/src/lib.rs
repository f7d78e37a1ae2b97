use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod medal;
pub mod stats;
pub mod win_rate;

/// Offset between a SteamID64 and the 32-bit account id used by OpenDota.
pub const STEAM_ID64_BASE: u64 = 76561197960265728;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, PartialOrd, Ord, Hash, Default)]
pub struct AccountId(u32);

impl AccountId {
    pub fn new(value: u32) -> Self {
        AccountId(value)
    }

    pub fn to_steam_id64(&self) -> u64 {
        STEAM_ID64_BASE + self.0 as u64
    }

    pub fn from_steam_id64(value: u64) -> Option<Self> {
        value
            .checked_sub(STEAM_ID64_BASE)
            .and_then(|v| u32::try_from(v).ok())
            .map(AccountId)
    }

    /// Last `n` digits of the account id, used for placeholder names.
    pub fn short_suffix(&self, n: usize) -> String {
        let digits = self.0.to_string();
        let start = digits.len().saturating_sub(n);
        digits[start..].to_string()
    }
}

impl From<u32> for AccountId {
    fn from(value: u32) -> Self {
        AccountId(value)
    }
}

impl Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Invalid Steam id: \"{0}\"")]
pub struct InvalidSteamId(String);

/// A roster entry as written in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SteamIdentifier {
    Account(AccountId),
    Vanity(String),
}

impl TryFrom<&str> for SteamIdentifier {
    type Error = InvalidSteamId;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let value = value.trim();
        if value.is_empty() {
            return Err(InvalidSteamId(value.to_string()));
        }
        if !value.chars().all(|c| c.is_ascii_digit()) {
            return Ok(SteamIdentifier::Vanity(value.to_string()));
        }
        let number: u64 = value
            .parse()
            .map_err(|_| InvalidSteamId(value.to_string()))?;
        if number >= STEAM_ID64_BASE {
            AccountId::from_steam_id64(number)
                .map(SteamIdentifier::Account)
                .ok_or_else(|| InvalidSteamId(value.to_string()))
        } else {
            u32::try_from(number)
                .map(|v| SteamIdentifier::Account(AccountId(v)))
                .map_err(|_| InvalidSteamId(value.to_string()))
        }
    }
}

impl TryFrom<String> for SteamIdentifier {
    type Error = InvalidSteamId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        SteamIdentifier::try_from(value.as_str())
    }
}

impl Display for SteamIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SteamIdentifier::Account(a) => a.fmt(f),
            SteamIdentifier::Vanity(v) => v.fmt(f),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn steam_id64_is_converted_to_account() {
        assert_eq!(
            SteamIdentifier::try_from("76561198000000000"),
            Ok(SteamIdentifier::Account(AccountId::new(39734272)))
        );
    }

    #[test]
    fn short_number_is_already_an_account() {
        assert_eq!(
            SteamIdentifier::try_from(" 105248644 "),
            Ok(SteamIdentifier::Account(AccountId::new(105248644)))
        );
    }

    #[test]
    fn text_is_a_vanity_name() {
        assert_eq!(
            SteamIdentifier::try_from("gabelogannewell"),
            Ok(SteamIdentifier::Vanity("gabelogannewell".into()))
        );
    }

    #[test]
    fn blank_entry_is_rejected() {
        assert_eq!(
            &SteamIdentifier::try_from("  ").unwrap_err().to_string(),
            "Invalid Steam id: \"\""
        );
    }

    #[test]
    fn oversized_number_is_rejected() {
        assert!(SteamIdentifier::try_from("99999999999").is_err());
    }

    #[test]
    fn account_round_trips_through_steam_id64() {
        let account = AccountId::new(123456);
        assert_eq!(AccountId::from_steam_id64(account.to_steam_id64()), Some(account));
    }

    #[test]
    fn short_suffix() {
        assert_eq!(AccountId::new(105248644).short_suffix(6), "248644");
        assert_eq!(AccountId::new(42).short_suffix(6), "42");
    }
}
