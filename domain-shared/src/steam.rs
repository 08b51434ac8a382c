use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of decimal digits of a 64-bit Steam ID as users paste them.
pub const STEAM_ID_DIGITS: usize = 17;

/// 64-bit Steam account identifier.
///
/// Only the 17-digit decimal form is accepted, so malformed input is rejected
/// before any request reaches the Steam Web API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SteamId(pub u64);

impl SteamId {
    pub fn parse(raw: &str) -> Result<Self, InvalidSteamId> {
        if raw.len() != STEAM_ID_DIGITS || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidSteamId(raw.to_string()));
        }

        raw.parse::<u64>()
            .map(SteamId)
            .map_err(|_| InvalidSteamId(raw.to_string()))
    }
}

impl FromStr for SteamId {
    type Err = InvalidSteamId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SteamId::parse(s)
    }
}

impl TryFrom<String> for SteamId {
    type Error = InvalidSteamId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        SteamId::parse(&value)
    }
}

impl From<SteamId> for String {
    fn from(value: SteamId) -> Self {
        value.to_string()
    }
}

impl fmt::Display for SteamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.0, width = STEAM_ID_DIGITS)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0:?} is not a 17-digit Steam ID")]
pub struct InvalidSteamId(pub String);

/// Steam application (game) identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppId(pub u32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_seventeen_digits() {
        let id = SteamId::parse("76561197960287930").unwrap();
        assert_eq!(id, SteamId(76561197960287930));
        assert_eq!(id.to_string(), "76561197960287930");
    }

    #[test]
    fn rejects_malformed_ids() {
        for raw in [
            "",
            "7656119796028793",
            "765611979602879300",
            "7656119796028793a",
            "+6561197960287930",
            " 76561197960287930",
            "STEAM_0:0:11101",
        ] {
            assert!(SteamId::parse(raw).is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn keeps_leading_zeros_when_displayed() {
        let id = SteamId::parse("00000000000000042").unwrap();
        assert_eq!(id.to_string(), "00000000000000042");
    }
}
