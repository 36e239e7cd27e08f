//! Hardiness zone models

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// USDA-style hardiness zone code such as "7a"
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct ZoneCode {
    number: u8,
    half: ZoneHalf,
}

/// Colder (`A`) or warmer (`B`) half of a zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ZoneHalf {
    A,
    B,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid hardiness zone code: {0}")]
pub struct InvalidZoneCode(pub String);

impl ZoneCode {
    pub const MIN_NUMBER: u8 = 1;
    pub const MAX_NUMBER: u8 = 13;

    pub fn new(number: u8, half: ZoneHalf) -> Result<Self, InvalidZoneCode> {
        if !(Self::MIN_NUMBER..=Self::MAX_NUMBER).contains(&number) {
            let suffix = match half {
                ZoneHalf::A => 'a',
                ZoneHalf::B => 'b',
            };
            return Err(InvalidZoneCode(format!("{}{}", number, suffix)));
        }
        Ok(Self { number, half })
    }

    /// For compile-time tables whose values are known to be in range
    pub(crate) const fn from_parts(number: u8, half: ZoneHalf) -> Self {
        Self { number, half }
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn half(&self) -> ZoneHalf {
        self.half
    }
}

impl std::fmt::Display for ZoneCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.half {
            ZoneHalf::A => write!(f, "{}a", self.number),
            ZoneHalf::B => write!(f, "{}b", self.number),
        }
    }
}

impl FromStr for ZoneCode {
    type Err = InvalidZoneCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().to_ascii_lowercase();
        let invalid = || InvalidZoneCode(s.to_string());

        let mut chars = trimmed.chars();
        let half = match chars.next_back() {
            Some('a') => ZoneHalf::A,
            Some('b') => ZoneHalf::B,
            _ => return Err(invalid()),
        };
        let digits = chars.as_str();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let number: u8 = digits.parse().map_err(|_| invalid())?;
        Self::new(number, half).map_err(|_| invalid())
    }
}

impl TryFrom<String> for ZoneCode {
    type Error = InvalidZoneCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ZoneCode> for String {
    fn from(code: ZoneCode) -> Self {
        code.to_string()
    }
}

/// Coarse latitude band used only to index the pest alert table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum HardinessZoneBand {
    #[serde(rename = "6a-7b")]
    Zones6aTo7b,
    #[serde(rename = "7a-8b")]
    Zones7aTo8b,
    #[serde(rename = "8a-9b")]
    Zones8aTo9b,
}

impl HardinessZoneBand {
    pub const ALL: [HardinessZoneBand; 3] = [
        HardinessZoneBand::Zones6aTo7b,
        HardinessZoneBand::Zones7aTo8b,
        HardinessZoneBand::Zones8aTo9b,
    ];

    /// Table key, e.g. "6a-7b"
    pub fn as_str(&self) -> &'static str {
        match self {
            HardinessZoneBand::Zones6aTo7b => "6a-7b",
            HardinessZoneBand::Zones7aTo8b => "7a-8b",
            HardinessZoneBand::Zones8aTo9b => "8a-9b",
        }
    }
}

impl std::fmt::Display for HardinessZoneBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_code_parse() {
        let code: ZoneCode = "7a".parse().unwrap();
        assert_eq!(code.number(), 7);
        assert_eq!(code.half(), ZoneHalf::A);
        assert_eq!(code.to_string(), "7a");

        let code: ZoneCode = "10B".parse().unwrap();
        assert_eq!(code.to_string(), "10b");
    }

    #[test]
    fn test_zone_code_parse_invalid() {
        assert!("".parse::<ZoneCode>().is_err());
        assert!("a".parse::<ZoneCode>().is_err());
        assert!("7".parse::<ZoneCode>().is_err());
        assert!("7c".parse::<ZoneCode>().is_err());
        assert!("0a".parse::<ZoneCode>().is_err());
        assert!("14b".parse::<ZoneCode>().is_err());
        assert!("-1a".parse::<ZoneCode>().is_err());
    }

    #[test]
    fn test_zone_code_serde_as_string() {
        let code: ZoneCode = "6b".parse().unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"6b\"");
        let back: ZoneCode = serde_json::from_str("\"6b\"").unwrap();
        assert_eq!(back, code);
        assert!(serde_json::from_str::<ZoneCode>("\"6z\"").is_err());
    }

    #[test]
    fn test_band_serializes_as_key() {
        assert_eq!(
            serde_json::to_string(&HardinessZoneBand::Zones7aTo8b).unwrap(),
            "\"7a-8b\""
        );
        assert_eq!(HardinessZoneBand::Zones8aTo9b.to_string(), "8a-9b");
    }
}
