//! Season models

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// One of the four planting seasons.
///
/// Serialized lowercase. Capitalized names are accepted on input so tables
/// authored as "Spring"/"Summer" share the same key space.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    #[serde(alias = "Spring")]
    Spring,
    #[serde(alias = "Summer")]
    Summer,
    #[serde(alias = "Fall", alias = "autumn", alias = "Autumn")]
    Fall,
    #[serde(alias = "Winter")]
    Winter,
}

impl Season {
    /// All seasons in calendar order starting from spring
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Season::Spring => write!(f, "Spring"),
            Season::Summer => write!(f, "Summer"),
            Season::Fall => write!(f, "Fall"),
            Season::Winter => write!(f, "Winter"),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown season: {0}")]
pub struct UnknownSeason(pub String);

impl FromStr for Season {
    type Err = UnknownSeason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "fall" | "autumn" => Ok(Season::Fall),
            "winter" => Ok(Season::Winter),
            _ => Err(UnknownSeason(s.to_string())),
        }
    }
}

/// Seasonal planting window. Flags are independent; a plant may be
/// plantable in several seasons.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PlantingSeasons {
    pub spring: bool,
    pub summer: bool,
    pub fall: bool,
    pub winter: bool,
}

impl PlantingSeasons {
    pub fn includes(&self, season: Season) -> bool {
        match season {
            Season::Spring => self.spring,
            Season::Summer => self.summer,
            Season::Fall => self.fall,
            Season::Winter => self.winter,
        }
    }

    /// True when at least one flag is set
    pub fn any(&self) -> bool {
        self.spring || self.summer || self.fall || self.winter
    }

    /// Seasons whose flag is set, in spring/summer/fall/winter order
    pub fn seasons(&self) -> Vec<Season> {
        Season::ALL
            .into_iter()
            .filter(|season| self.includes(*season))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_parse_case_insensitive() {
        assert_eq!("Spring".parse::<Season>(), Ok(Season::Spring));
        assert_eq!("summer".parse::<Season>(), Ok(Season::Summer));
        assert_eq!(" FALL ".parse::<Season>(), Ok(Season::Fall));
        assert_eq!("autumn".parse::<Season>(), Ok(Season::Fall));
        assert_eq!("Winter".parse::<Season>(), Ok(Season::Winter));
        assert!("monsoon".parse::<Season>().is_err());
    }

    #[test]
    fn test_season_serde_accepts_both_casings() {
        let lower: Season = serde_json::from_str("\"spring\"").unwrap();
        let upper: Season = serde_json::from_str("\"Spring\"").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(serde_json::to_string(&Season::Fall).unwrap(), "\"fall\"");
    }

    #[test]
    fn test_planting_seasons_listing() {
        let window = PlantingSeasons {
            spring: true,
            summer: false,
            fall: true,
            winter: false,
        };
        assert!(window.any());
        assert_eq!(window.seasons(), vec![Season::Spring, Season::Fall]);
        assert!(!PlantingSeasons::default().any());
    }
}
