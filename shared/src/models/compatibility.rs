//! Seasonal compatibility models

use serde::{Deserialize, Serialize};

use super::plant::Plant;
use super::season::Season;

/// How suitable a season is for planting a given plant.
///
/// Variants are declared best-first so sorting ascending ranks excellent
/// verdicts ahead of poor ones.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityVerdict {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl std::fmt::Display for CompatibilityVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompatibilityVerdict::Excellent => write!(f, "Excellent"),
            CompatibilityVerdict::Good => write!(f, "Good"),
            CompatibilityVerdict::Fair => write!(f, "Fair"),
            CompatibilityVerdict::Poor => write!(f, "Poor"),
        }
    }
}

/// Result of evaluating a plant against a season. Always derived, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeasonalCompatibility {
    pub plant: Plant,
    pub season: Season,
    pub verdict: CompatibilityVerdict,
    pub reason: String,
    pub recommendations: Vec<String>,
}
