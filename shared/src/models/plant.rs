//! Plant catalog models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::season::PlantingSeasons;

/// A plant record in the static catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plant {
    pub id: String,
    pub name: String,
    pub scientific_name: String,
    pub category: PlantCategory,
    /// 1 (easiest) to 5 (hardest)
    pub difficulty: u8,
    /// Hardiness zone codes, e.g. "6b"
    pub zones: Vec<String>,
    pub planting_seasons: PlantingSeasons,
    pub watering: Watering,
    pub soil: SoilRequirements,
    pub sun: SunRequirement,
    pub spacing: Spacing,
    pub maturity: Maturity,
    pub growing_tips: Vec<String>,
    pub common_pests: Vec<String>,
    pub companions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avoid: Option<Vec<String>>,
}

impl Plant {
    /// Whether the plant is listed for the given zone code
    pub fn grows_in(&self, zone: &str) -> bool {
        let zone = zone.trim();
        self.zones.iter().any(|z| z.eq_ignore_ascii_case(zone))
    }

    pub fn is_companion_of(&self, other_name: &str) -> bool {
        contains_name(&self.companions, other_name)
    }

    pub fn should_avoid(&self, other_name: &str) -> bool {
        self.avoid
            .as_deref()
            .map(|names| contains_name(names, other_name))
            .unwrap_or(false)
    }
}

fn contains_name(names: &[String], name: &str) -> bool {
    names.iter().any(|n| n.eq_ignore_ascii_case(name))
}

/// Plant categories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PlantCategory {
    Vegetable,
    Herb,
    Fruit,
    Flower,
    Tree,
    Shrub,
}

impl std::fmt::Display for PlantCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlantCategory::Vegetable => write!(f, "Vegetable"),
            PlantCategory::Herb => write!(f, "Herb"),
            PlantCategory::Fruit => write!(f, "Fruit"),
            PlantCategory::Flower => write!(f, "Flower"),
            PlantCategory::Tree => write!(f, "Tree"),
            PlantCategory::Shrub => write!(f, "Shrub"),
        }
    }
}

/// Watering needs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Watering {
    pub frequency: WateringFrequency,
    pub amount: WateringAmount,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WateringFrequency {
    Daily,
    EveryOtherDay,
    TwiceWeekly,
    Weekly,
    Biweekly,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WateringAmount {
    Light,
    Moderate,
    Heavy,
}

/// Soil requirements
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SoilRequirements {
    #[serde(rename = "type")]
    pub soil_type: SoilType,
    pub ph_range: PhRange,
    pub drainage: Drainage,
}

/// Acceptable soil pH, inclusive on both ends
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PhRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl PhRange {
    pub fn contains(&self, ph: Decimal) -> bool {
        ph >= self.min && ph <= self.max
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SoilType {
    Loamy,
    Sandy,
    Clay,
    Silty,
    Peaty,
    Chalky,
    WellDrained,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Drainage {
    Poor,
    Moderate,
    Good,
    Excellent,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SunRequirement {
    FullSun,
    PartialSun,
    PartialShade,
    FullShade,
}

impl std::fmt::Display for SunRequirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SunRequirement::FullSun => write!(f, "Full sun"),
            SunRequirement::PartialSun => write!(f, "Partial sun"),
            SunRequirement::PartialShade => write!(f, "Partial shade"),
            SunRequirement::FullShade => write!(f, "Full shade"),
        }
    }
}

/// Recommended spacing, as authored (e.g. "18-24 inches")
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Spacing {
    pub plants: String,
    pub rows: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Maturity {
    pub days_to_harvest: u32,
    pub harvest_window: String,
}

/// Relationship between two plants grown side by side
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CompanionRelation {
    Companion,
    Avoid,
    Neutral,
}

impl std::fmt::Display for CompanionRelation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompanionRelation::Companion => write!(f, "Good companions"),
            CompanionRelation::Avoid => write!(f, "Keep apart"),
            CompanionRelation::Neutral => write!(f, "No known interaction"),
        }
    }
}
