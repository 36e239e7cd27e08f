//! The static plant catalog and its query operations
//!
//! The catalog ships compiled into the binary as JSON. It is parsed and
//! validated once, then shared read-only (`Arc` in the server, a process-wide
//! cell in the browser module). All queries return plants in catalog order.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::CatalogError;
use crate::models::{CompanionRelation, Plant, PlantCategory, Season};
use crate::validation::{validate_difficulty, validate_ph_range, validate_zone_code};

const BUILTIN_PLANTS: &str = include_str!("../data/plants.json");

/// Immutable collection of plant records
#[derive(Debug, Clone)]
pub struct PlantCatalog {
    plants: Vec<Plant>,
}

impl PlantCatalog {
    /// Load the catalog compiled into the crate
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_PLANTS)
    }

    /// Parse and validate a JSON array of plants
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let plants: Vec<Plant> = serde_json::from_str(json)?;
        Self::new(plants)
    }

    /// Validate plant records and build the catalog
    pub fn new(plants: Vec<Plant>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for plant in &plants {
            if !seen.insert(plant.id.as_str()) {
                return Err(CatalogError::DuplicateId(plant.id.clone()));
            }
            validate_plant(plant)?;
        }
        Ok(Self { plants })
    }

    pub fn all(&self) -> &[Plant] {
        &self.plants
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Plant> {
        self.plants.iter().find(|p| p.id == id)
    }

    pub fn by_category(&self, category: PlantCategory) -> Vec<&Plant> {
        self.plants.iter().filter(|p| p.category == category).collect()
    }

    pub fn by_season(&self, season: Season) -> Vec<&Plant> {
        self.plants
            .iter()
            .filter(|p| p.planting_seasons.includes(season))
            .collect()
    }

    /// Plants whose difficulty is at most `max_difficulty`
    pub fn by_difficulty_at_most(&self, max_difficulty: u8) -> Vec<&Plant> {
        self.plants
            .iter()
            .filter(|p| p.difficulty <= max_difficulty)
            .collect()
    }

    pub fn by_zone(&self, zone: &str) -> Vec<&Plant> {
        self.plants.iter().filter(|p| p.grows_in(zone)).collect()
    }

    /// Case-insensitive substring match on common or scientific name.
    /// An empty query matches every plant.
    pub fn search(&self, query: &str) -> Vec<&Plant> {
        let query = query.to_lowercase();
        self.plants
            .iter()
            .filter(|p| matches_query(p, &query))
            .collect()
    }

    /// Apply every criterion set on the filter
    pub fn filter(&self, filter: &PlantFilter) -> Vec<&Plant> {
        self.plants.iter().filter(|p| filter.matches(p)).collect()
    }
}

fn matches_query(plant: &Plant, query_lower: &str) -> bool {
    query_lower.is_empty()
        || plant.name.to_lowercase().contains(query_lower)
        || plant.scientific_name.to_lowercase().contains(query_lower)
}

fn validate_plant(plant: &Plant) -> Result<(), CatalogError> {
    let invalid = |message| CatalogError::InvalidPlant {
        id: plant.id.clone(),
        message,
    };

    if plant.id.trim().is_empty() {
        return Err(invalid("Plant id cannot be empty"));
    }
    if !plant.planting_seasons.any() {
        return Err(CatalogError::NoPlantingSeason(plant.id.clone()));
    }
    validate_difficulty(plant.difficulty).map_err(invalid)?;
    validate_ph_range(plant.soil.ph_range.min, plant.soil.ph_range.max).map_err(invalid)?;
    for zone in &plant.zones {
        validate_zone_code(zone).map_err(invalid)?;
    }
    Ok(())
}

/// Combined catalog query; unset criteria match everything
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlantFilter {
    pub category: Option<PlantCategory>,
    pub season: Option<Season>,
    pub max_difficulty: Option<u8>,
    pub zone: Option<String>,
    #[serde(alias = "q")]
    pub query: Option<String>,
}

impl PlantFilter {
    pub fn matches(&self, plant: &Plant) -> bool {
        self.category.map_or(true, |c| plant.category == c)
            && self
                .season
                .map_or(true, |s| plant.planting_seasons.includes(s))
            && self.max_difficulty.map_or(true, |d| plant.difficulty <= d)
            && self.zone.as_deref().map_or(true, |z| plant.grows_in(z))
            && self
                .query
                .as_deref()
                .map_or(true, |q| matches_query(plant, &q.to_lowercase()))
    }
}

/// How two plants fare next to each other. Either plant's avoid list wins
/// over a companion listing.
pub fn companion_relation(a: &Plant, b: &Plant) -> CompanionRelation {
    if a.should_avoid(&b.name) || b.should_avoid(&a.name) {
        CompanionRelation::Avoid
    } else if a.is_companion_of(&b.name) || b.is_companion_of(&a.name) {
        CompanionRelation::Companion
    } else {
        CompanionRelation::Neutral
    }
}

/// Planting date plus the plant's days to harvest
pub fn estimated_harvest_date(plant: &Plant, planted_on: NaiveDate) -> Option<NaiveDate> {
    planted_on.checked_add_signed(Duration::days(i64::from(plant.maturity.days_to_harvest)))
}
