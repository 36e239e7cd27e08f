//! Plant catalog service

use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;

use crate::error::{AppError, AppResult};
use shared::{
    best_seasons, companion_relation, estimated_harvest_date, evaluate, validate_difficulty,
    validate_zone_code, CompanionRelation, Plant, PlantCatalog, PlantFilter, Season,
    SeasonalCompatibility,
};

/// Relation between two catalog plants
#[derive(Debug, Clone, Serialize)]
pub struct CompanionCheck {
    pub plant_id: String,
    pub other_id: String,
    pub relation: CompanionRelation,
}

/// Expected harvest for a planting
#[derive(Debug, Clone, Serialize)]
pub struct HarvestEstimate {
    pub plant_id: String,
    pub planted_on: NaiveDate,
    pub days_to_harvest: u32,
    pub estimated_harvest_date: NaiveDate,
    pub harvest_window: String,
}

/// Compatibility for one season plus the plant's full planting window
#[derive(Debug, Clone, Serialize)]
pub struct CompatibilityReport {
    #[serde(flatten)]
    pub compatibility: SeasonalCompatibility,
    pub best_seasons: Vec<Season>,
}

/// Read-only queries over the plant catalog
#[derive(Clone)]
pub struct PlantService {
    catalog: Arc<PlantCatalog>,
}

impl PlantService {
    /// Create a new plant service
    pub fn new(catalog: Arc<PlantCatalog>) -> Self {
        Self { catalog }
    }

    /// List plants matching the filter, in catalog order
    pub fn list(&self, filter: &PlantFilter) -> AppResult<Vec<Plant>> {
        if let Some(max_difficulty) = filter.max_difficulty {
            validate_difficulty(max_difficulty)
                .map_err(|msg| AppError::validation("max_difficulty", msg))?;
        }
        if let Some(zone) = &filter.zone {
            validate_zone_code(zone).map_err(|msg| AppError::validation("zone", msg))?;
        }

        let plants: Vec<Plant> = self.catalog.filter(filter).into_iter().cloned().collect();
        tracing::debug!("Plant filter {:?} matched {} plants", filter, plants.len());
        Ok(plants)
    }

    /// Get a plant by ID
    pub fn get(&self, plant_id: &str) -> AppResult<&Plant> {
        self.catalog
            .get(plant_id)
            .ok_or_else(|| AppError::NotFound(format!("Plant {}", plant_id)))
    }

    /// Evaluate a plant for a season
    pub fn compatibility(&self, plant_id: &str, season: Season) -> AppResult<CompatibilityReport> {
        let plant = self.get(plant_id)?;
        Ok(CompatibilityReport {
            compatibility: evaluate(plant, season),
            best_seasons: best_seasons(plant),
        })
    }

    /// Companion relation between two plants
    pub fn companions(&self, plant_id: &str, other_id: &str) -> AppResult<CompanionCheck> {
        let plant = self.get(plant_id)?;
        let other = self.get(other_id)?;

        Ok(CompanionCheck {
            plant_id: plant.id.clone(),
            other_id: other.id.clone(),
            relation: companion_relation(plant, other),
        })
    }

    /// Harvest estimate for a planting date
    pub fn harvest(&self, plant_id: &str, planted_on: NaiveDate) -> AppResult<HarvestEstimate> {
        let plant = self.get(plant_id)?;
        let harvest_date = estimated_harvest_date(plant, planted_on)
            .ok_or_else(|| AppError::validation("planted_on", "Planting date is out of range"))?;

        Ok(HarvestEstimate {
            plant_id: plant.id.clone(),
            planted_on,
            days_to_harvest: plant.maturity.days_to_harvest,
            estimated_harvest_date: harvest_date,
            harvest_window: plant.maturity.harvest_window.clone(),
        })
    }

    /// Number of plants in the catalog
    pub fn count(&self) -> usize {
        self.catalog.len()
    }
}
