//! HTTP handlers for plant catalog endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::AppResult;
use crate::handlers::today;
use crate::services::plant::{CompanionCheck, CompatibilityReport, HarvestEstimate, PlantService};
use crate::AppState;
use shared::{current_season, Plant, PlantFilter, Season};

/// List plants, optionally filtered
pub async fn list_plants(
    State(state): State<AppState>,
    Query(filter): Query<PlantFilter>,
) -> AppResult<Json<Vec<Plant>>> {
    let service = PlantService::new(state.catalog);
    let plants = service.list(&filter)?;
    Ok(Json(plants))
}

/// Get a plant by ID
pub async fn get_plant(
    State(state): State<AppState>,
    Path(plant_id): Path<String>,
) -> AppResult<Json<Plant>> {
    let service = PlantService::new(state.catalog);
    let plant = service.get(&plant_id)?.clone();
    Ok(Json(plant))
}

/// Query parameters for compatibility checks
#[derive(Debug, Deserialize)]
pub struct CompatibilityQuery {
    pub season: Option<Season>,
}

/// Evaluate a plant for a season (defaults to the current season)
pub async fn get_compatibility(
    State(state): State<AppState>,
    Path(plant_id): Path<String>,
    Query(query): Query<CompatibilityQuery>,
) -> AppResult<Json<CompatibilityReport>> {
    let service = PlantService::new(state.catalog);
    let season = query.season.unwrap_or_else(|| current_season(&today()));
    let report = service.compatibility(&plant_id, season)?;
    Ok(Json(report))
}

/// Companion relation between two plants
pub async fn get_companions(
    State(state): State<AppState>,
    Path((plant_id, other_id)): Path<(String, String)>,
) -> AppResult<Json<CompanionCheck>> {
    let service = PlantService::new(state.catalog);
    let check = service.companions(&plant_id, &other_id)?;
    Ok(Json(check))
}

/// Query parameters for harvest estimates
#[derive(Debug, Deserialize)]
pub struct HarvestQuery {
    pub planted_on: Option<NaiveDate>,
}

/// Estimated harvest date for a planting (defaults to planting today)
pub async fn get_harvest_estimate(
    State(state): State<AppState>,
    Path(plant_id): Path<String>,
    Query(query): Query<HarvestQuery>,
) -> AppResult<Json<HarvestEstimate>> {
    let service = PlantService::new(state.catalog);
    let planted_on = query.planted_on.unwrap_or_else(today);
    let estimate = service.harvest(&plant_id, planted_on)?;
    Ok(Json(estimate))
}
