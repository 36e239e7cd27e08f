//! HTTP handlers for pest alert endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::AppResult;
use crate::handlers::today;
use crate::services::pest::{PestReport, PestService};
use crate::AppState;
use shared::{current_season, Season};

/// Query parameters for band lookups
#[derive(Debug, Deserialize)]
pub struct BandQuery {
    pub band: String,
    pub season: Option<Season>,
}

/// Alerts for a zone band such as "6a-7b"
pub async fn get_pest_alerts(
    State(state): State<AppState>,
    Query(query): Query<BandQuery>,
) -> Json<PestReport> {
    let service = PestService::new(state.pest_alerts);
    let season = query.season.unwrap_or_else(|| current_season(&today()));
    Json(service.by_band(&query.band, season))
}

/// Query parameters for location lookups
#[derive(Debug, Deserialize)]
pub struct PestLocationQuery {
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub season: Option<Season>,
}

/// Alerts for the band containing a location
pub async fn get_pest_alerts_for_location(
    State(state): State<AppState>,
    Query(query): Query<PestLocationQuery>,
) -> AppResult<Json<PestReport>> {
    let service = PestService::new(state.pest_alerts);
    let season = query.season.unwrap_or_else(|| current_season(&today()));
    let report = service.by_location(query.latitude, query.longitude, season)?;
    Ok(Json(report))
}
