//! HTTP handlers for planting recommendations

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::AppResult;
use crate::handlers::today;
use crate::services::recommendation::{Recommendation, RecommendationService};
use crate::services::ZoneService;
use crate::AppState;

/// Query parameters for recommendations
#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub latitude: Decimal,
    pub longitude: Decimal,
    /// Defaults to today
    pub date: Option<NaiveDate>,
}

/// Ranked plants, pest alerts and tasks for a location
pub async fn get_recommendations(
    State(state): State<AppState>,
    Query(query): Query<RecommendationQuery>,
) -> AppResult<Json<Recommendation>> {
    let zones = ZoneService::new();
    let location = zones.location(query.latitude, query.longitude)?;
    let date = query.date.unwrap_or_else(today);

    let service = RecommendationService::new(state.catalog, state.pest_alerts);
    let recommendation = service.recommend(zones.resolve(location, date), date);
    Ok(Json(recommendation))
}
