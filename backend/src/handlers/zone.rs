//! HTTP handlers for zone resolution endpoints

use axum::{
    extract::{Path, Query},
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::AppResult;
use crate::handlers::today;
use crate::services::zone::{ZipZone, ZoneResolution, ZoneService};

/// Query parameters for location lookups
#[derive(Debug, Deserialize)]
pub struct LocationQuery {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

/// Resolve zone, pest band and current season for coordinates
pub async fn resolve_zone(Query(query): Query<LocationQuery>) -> AppResult<Json<ZoneResolution>> {
    let service = ZoneService::new();
    let location = service.location(query.latitude, query.longitude)?;
    Ok(Json(service.resolve(location, today())))
}

/// Coarse zone for a US ZIP code
pub async fn resolve_zip(Path(zip): Path<String>) -> AppResult<Json<ZipZone>> {
    let service = ZoneService::new();
    let zone = service.resolve_zip(&zip)?;
    Ok(Json(zone))
}
