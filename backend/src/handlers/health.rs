//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::services::{PestService, PlantService};
use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub environment: String,
    pub plants: usize,
    pub pest_bands: usize,
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let environment = state.config.environment.clone();
    let plants = PlantService::new(state.catalog).count();
    let pest_bands = PestService::new(state.pest_alerts).band_count();

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment,
        plants,
        pest_bands,
    })
}
