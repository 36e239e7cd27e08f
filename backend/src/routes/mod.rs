//! Route definitions for the Garden Planner API

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/plants", plant_routes())
        .nest("/zones", zone_routes())
        .route("/recommendations", get(handlers::get_recommendations))
        .nest("/pests", pest_routes())
        .nest("/calendar", calendar_routes())
        .route("/weather/advice", post(handlers::get_weather_advice))
}

/// Plant catalog routes
fn plant_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_plants))
        .route("/:plant_id", get(handlers::get_plant))
        .route("/:plant_id/compatibility", get(handlers::get_compatibility))
        .route(
            "/:plant_id/companions/:other_id",
            get(handlers::get_companions),
        )
        .route("/:plant_id/harvest", get(handlers::get_harvest_estimate))
}

/// Zone resolution routes
fn zone_routes() -> Router<AppState> {
    Router::new()
        .route("/resolve", get(handlers::resolve_zone))
        .route("/zip/:zip", get(handlers::resolve_zip))
}

/// Pest alert routes
fn pest_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_pest_alerts))
        .route("/location", get(handlers::get_pest_alerts_for_location))
}

/// Calendar routes
fn calendar_routes() -> Router<AppState> {
    Router::new()
        .route("/:month", get(handlers::get_month_tasks))
        .route("/:month/planting", get(handlers::get_planting_tasks))
}
