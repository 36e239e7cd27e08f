//! HTTP handlers for weather advice

use axum::Json;

use crate::error::AppResult;
use crate::services::weather::{WeatherAdvice, WeatherService};
use shared::WeatherReading;

/// Gardening advice for current conditions
pub async fn get_weather_advice(
    Json(reading): Json<WeatherReading>,
) -> AppResult<Json<WeatherAdvice>> {
    let service = WeatherService::new();
    let advice = service.advice(&reading)?;
    Ok(Json(advice))
}
