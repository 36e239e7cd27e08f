//! WebAssembly module for Garden Planner
//!
//! Provides client-side evaluation for:
//! - Seasonal planting compatibility
//! - Hardiness zone, pest band and season lookup
//! - Pest alerts, calendar tasks and weather advice
//!
//! Structured results are returned as JSON strings in the same shapes the
//! HTTP API uses.

use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::OnceLock;
use wasm_bindgen::prelude::*;

use shared::{PestAlertTable, PlantCatalog, PlantFilter};

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

static CATALOG: OnceLock<Result<PlantCatalog, String>> = OnceLock::new();
static PEST_ALERTS: OnceLock<Result<PestAlertTable, String>> = OnceLock::new();

fn catalog() -> Result<&'static PlantCatalog, String> {
    CATALOG
        .get_or_init(|| PlantCatalog::builtin().map_err(|e| e.to_string()))
        .as_ref()
        .map_err(Clone::clone)
}

fn pest_alerts() -> Result<&'static PestAlertTable, String> {
    PEST_ALERTS
        .get_or_init(|| PestAlertTable::builtin().map_err(|e| e.to_string()))
        .as_ref()
        .map_err(Clone::clone)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization failed: {}", e))
}

fn parse_season(season: &str) -> Result<Season, String> {
    season.parse::<Season>().map_err(|e| e.to_string())
}

fn to_decimal(field: &str, value: f64) -> Result<Decimal, String> {
    Decimal::try_from(value).map_err(|_| format!("Invalid {}: {}", field, value))
}

/// Log to the browser console and hand the message back to JavaScript
fn js_error(message: String) -> JsValue {
    web_sys::console::error_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}

fn compatibility_json(plant_id: &str, season: &str) -> Result<String, String> {
    let plant = catalog()?
        .get(plant_id)
        .ok_or_else(|| format!("Unknown plant: {}", plant_id))?;
    to_json(&shared::evaluate(plant, parse_season(season)?))
}

fn search_json(filter_json: &str) -> Result<String, String> {
    let filter: PlantFilter = if filter_json.trim().is_empty() {
        PlantFilter::default()
    } else {
        serde_json::from_str(filter_json).map_err(|e| format!("Invalid filter JSON: {}", e))?
    };
    to_json(&catalog()?.filter(&filter))
}

fn companion_json(plant_id: &str, other_id: &str) -> Result<String, String> {
    let catalog = catalog()?;
    let find = |id: &str| catalog.get(id).ok_or_else(|| format!("Unknown plant: {}", id));
    to_json(&shared::companion_relation(find(plant_id)?, find(other_id)?))
}

fn zone_string(latitude: f64, longitude: f64) -> Result<String, String> {
    let latitude = to_decimal("latitude", latitude)?;
    let longitude = to_decimal("longitude", longitude)?;
    validate_latitude(latitude)?;
    validate_longitude(longitude)?;
    Ok(shared::resolve_hardiness_zone(latitude, longitude).to_string())
}

fn band_string(latitude: f64) -> Result<String, String> {
    let latitude = to_decimal("latitude", latitude)?;
    validate_latitude(latitude)?;
    Ok(shared::resolve_hardiness_band(latitude).to_string())
}

fn pest_alerts_json(band: &str, season: &str) -> Result<String, String> {
    to_json(&pest_alerts()?.alerts_for(band, parse_season(season)?))
}

fn calendar_json(month_index: u32) -> Result<String, String> {
    validate_month_index(month_index)?;
    let tasks = shared::tasks_for_month_index(month_index).unwrap_or_default();
    to_json(&tasks)
}

fn weather_json(temperature_f: f64, humidity_percent: i32, condition: &str) -> Result<String, String> {
    validate_humidity(humidity_percent)?;
    let reading = WeatherReading::new(
        to_decimal("temperature", temperature_f)?,
        humidity_percent,
        condition,
    );
    to_json(&shared::weather_advice(&reading))
}

/// Evaluate a catalog plant for a season ("spring", "Fall", ...)
#[wasm_bindgen]
pub fn evaluate_compatibility(plant_id: &str, season: &str) -> Result<String, JsValue> {
    compatibility_json(plant_id, season).map_err(js_error)
}

/// Search the catalog with a JSON filter (`{}` or empty for everything)
#[wasm_bindgen]
pub fn search_plants(filter_json: &str) -> Result<String, JsValue> {
    search_json(filter_json).map_err(js_error)
}

/// Companion relation between two catalog plants
#[wasm_bindgen]
pub fn check_companions(plant_id: &str, other_id: &str) -> Result<String, JsValue> {
    companion_json(plant_id, other_id).map_err(js_error)
}

/// Hardiness zone code for coordinates, e.g. "7b"
#[wasm_bindgen]
pub fn resolve_zone(latitude: f64, longitude: f64) -> Result<String, JsValue> {
    zone_string(latitude, longitude).map_err(js_error)
}

/// Coarse zone code for a US ZIP code
#[wasm_bindgen]
pub fn resolve_zip_zone(zip: &str) -> Option<String> {
    shared::resolve_zone_from_zip(zip).map(|zone| zone.to_string())
}

/// Pest alert band for a latitude, e.g. "6a-7b"
#[wasm_bindgen]
pub fn resolve_band(latitude: f64) -> Result<String, JsValue> {
    band_string(latitude).map_err(js_error)
}

/// Season for a zero-based month index (0 = January)
#[wasm_bindgen]
pub fn season_for_month_index(month_index: u32) -> Option<String> {
    shared::season_for_month_index(month_index).map(|season| season.as_str().to_string())
}

/// Pest alerts for a band and season as JSON
#[wasm_bindgen]
pub fn get_pest_alerts(band: &str, season: &str) -> Result<String, JsValue> {
    pest_alerts_json(band, season).map_err(js_error)
}

/// Canonical tasks for a zero-based month index as JSON
#[wasm_bindgen]
pub fn calendar_tasks(month_index: u32) -> Result<String, JsValue> {
    calendar_json(month_index).map_err(js_error)
}

/// Advisory messages for current conditions as a JSON array
#[wasm_bindgen]
pub fn get_weather_advice(
    temperature_f: f64,
    humidity_percent: i32,
    condition: &str,
) -> Result<String, JsValue> {
    weather_json(temperature_f, humidity_percent, condition).map_err(js_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn parse(json: &str) -> Value {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_evaluate_compatibility() {
        let result = parse(&compatibility_json("tomato", "Spring").unwrap());
        assert_eq!(result["verdict"], "excellent");

        let result = parse(&compatibility_json("tomato", "fall").unwrap());
        assert_eq!(result["verdict"], "good");

        assert!(compatibility_json("triffid", "spring").is_err());
        assert!(compatibility_json("tomato", "monsoon").is_err());
    }

    #[test]
    fn test_search_plants() {
        let all = parse(&search_json("").unwrap());
        assert_eq!(all.as_array().unwrap().len(), catalog().unwrap().len());

        let herbs = parse(&search_json(r#"{"category": "herb", "q": "basil"}"#).unwrap());
        assert_eq!(herbs.as_array().unwrap().len(), 1);
        assert!(search_json("not json").is_err());
    }

    #[test]
    fn test_check_companions() {
        assert_eq!(companion_json("tomato", "cabbage").unwrap(), "\"avoid\"");
        assert!(companion_json("tomato", "triffid").is_err());
    }

    #[test]
    fn test_zone_and_band() {
        assert_eq!(zone_string(41.0, -87.6).unwrap(), "5b");
        assert_eq!(band_string(41.0).unwrap(), "6a-7b");
        assert_eq!(band_string(36.0).unwrap(), "7a-8b");
        assert_eq!(band_string(30.0).unwrap(), "8a-9b");
        assert!(zone_string(95.0, 0.0).is_err());
        assert!(band_string(f64::NAN).is_err());
    }

    #[test]
    fn test_zip_and_season() {
        assert_eq!(resolve_zip_zone("94103"), Some("9a".to_string()));
        assert_eq!(resolve_zip_zone("941"), None);
        assert_eq!(season_for_month_index(2), Some("spring".to_string()));
        assert_eq!(season_for_month_index(11), Some("winter".to_string()));
        assert_eq!(season_for_month_index(12), None);
    }

    #[test]
    fn test_pest_alerts() {
        let alerts = parse(&pest_alerts_json("6a-7b", "summer").unwrap());
        assert_eq!(alerts[0]["pest"], "Japanese Beetle");

        let empty = parse(&pest_alerts_json("nowhere", "summer").unwrap());
        assert!(empty.as_array().unwrap().is_empty());
    }

    #[test]
    fn test_calendar_tasks() {
        let tasks = parse(&calendar_json(1).unwrap());
        assert_eq!(tasks.as_array().unwrap().len(), 3);
        assert_eq!(tasks[0]["title"], "Start indoor seeds");
        assert!(calendar_json(12).is_err());
    }

    #[test]
    fn test_weather_advice() {
        let advice = parse(&weather_json(28.0, 85, "Clear").unwrap());
        let messages = advice.as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].as_str().unwrap().starts_with("Frost warning"));
        assert!(weather_json(60.0, 101, "Clear").is_err());
    }
}
