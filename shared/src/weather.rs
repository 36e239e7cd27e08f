//! Weather advisories for gardeners
//!
//! Temperature, humidity and condition text each contribute at most one
//! advisory, so a reading produces between one and three messages.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::WeatherReading;

/// A single weather advisory
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Advisory {
    FrostWarning,
    CoolWeather,
    IdealTemperature,
    WarmWeather,
    HeatStress,
    FungalDiseaseRisk,
    DryAir,
    Rain,
    Wind,
}

impl Advisory {
    pub fn message(&self) -> &'static str {
        match self {
            Advisory::FrostWarning => {
                "Frost warning: cover tender plants tonight and move containers indoors."
            }
            Advisory::CoolWeather => {
                "Cool weather: a good time for lettuce, peas, spinach and other cool-season crops."
            }
            Advisory::IdealTemperature => "Ideal growing temperatures for most plants.",
            Advisory::WarmWeather => {
                "Warm weather: water early in the morning and mulch to hold moisture."
            }
            Advisory::HeatStress => {
                "Heat alert: give plants afternoon shade and water deeply to prevent heat stress."
            }
            Advisory::FungalDiseaseRisk => {
                "High humidity raises fungal disease risk: improve air circulation and avoid overhead watering."
            }
            Advisory::DryAir => {
                "Low humidity: plants may need extra water; mist humidity-loving plants."
            }
            Advisory::Rain => "Rain expected: skip watering today and check drainage in low spots.",
            Advisory::Wind => "Windy conditions: stake tall plants and shelter young seedlings.",
        }
    }
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Advisories for a reading in temperature, humidity, condition order
pub fn advisories(reading: &WeatherReading) -> Vec<Advisory> {
    let mut advisories = vec![temperature_advisory(reading.temperature_f)];

    if let Some(advisory) = humidity_advisory(reading.humidity_percent) {
        advisories.push(advisory);
    }
    if let Some(advisory) = condition_advisory(&reading.condition) {
        advisories.push(advisory);
    }

    advisories
}

/// Advisory messages for a reading
pub fn weather_advice(reading: &WeatherReading) -> Vec<String> {
    advisories(reading)
        .into_iter()
        .map(|advisory| advisory.message().to_string())
        .collect()
}

fn temperature_advisory(temperature_f: Decimal) -> Advisory {
    if temperature_f < Decimal::from(32) {
        Advisory::FrostWarning
    } else if temperature_f < Decimal::from(50) {
        Advisory::CoolWeather
    } else if temperature_f < Decimal::from(70) {
        Advisory::IdealTemperature
    } else if temperature_f < Decimal::from(85) {
        Advisory::WarmWeather
    } else {
        Advisory::HeatStress
    }
}

fn humidity_advisory(humidity_percent: i32) -> Option<Advisory> {
    if humidity_percent > 80 {
        Some(Advisory::FungalDiseaseRisk)
    } else if humidity_percent < 30 {
        Some(Advisory::DryAir)
    } else {
        None
    }
}

fn condition_advisory(condition: &str) -> Option<Advisory> {
    let condition = condition.to_lowercase();
    if condition.contains("rain") {
        Some(Advisory::Rain)
    } else if condition.contains("wind") {
        Some(Advisory::Wind)
    } else {
        None
    }
}
