//! Input records handed to the engine by the surrounding application

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Resolved location in decimal degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl Location {
    pub fn new(latitude: Decimal, longitude: Decimal) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Current conditions from the weather collaborator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherReading {
    /// Degrees Fahrenheit
    pub temperature_f: Decimal,
    pub humidity_percent: i32,
    /// Coarse condition text such as "Light rain"
    pub condition: String,
}

impl WeatherReading {
    pub fn new(temperature_f: Decimal, humidity_percent: i32, condition: impl Into<String>) -> Self {
        Self {
            temperature_f,
            humidity_percent,
            condition: condition.into(),
        }
    }
}
