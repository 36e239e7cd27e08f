//! Weather advisory service

use serde::Serialize;

use crate::error::{AppError, AppResult};
use shared::{advisories, validate_humidity, Advisory, WeatherReading};

/// Advisories for a reading, as codes and display messages
#[derive(Debug, Clone, Serialize)]
pub struct WeatherAdvice {
    pub advisories: Vec<Advisory>,
    pub messages: Vec<String>,
}

#[derive(Clone, Default)]
pub struct WeatherService;

impl WeatherService {
    pub fn new() -> Self {
        Self
    }

    /// Validate a reading and derive gardening advice
    pub fn advice(&self, reading: &WeatherReading) -> AppResult<WeatherAdvice> {
        validate_humidity(reading.humidity_percent)
            .map_err(|msg| AppError::validation("humidity_percent", msg))?;

        let advisories = advisories(reading);
        let messages = advisories.iter().map(|a| a.message().to_string()).collect();

        Ok(WeatherAdvice {
            advisories,
            messages,
        })
    }
}
