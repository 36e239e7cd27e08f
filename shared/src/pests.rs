//! Zone-band and season pest alert lookup

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::error::CatalogError;
use crate::models::{HardinessZoneBand, PestAlert, Season};
use crate::zones::resolve_hardiness_band;

const BUILTIN_PEST_ALERTS: &str = include_str!("../data/pest_alerts.json");

/// Two-level table: zone band key, then season. Alerts keep the order in
/// which they were declared.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct PestAlertTable {
    bands: HashMap<String, HashMap<Season, Vec<PestAlert>>>,
}

impl PestAlertTable {
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_PEST_ALERTS)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let table: PestAlertTable = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        for (band, seasons) in &self.bands {
            for alert in seasons.values().flatten() {
                let invalid = |message| CatalogError::InvalidPestAlert {
                    band: band.clone(),
                    message,
                };
                if alert.pest.trim().is_empty() {
                    return Err(invalid("Pest name cannot be empty"));
                }
                if alert.affected_crops.is_empty() {
                    return Err(invalid("Alert must list at least one affected crop"));
                }
            }
        }
        Ok(())
    }

    /// Alerts for a band key such as "6a-7b". Unknown bands and seasons
    /// without entries yield an empty list.
    pub fn alerts_for(&self, band: &str, season: Season) -> Vec<PestAlert> {
        self.bands
            .get(band.trim())
            .and_then(|seasons| seasons.get(&season))
            .cloned()
            .unwrap_or_default()
    }

    pub fn alerts_for_band(&self, band: HardinessZoneBand, season: Season) -> Vec<PestAlert> {
        self.alerts_for(band.as_str(), season)
    }

    /// Resolve the band from latitude, then look up alerts
    pub fn alerts_for_location(&self, latitude: Decimal, season: Season) -> Vec<PestAlert> {
        self.alerts_for_band(resolve_hardiness_band(latitude), season)
    }

    /// Only the regionally escalated alerts, in table order
    pub fn priority_alerts(&self, band: &str, season: Season) -> Vec<PestAlert> {
        self.alerts_for(band, season)
            .into_iter()
            .filter(|alert| alert.priority)
            .collect()
    }

    /// Band keys present in the table
    pub fn bands(&self) -> Vec<&str> {
        let mut bands: Vec<&str> = self.bands.keys().map(String::as_str).collect();
        bands.sort_unstable();
        bands
    }
}
