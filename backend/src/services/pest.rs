//! Pest alert service

use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;

use crate::error::AppResult;
use crate::services::ZoneService;
use shared::{resolve_hardiness_band, PestAlert, PestAlertTable, Season};

/// Alerts for a band and season, with the escalated subset counted
#[derive(Debug, Clone, Serialize)]
pub struct PestReport {
    pub band: String,
    pub season: Season,
    pub priority_count: usize,
    pub alerts: Vec<PestAlert>,
}

#[derive(Clone)]
pub struct PestService {
    table: Arc<PestAlertTable>,
}

impl PestService {
    pub fn new(table: Arc<PestAlertTable>) -> Self {
        Self { table }
    }

    /// Alerts for a band key. Unknown bands give an empty report.
    pub fn by_band(&self, band: &str, season: Season) -> PestReport {
        let alerts = self.table.alerts_for(band, season);
        if alerts.is_empty() {
            tracing::debug!("No pest alerts for band {} in {}", band, season);
        }

        PestReport {
            band: band.trim().to_string(),
            season,
            priority_count: alerts.iter().filter(|a| a.priority).count(),
            alerts,
        }
    }

    /// Alerts for the band containing a location
    pub fn by_location(
        &self,
        latitude: Decimal,
        longitude: Decimal,
        season: Season,
    ) -> AppResult<PestReport> {
        let location = ZoneService::new().location(latitude, longitude)?;
        let band = resolve_hardiness_band(location.latitude);
        Ok(self.by_band(band.as_str(), season))
    }

    /// Number of band keys in the table
    pub fn band_count(&self) -> usize {
        self.table.bands().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn service() -> PestService {
        PestService::new(Arc::new(PestAlertTable::builtin().unwrap()))
    }

    #[test]
    fn test_by_band_counts_priority() {
        let report = service().by_band("7a-8b", Season::Summer);
        assert_eq!(report.priority_count, 1);
        assert!(!report.alerts.is_empty());
    }

    #[test]
    fn test_unknown_band_is_empty() {
        let report = service().by_band("12a-13b", Season::Winter);
        assert!(report.alerts.is_empty());
        assert_eq!(report.priority_count, 0);
    }

    #[test]
    fn test_by_location() {
        let service = service();
        let lat = Decimal::from_str("41").unwrap();
        let report = service.by_location(lat, Decimal::ZERO, Season::Spring).unwrap();
        assert_eq!(report.band, "6a-7b");
        assert!(service
            .by_location(Decimal::from(95), Decimal::ZERO, Season::Spring)
            .is_err());
    }
}
