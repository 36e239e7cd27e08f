//! Location-based planting recommendations
//!
//! Combines zone resolution, seasonal compatibility, pest alerts and the
//! monthly calendar into a single response for the dashboard.

use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;

use crate::services::zone::ZoneResolution;
use shared::{
    recommend, tasks_for_date, CalendarTask, PestAlert, PestAlertTable, PlantCatalog,
    SeasonalCompatibility,
};

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    #[serde(flatten)]
    pub resolution: ZoneResolution,
    pub date: NaiveDate,
    /// Ranked best verdict first
    pub plants: Vec<SeasonalCompatibility>,
    pub pest_alerts: Vec<PestAlert>,
    pub tasks: Vec<CalendarTask>,
}

#[derive(Clone)]
pub struct RecommendationService {
    catalog: Arc<PlantCatalog>,
    pest_alerts: Arc<PestAlertTable>,
}

impl RecommendationService {
    pub fn new(catalog: Arc<PlantCatalog>, pest_alerts: Arc<PestAlertTable>) -> Self {
        Self {
            catalog,
            pest_alerts,
        }
    }

    /// Build recommendations for a resolved location on `date`
    pub fn recommend(&self, resolution: ZoneResolution, date: NaiveDate) -> Recommendation {
        let zone = resolution.zone.to_string();
        let plants = recommend(&self.catalog, &zone, resolution.season);
        let pest_alerts = self
            .pest_alerts
            .alerts_for_band(resolution.band, resolution.season);

        tracing::info!(
            "Recommending {} plants and {} alerts for zone {} in {}",
            plants.len(),
            pest_alerts.len(),
            zone,
            resolution.season
        );

        Recommendation {
            resolution,
            date,
            plants,
            pest_alerts,
            tasks: tasks_for_date(date),
        }
    }
}
