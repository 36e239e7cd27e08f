//! Zone and season resolution service

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use shared::{
    current_season, resolve_hardiness_band, resolve_hardiness_zone, resolve_zone_from_zip,
    validate_latitude, validate_longitude, validate_zip_code, HardinessZoneBand, Location, Season,
    ZoneCode,
};

/// Zone, pest band and season for a location on a given day
#[derive(Debug, Clone, Serialize)]
pub struct ZoneResolution {
    pub location: Location,
    pub zone: ZoneCode,
    pub band: HardinessZoneBand,
    pub season: Season,
}

/// Coarse zone for a ZIP code
#[derive(Debug, Clone, Serialize)]
pub struct ZipZone {
    pub zip: String,
    pub zone: ZoneCode,
}

/// Stateless zone lookups
#[derive(Clone, Default)]
pub struct ZoneService;

impl ZoneService {
    pub fn new() -> Self {
        Self
    }

    /// Validate raw coordinates into a location
    pub fn location(&self, latitude: Decimal, longitude: Decimal) -> AppResult<Location> {
        validate_latitude(latitude).map_err(|msg| AppError::validation("latitude", msg))?;
        validate_longitude(longitude).map_err(|msg| AppError::validation("longitude", msg))?;
        Ok(Location::new(latitude, longitude))
    }

    /// Resolve zone, band and season for a location
    pub fn resolve(&self, location: Location, today: NaiveDate) -> ZoneResolution {
        let resolution = ZoneResolution {
            location,
            zone: resolve_hardiness_zone(location.latitude, location.longitude),
            band: resolve_hardiness_band(location.latitude),
            season: current_season(&today),
        };

        tracing::debug!(
            "Resolved ({}, {}) to zone {} band {} in {}",
            location.latitude,
            location.longitude,
            resolution.zone,
            resolution.band,
            resolution.season
        );

        resolution
    }

    /// Coarse zone from a ZIP code
    pub fn resolve_zip(&self, zip: &str) -> AppResult<ZipZone> {
        validate_zip_code(zip).map_err(|msg| AppError::validation("zip", msg))?;

        let zone = resolve_zone_from_zip(zip)
            .ok_or_else(|| AppError::NotFound(format!("Zone for ZIP {}", zip)))?;

        Ok(ZipZone {
            zip: zip.trim().to_string(),
            zone,
        })
    }
}
