//! Validation utilities for engine inputs and catalog data
//!
//! Values arriving from the UI or from a catalog file are checked here before
//! they reach the rule functions, which assume well-formed input.

use rust_decimal::Decimal;

use crate::models::ZoneCode;

// ============================================================================
// Location Validations
// ============================================================================

/// Validate latitude is within -90..=90 degrees
pub fn validate_latitude(latitude: Decimal) -> Result<(), &'static str> {
    if latitude < Decimal::from(-90) || latitude > Decimal::from(90) {
        return Err("Latitude must be between -90 and 90 degrees");
    }
    Ok(())
}

/// Validate longitude is within -180..=180 degrees
pub fn validate_longitude(longitude: Decimal) -> Result<(), &'static str> {
    if longitude < Decimal::from(-180) || longitude > Decimal::from(180) {
        return Err("Longitude must be between -180 and 180 degrees");
    }
    Ok(())
}

/// Validate US ZIP code (5 digits, optional +4 suffix)
/// Accepts: 02134, 02134-1234
pub fn validate_zip_code(zip: &str) -> Result<(), &'static str> {
    let zip = zip.trim();
    let (base, plus_four) = match zip.split_once('-') {
        Some((base, rest)) => (base, Some(rest)),
        None => (zip, None),
    };

    if base.len() != 5 || !base.chars().all(|c| c.is_ascii_digit()) {
        return Err("ZIP code must be 5 digits");
    }
    if let Some(rest) = plus_four {
        if rest.len() != 4 || !rest.chars().all(|c| c.is_ascii_digit()) {
            return Err("ZIP+4 suffix must be 4 digits");
        }
    }
    Ok(())
}

// ============================================================================
// Weather Validations
// ============================================================================

/// Validate relative humidity percentage
pub fn validate_humidity(humidity_percent: i32) -> Result<(), &'static str> {
    if !(0..=100).contains(&humidity_percent) {
        return Err("Humidity must be between 0 and 100%");
    }
    Ok(())
}

// ============================================================================
// Calendar Validations
// ============================================================================

/// Validate zero-based month index (0 = January)
pub fn validate_month_index(month_index: u32) -> Result<(), &'static str> {
    if month_index > 11 {
        return Err("Month index must be between 0 and 11");
    }
    Ok(())
}

// ============================================================================
// Catalog Validations
// ============================================================================

/// Validate hardiness zone code format (1a through 13b)
pub fn validate_zone_code(code: &str) -> Result<(), &'static str> {
    code.parse::<ZoneCode>()
        .map(|_| ())
        .map_err(|_| "Zone code must be a number from 1 to 13 followed by 'a' or 'b'")
}

/// Validate difficulty ordinal (1 easiest to 5 hardest)
pub fn validate_difficulty(difficulty: u8) -> Result<(), &'static str> {
    if !(1..=5).contains(&difficulty) {
        return Err("Difficulty must be between 1 and 5");
    }
    Ok(())
}

/// Validate soil pH range ordering and bounds
pub fn validate_ph_range(min: Decimal, max: Decimal) -> Result<(), &'static str> {
    if min < Decimal::ZERO || max > Decimal::from(14) {
        return Err("Soil pH must be between 0 and 14");
    }
    if min > max {
        return Err("Soil pH minimum cannot exceed maximum");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    // ========================================================================
    // Location Validation Tests
    // ========================================================================

    #[test]
    fn test_validate_latitude() {
        assert!(validate_latitude(dec("0")).is_ok());
        assert!(validate_latitude(dec("-90")).is_ok());
        assert!(validate_latitude(dec("90")).is_ok());
        assert!(validate_latitude(dec("41.8781")).is_ok());
        assert!(validate_latitude(dec("90.0001")).is_err());
        assert!(validate_latitude(dec("-91")).is_err());
    }

    #[test]
    fn test_validate_longitude() {
        assert!(validate_longitude(dec("-87.6298")).is_ok());
        assert!(validate_longitude(dec("180")).is_ok());
        assert!(validate_longitude(dec("-180.5")).is_err());
    }

    #[test]
    fn test_validate_zip_code_valid() {
        assert!(validate_zip_code("02134").is_ok());
        assert!(validate_zip_code("90210").is_ok());
        assert!(validate_zip_code("60601-1234").is_ok());
        assert!(validate_zip_code(" 10001 ").is_ok());
    }

    #[test]
    fn test_validate_zip_code_invalid() {
        assert!(validate_zip_code("").is_err());
        assert!(validate_zip_code("1234").is_err());
        assert!(validate_zip_code("123456").is_err());
        assert!(validate_zip_code("ABCDE").is_err());
        assert!(validate_zip_code("60601-12").is_err());
    }

    // ========================================================================
    // Weather and Calendar Validation Tests
    // ========================================================================

    #[test]
    fn test_validate_humidity() {
        assert!(validate_humidity(0).is_ok());
        assert!(validate_humidity(100).is_ok());
        assert!(validate_humidity(-1).is_err());
        assert!(validate_humidity(101).is_err());
    }

    #[test]
    fn test_validate_month_index() {
        assert!(validate_month_index(0).is_ok());
        assert!(validate_month_index(11).is_ok());
        assert!(validate_month_index(12).is_err());
    }

    // ========================================================================
    // Catalog Validation Tests
    // ========================================================================

    #[test]
    fn test_validate_zone_code() {
        assert!(validate_zone_code("6b").is_ok());
        assert!(validate_zone_code("13a").is_ok());
        assert!(validate_zone_code("6").is_err());
        assert!(validate_zone_code("6-7").is_err());
        assert!(validate_zone_code("15a").is_err());
    }

    #[test]
    fn test_validate_difficulty() {
        assert!(validate_difficulty(1).is_ok());
        assert!(validate_difficulty(5).is_ok());
        assert!(validate_difficulty(0).is_err());
        assert!(validate_difficulty(6).is_err());
    }

    #[test]
    fn test_validate_ph_range() {
        assert!(validate_ph_range(dec("6.0"), dec("7.0")).is_ok());
        assert!(validate_ph_range(dec("6.5"), dec("6.5")).is_ok());
        assert!(validate_ph_range(dec("7.0"), dec("6.0")).is_err());
        assert!(validate_ph_range(dec("-1"), dec("6.0")).is_err());
        assert!(validate_ph_range(dec("6.0"), dec("15")).is_err());
    }
}
