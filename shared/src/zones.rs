//! Zone and season resolution
//!
//! Two independent latitude ladders live here. `resolve_hardiness_zone`
//! produces the fine-grained code matched against plant zone lists;
//! `resolve_hardiness_band` produces the coarse band that indexes the pest
//! alert table. They were authored at different granularities and are not
//! derived from one another.

use chrono::{Datelike, Month};
use rust_decimal::Decimal;

use crate::models::{HardinessZoneBand, Season, ZoneCode, ZoneHalf};
use crate::validation::validate_zip_code;

/// Latitude thresholds (degrees north), checked top to bottom
const ZONE_LADDER: &[(i64, ZoneCode)] = &[
    (48, ZoneCode::from_parts(3, ZoneHalf::B)),
    (45, ZoneCode::from_parts(4, ZoneHalf::B)),
    (43, ZoneCode::from_parts(5, ZoneHalf::A)),
    (41, ZoneCode::from_parts(5, ZoneHalf::B)),
    (40, ZoneCode::from_parts(6, ZoneHalf::A)),
    (38, ZoneCode::from_parts(6, ZoneHalf::B)),
    (37, ZoneCode::from_parts(7, ZoneHalf::A)),
    (35, ZoneCode::from_parts(7, ZoneHalf::B)),
    (33, ZoneCode::from_parts(8, ZoneHalf::A)),
    (31, ZoneCode::from_parts(8, ZoneHalf::B)),
    (29, ZoneCode::from_parts(9, ZoneHalf::A)),
    (27, ZoneCode::from_parts(9, ZoneHalf::B)),
    (25, ZoneCode::from_parts(10, ZoneHalf::A)),
];

/// Zone returned when no threshold matches
const LOWEST_TIER_ZONE: ZoneCode = ZoneCode::from_parts(10, ZoneHalf::B);

/// Coarse zone by first ZIP digit (USPS national area)
const ZIP_AREA_ZONES: [ZoneCode; 10] = [
    ZoneCode::from_parts(6, ZoneHalf::A), // 0: New England, NJ
    ZoneCode::from_parts(6, ZoneHalf::B), // 1: NY, PA, DE
    ZoneCode::from_parts(7, ZoneHalf::B), // 2: DC, MD, VA, WV, NC, SC
    ZoneCode::from_parts(8, ZoneHalf::B), // 3: FL, GA, AL, TN, MS
    ZoneCode::from_parts(6, ZoneHalf::A), // 4: OH, IN, KY, MI
    ZoneCode::from_parts(4, ZoneHalf::B), // 5: MN, IA, WI, Dakotas, MT
    ZoneCode::from_parts(6, ZoneHalf::A), // 6: IL, MO, KS, NE
    ZoneCode::from_parts(8, ZoneHalf::A), // 7: TX, OK, LA, AR
    ZoneCode::from_parts(7, ZoneHalf::A), // 8: CO, AZ, UT, NV, NM, ID, WY
    ZoneCode::from_parts(9, ZoneHalf::A), // 9: CA, OR, WA, AK, HI
];

/// Resolve a hardiness zone code from a location.
///
/// Only latitude is consulted. Every latitude yields a zone; anything below
/// the last threshold (including the southern hemisphere) falls into the
/// lowest tier.
pub fn resolve_hardiness_zone(latitude: Decimal, _longitude: Decimal) -> ZoneCode {
    ZONE_LADDER
        .iter()
        .find(|(threshold, _)| latitude >= Decimal::from(*threshold))
        .map(|(_, zone)| *zone)
        .unwrap_or(LOWEST_TIER_ZONE)
}

/// Resolve the coarse pest-alert band from latitude
pub fn resolve_hardiness_band(latitude: Decimal) -> HardinessZoneBand {
    if latitude >= Decimal::from(40) {
        HardinessZoneBand::Zones6aTo7b
    } else if latitude >= Decimal::from(35) {
        HardinessZoneBand::Zones7aTo8b
    } else {
        HardinessZoneBand::Zones8aTo9b
    }
}

/// Coarse zone lookup from a US ZIP code. `None` for malformed input.
pub fn resolve_zone_from_zip(zip: &str) -> Option<ZoneCode> {
    validate_zip_code(zip).ok()?;
    let area = zip.trim().chars().next()?.to_digit(10)?;
    ZIP_AREA_ZONES.get(area as usize).copied()
}

/// Season for a calendar date (caller's local date)
pub fn current_season<D: Datelike>(date: &D) -> Season {
    season_for_month_number(date.month())
}

/// Season for a month
pub fn season_for_month(month: Month) -> Season {
    season_for_month_number(month.number_from_month())
}

/// Season for a zero-based month index (0 = January); `None` past December
pub fn season_for_month_index(month_index: u32) -> Option<Season> {
    (month_index < 12).then(|| season_for_month_number(month_index + 1))
}

fn season_for_month_number(month: u32) -> Season {
    match month {
        3..=5 => Season::Spring,
        6..=8 => Season::Summer,
        9..=11 => Season::Fall,
        _ => Season::Winter,
    }
}
