//! Calendar and weather advisory integration tests
//!
//! Tests for seasonal guidance including:
//! - Property 11: Every month has three tasks
//! - Property 12: Weather advice is bounded and ordered

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use shared::{
    advisories, planting_tasks, tasks_for_date, tasks_for_month_index, weather_advice, Advisory,
    PlantCatalog, TaskType, WeatherReading,
};
use std::str::FromStr;

// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Freezing reading produces a frost warning
    #[test]
    fn test_frost_advice() {
        let advice = weather_advice(&WeatherReading::new(dec("28"), 50, "Clear"));
        assert!(advice.iter().any(|m| m.to_lowercase().contains("frost")));
    }

    /// Humid reading produces a fungal disease warning
    #[test]
    fn test_fungal_advice() {
        let advice = weather_advice(&WeatherReading::new(dec("60"), 85, "Cloudy"));
        assert!(advice.iter().any(|m| m.to_lowercase().contains("fungal")));
    }

    /// Cold and humid together produce both warnings
    #[test]
    fn test_frost_and_fungal_advice() {
        let result = advisories(&WeatherReading::new(dec("28"), 85, "Cloudy"));
        assert!(result.contains(&Advisory::FrostWarning));
        assert!(result.contains(&Advisory::FungalDiseaseRisk));
    }

    /// Task JSON uses the "type" key
    #[test]
    fn test_task_json_shape() {
        let tasks = tasks_for_month_index(1).unwrap();
        let json = serde_json::to_value(&tasks[0]).unwrap();
        assert_eq!(json["title"], "Start indoor seeds");
        assert_eq!(json["type"], "planting");
        assert_eq!(json["priority"], "high");
    }

    /// Dated tasks land on the first of the month
    #[test]
    fn test_tasks_for_date() {
        let tasks = tasks_for_date(NaiveDate::from_ymd_opt(2025, 2, 20).unwrap());
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0].date, NaiveDate::from_ymd_opt(2025, 2, 1));
    }

    /// Spring planting tasks include tomato and not garlic
    #[test]
    fn test_april_planting_tasks() {
        let catalog = PlantCatalog::builtin().unwrap();
        let tasks = planting_tasks(&catalog, chrono::Month::April);
        assert!(tasks.iter().any(|t| t.title == "Plant Tomato"));
        assert!(!tasks.iter().any(|t| t.title == "Plant Garlic"));
        assert!(tasks.iter().all(|t| t.task_type == TaskType::Planting));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    /// Strategy for generating temperatures (-20.0 to 120.0°F)
    fn temperature_strategy() -> impl Strategy<Value = Decimal> {
        (-200i64..=1200i64).prop_map(|n| Decimal::new(n, 1))
    }

    /// Strategy for generating humidity percentages
    fn humidity_strategy() -> impl Strategy<Value = i32> {
        0..=100i32
    }

    /// Strategy for generating condition text
    fn condition_strategy() -> impl Strategy<Value = String> {
        prop::sample::select(vec![
            "Clear", "Sunny", "Light Rain", "RAIN", "Windy", "Rain and Wind", "", "Overcast",
        ])
        .prop_map(String::from)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property 11: Every month has three tasks
        #[test]
        fn prop_every_month_has_three_tasks(month_index in 0u32..12u32) {
            let tasks = tasks_for_month_index(month_index).unwrap();
            prop_assert_eq!(tasks.len(), 3);
        }

        /// Property 11: Indices past December have no tasks
        #[test]
        fn prop_out_of_range_month_has_no_tasks(month_index in 12u32..1000u32) {
            prop_assert!(tasks_for_month_index(month_index).is_none());
        }

        /// Property 12: Weather advice is bounded and ordered
        #[test]
        fn prop_weather_advice_is_bounded(
            temp in temperature_strategy(),
            humidity in humidity_strategy(),
            condition in condition_strategy()
        ) {
            let reading = WeatherReading::new(temp, humidity, condition);
            let result = advisories(&reading);

            prop_assert!(!result.is_empty() && result.len() <= 3);

            let frost = result[0] == Advisory::FrostWarning;
            prop_assert_eq!(frost, temp < dec("32"));

            let fungal = result.contains(&Advisory::FungalDiseaseRisk);
            prop_assert_eq!(fungal, humidity > 80);

            prop_assert_eq!(weather_advice(&reading).len(), result.len());
        }
    }
}
