//! Catalog and compatibility integration tests
//!
//! Tests for seasonal compatibility including:
//! - Property 1: Every catalog plant has a planting window
//! - Property 2: In-season planting is excellent
//! - Property 3: Out-of-season winter planting is poor
//! - Property 4: Filters preserve catalog order
//! - Property 5: Companion relation is symmetric

use proptest::prelude::*;
use shared::{
    companion_relation, evaluate, recommend, CompanionRelation, CompatibilityVerdict,
    PlantCatalog, PlantFilter, PlantingSeasons, Season,
};

fn catalog() -> PlantCatalog {
    PlantCatalog::builtin().expect("builtin catalog should load")
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Tomato is a spring planting; fall looks ahead to spring
    #[test]
    fn test_tomato_scenario() {
        let catalog = catalog();
        let tomato = catalog.get("tomato").unwrap();

        let spring = evaluate(tomato, Season::Spring);
        assert_eq!(spring.verdict, CompatibilityVerdict::Excellent);

        let fall = evaluate(tomato, Season::Fall);
        assert_eq!(fall.verdict, CompatibilityVerdict::Good);
        assert_eq!(fall.reason.to_lowercase(), "can be planted in spring");
    }

    /// Evaluation serializes with lowercase verdict and season
    #[test]
    fn test_compatibility_json_shape() {
        let catalog = catalog();
        let result = evaluate(catalog.get("basil").unwrap(), Season::Winter);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["verdict"], "poor");
        assert_eq!(json["season"], "winter");
        assert_eq!(json["plant"]["id"], "basil");
        assert!(json["recommendations"].as_array().unwrap().len() >= 1);
    }

    /// Tomato and cabbage should not share a bed, tomato and basil should
    #[test]
    fn test_companion_examples() {
        let catalog = catalog();
        let tomato = catalog.get("tomato").unwrap();
        let cabbage = catalog.get("cabbage").unwrap();
        let basil = catalog.get("basil").unwrap();

        assert_eq!(companion_relation(tomato, cabbage), CompanionRelation::Avoid);
        assert_eq!(companion_relation(tomato, basil), CompanionRelation::Companion);
    }

    /// A combined filter narrows to plants matching every criterion
    #[test]
    fn test_combined_filter() {
        let catalog = catalog();
        let filter = PlantFilter {
            season: Some(Season::Fall),
            max_difficulty: Some(2),
            zone: Some("6b".to_string()),
            ..Default::default()
        };

        let plants = catalog.filter(&filter);
        assert!(!plants.is_empty());
        for plant in plants {
            assert!(plant.planting_seasons.fall);
            assert!(plant.difficulty <= 2);
            assert!(plant.grows_in("6b"));
        }
    }

    /// Recommendations put in-season plants first
    #[test]
    fn test_recommendations_start_with_excellent() {
        let catalog = catalog();
        let results = recommend(&catalog, "6b", Season::Spring);
        assert_eq!(results[0].verdict, CompatibilityVerdict::Excellent);
        assert!(results.iter().any(|r| r.plant.id == "tomato"));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    /// Strategy for generating seasons
    fn season_strategy() -> impl Strategy<Value = Season> {
        prop::sample::select(Season::ALL.to_vec())
    }

    /// Strategy for generating planting windows with at least one season
    fn planting_seasons_strategy() -> impl Strategy<Value = PlantingSeasons> {
        any::<(bool, bool, bool, bool)>()
            .prop_filter("at least one season", |(a, b, c, d)| *a || *b || *c || *d)
            .prop_map(|(spring, summer, fall, winter)| PlantingSeasons {
                spring,
                summer,
                fall,
                winter,
            })
    }

    /// Strategy for picking a catalog index
    fn plant_index_strategy() -> impl Strategy<Value = usize> {
        0..catalog().len()
    }

    /// Property 1: Every catalog plant has a planting window
    #[test]
    fn prop_catalog_plants_have_a_season() {
        for plant in catalog().all() {
            assert!(plant.planting_seasons.any(), "{} has no season", plant.id);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property 2: In-season planting is excellent
        #[test]
        fn prop_in_season_is_excellent(
            index in plant_index_strategy(),
            seasons in planting_seasons_strategy(),
            season in season_strategy()
        ) {
            let mut plant = catalog().all()[index].clone();
            plant.planting_seasons = seasons;

            let result = evaluate(&plant, season);
            if seasons.includes(season) {
                prop_assert_eq!(result.verdict, CompatibilityVerdict::Excellent);
            } else {
                prop_assert_ne!(result.verdict, CompatibilityVerdict::Excellent);
            }
            prop_assert_eq!(result.season, season);
        }

        /// Property 3: Out-of-season winter planting is poor
        #[test]
        fn prop_winter_out_of_season_is_poor(
            index in plant_index_strategy(),
            seasons in planting_seasons_strategy()
        ) {
            let mut plant = catalog().all()[index].clone();
            plant.planting_seasons = seasons;

            if !seasons.winter {
                let result = evaluate(&plant, Season::Winter);
                prop_assert_eq!(result.verdict, CompatibilityVerdict::Poor);
            }
        }

        /// Property 4: Filters preserve catalog order
        #[test]
        fn prop_filter_preserves_catalog_order(
            season in proptest::option::of(season_strategy()),
            max_difficulty in proptest::option::of(1u8..=5u8)
        ) {
            let catalog = catalog();
            let filter = PlantFilter {
                season,
                max_difficulty,
                ..Default::default()
            };

            let positions: Vec<usize> = catalog
                .filter(&filter)
                .iter()
                .map(|p| catalog.all().iter().position(|c| c.id == p.id).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }

        /// Property 5: Companion relation is symmetric
        #[test]
        fn prop_companion_relation_is_symmetric(
            a in plant_index_strategy(),
            b in plant_index_strategy()
        ) {
            let catalog = catalog();
            let plants = catalog.all();
            prop_assert_eq!(
                companion_relation(&plants[a], &plants[b]),
                companion_relation(&plants[b], &plants[a])
            );
        }
    }
}
