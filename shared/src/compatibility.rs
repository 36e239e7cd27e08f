//! Seasonal compatibility evaluation
//!
//! The verdict depends only on the season being evaluated and the plant's
//! seasonal flags. Zone, soil and difficulty never enter into it. When the
//! plant is out of season the branch is chosen by the season, and spring and
//! fall each look at the *opposite* flag (spring checks fall, fall checks
//! spring); summer and winter ignore the plant's flags entirely.

use crate::catalog::PlantCatalog;
use crate::models::{CompatibilityVerdict, Plant, Season, SeasonalCompatibility};

/// Evaluate how suitable `season` is for planting `plant`
pub fn evaluate(plant: &Plant, season: Season) -> SeasonalCompatibility {
    let (verdict, reason, recommendations) = if plant.planting_seasons.includes(season) {
        (
            CompatibilityVerdict::Excellent,
            format!("Perfect time to plant {}!", plant.name),
            vec![
                "Prepare soil with compost",
                "Water regularly after planting",
                "Monitor for pests",
            ],
        )
    } else {
        out_of_season(plant, season)
    };

    SeasonalCompatibility {
        plant: plant.clone(),
        season,
        verdict,
        reason,
        recommendations: recommendations.into_iter().map(String::from).collect(),
    }
}

fn out_of_season(plant: &Plant, season: Season) -> (CompatibilityVerdict, String, Vec<&'static str>) {
    match season {
        Season::Spring if plant.planting_seasons.fall => (
            CompatibilityVerdict::Good,
            "Can be planted in fall for next year".to_string(),
            vec!["Plan fall planting", "Prepare the bed this season"],
        ),
        Season::Spring => (
            CompatibilityVerdict::Poor,
            "Not suitable for spring planting".to_string(),
            vec!["Wait for the right season", "Choose a spring-suited alternative"],
        ),
        Season::Summer => (
            CompatibilityVerdict::Fair,
            "Summer heat can stress new plantings".to_string(),
            vec![
                "Provide afternoon shade",
                "Water more frequently",
                "Consider growing in containers",
            ],
        ),
        Season::Fall if plant.planting_seasons.spring => (
            CompatibilityVerdict::Good,
            "Can be planted in spring".to_string(),
            vec!["Plan for spring planting", "Prepare soil over the winter"],
        ),
        Season::Fall => (
            CompatibilityVerdict::Poor,
            "Not suitable for fall planting".to_string(),
            vec!["Wait for the right season", "Choose a fall-suited alternative"],
        ),
        Season::Winter => (
            CompatibilityVerdict::Poor,
            "Too cold for outdoor planting".to_string(),
            vec!["Start seeds indoors", "Plan your spring garden"],
        ),
    }
}

/// Seasons in which the plant can be planted, spring first
pub fn best_seasons(plant: &Plant) -> Vec<Season> {
    plant.planting_seasons.seasons()
}

/// Plants suited to `zone`, evaluated for `season` and ranked by verdict.
/// Plants with equal verdicts keep catalog order.
pub fn recommend(catalog: &PlantCatalog, zone: &str, season: Season) -> Vec<SeasonalCompatibility> {
    let mut results: Vec<SeasonalCompatibility> = catalog
        .by_zone(zone)
        .into_iter()
        .map(|plant| evaluate(plant, season))
        .collect();
    // stable sort keeps catalog order within a verdict
    results.sort_by_key(|result| result.verdict);
    results
}
