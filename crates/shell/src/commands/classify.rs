//! Classifying precomputed scores.

use climate_risk::{Assessment, Axis, Config, Scores};

/// Print the tiers and recommendations for the given scores.
pub fn run(config: &Config, climate: f64, severity: f64) {
    let scores = Scores { climate, severity };
    let assessment = Assessment::from_scores(&scores, &config.climate_bands, &config.severity_bands);
    ftlog::info!("Classified {scores:?} as {assessment:?}");

    println!(
        "{}: {}",
        Axis::ClimateRisk.name(),
        Axis::ClimateRisk.label(assessment.climate_tier)
    );
    println!(
        "{}: {}",
        Axis::WeatherSeverity.name(),
        Axis::WeatherSeverity.label(assessment.severity_tier)
    );
    for r in &assessment.recommendations {
        println!("  - {r}");
    }
}
