//! The commands under the `climate-shell` CLI.

pub mod batch;
pub mod classify;
pub mod predict;
pub mod status;

use std::path::PathBuf;

use clap::Subcommand;
use climate_risk::{Axis, Config, ModelSlot, Pipeline, Report};

/// The subcommands of the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Predict both indices for one set of climate parameters.
    Predict(predict::Inputs),
    /// Classify scores that were computed elsewhere, without loading models.
    Classify {
        /// The Climate Risk Index.
        #[arg(short('c'), long, allow_negative_numbers = true)]
        climate_score: f64,

        /// The Weather Severity Index.
        #[arg(short('s'), long, allow_negative_numbers = true)]
        severity_score: f64,
    },
    /// Report whether both models loaded.
    Status,
    /// Predict both indices for every row of a CSV file.
    Batch {
        /// The CSV file, with six feature columns per row.
        #[arg(short('i'), long)]
        input: PathBuf,

        /// Treat the first row as data rather than as a header.
        #[arg(long)]
        no_header: bool,
    },
}

/// Load the pipeline, refusing to continue if either model is missing.
pub fn load_pipeline(config: &Config) -> Result<Pipeline, String> {
    let pipeline = Pipeline::load(config);
    if pipeline.is_available() {
        Ok(pipeline)
    } else {
        let reasons = [pipeline.climate_slot(), pipeline.severity_slot()]
            .into_iter()
            .filter_map(|slot| match slot {
                ModelSlot::Unavailable { model, reason } => Some(format!("{model}: {reason}")),
                ModelSlot::Loaded(_) => None,
            })
            .collect::<Vec<_>>();
        Err(format!(
            "Model not loaded properly. Please check your model files.\n{}",
            reasons.join("\n")
        ))
    }
}

/// Print the indices, tiers and recommendations of a report.
pub fn print_report(report: &Report) {
    let assessment = &report.assessment;
    let axes = [
        (Axis::ClimateRisk, report.scores.climate, assessment.climate_tier),
        (Axis::WeatherSeverity, report.scores.severity, assessment.severity_tier),
    ];
    for (axis, score, tier) in axes {
        println!("{}: {score:.4}", axis.name());
        println!("  {}: {}", axis.label(tier), axis.description(tier));
    }

    println!("Recommendations:");
    for r in &assessment.recommendations {
        println!("  - {r}");
    }
}
