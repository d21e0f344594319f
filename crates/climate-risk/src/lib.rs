#![deny(clippy::correctness)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::pedantic,
    clippy::nursery,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::cast_lossless
)]
#![doc = include_str!("../README.md")]

pub mod classifier;
mod config;
mod error;
mod features;
pub mod pipeline;
pub mod predictor;

pub use classifier::{classify_climate_risk, classify_severity, recommend, Axis, Bands, RiskTier};
pub use config::{Config, CLIMATE_BANDS_ENV, CLIMATE_MODEL_ENV, SEVERITY_BANDS_ENV, SEVERITY_MODEL_ENV};
pub use error::PipelineError;
pub use features::{assemble, Feature, FeatureVector, NUM_FEATURES};
pub use pipeline::{Assessment, Pipeline, Report, Request, Scores};
pub use predictor::{ModelSlot, Predictor, Regressor};

/// The current version of the crate.
pub const VERSION: &str = "0.1.0";
