//! Where the models live and how their scores are banded.

use std::path::PathBuf;

use crate::{Axis, Bands};

/// The environment variable holding the Climate Risk model path.
pub const CLIMATE_MODEL_ENV: &str = "CLIMATE_RISK_MODEL_PATH";
/// The environment variable holding the Weather Severity model path.
pub const SEVERITY_MODEL_ENV: &str = "WEATHER_SEVERITY_MODEL_PATH";
/// The environment variable holding the Climate Risk band edges.
pub const CLIMATE_BANDS_ENV: &str = "CLIMATE_RISK_BANDS";
/// The environment variable holding the Weather Severity band edges.
pub const SEVERITY_BANDS_ENV: &str = "WEATHER_SEVERITY_BANDS";

/// Settings for building a `Pipeline`.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Path to the Climate Risk regressor.
    pub climate_model_path: PathBuf,
    /// Path to the Weather Severity regressor.
    pub severity_model_path: PathBuf,
    /// Band edges for the Climate Risk Index.
    pub climate_bands: Bands,
    /// Band edges for the Weather Severity Index.
    pub severity_bands: Bands,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            climate_model_path: PathBuf::from("model1.bin"),
            severity_model_path: PathBuf::from("model2.bin"),
            climate_bands: Axis::ClimateRisk.default_bands(),
            severity_bands: Axis::WeatherSeverity.default_bands(),
        }
    }
}

impl Config {
    /// Create a configuration from the defaults, overridden by any of the
    /// environment variables that are set.
    ///
    /// # Errors
    ///
    /// If a band variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like `from_env`, but reading variables through `lookup`.
    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<Self, String> {
        let mut config = Self::default();

        if let Some(path) = lookup(CLIMATE_MODEL_ENV) {
            config.climate_model_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(SEVERITY_MODEL_ENV) {
            config.severity_model_path = PathBuf::from(path);
        }
        if let Some(bands) = lookup(CLIMATE_BANDS_ENV) {
            config.climate_bands = bands.parse().map_err(|e| format!("{CLIMATE_BANDS_ENV}: {e}"))?;
        }
        if let Some(bands) = lookup(SEVERITY_BANDS_ENV) {
            config.severity_bands = bands.parse().map_err(|e| format!("{SEVERITY_BANDS_ENV}: {e}"))?;
        }

        Ok(config)
    }
}
