//! The request-to-report pipeline.
//!
//! Each request runs the assembler, both predictors, the classifier and the
//! recommender in sequence. The predictors are loaded once and only read
//! afterwards, so a single `Pipeline` can serve requests from many threads.

use rayon::prelude::*;

use crate::{
    assemble, predictor::predict, recommend, Axis, Bands, Config, FeatureVector, ModelSlot, PipelineError, RiskTier,
};

/// The name of the first regressor.
pub const CLIMATE_MODEL: &str = "ClimateRiskPredictor";
/// The name of the second regressor.
pub const SEVERITY_MODEL: &str = "WeatherSeverityPredictor";

/// The raw inputs of one prediction request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Request {
    /// Temperature.
    pub temperature: f64,
    /// CO2 emissions.
    pub co2_emissions: f64,
    /// Sea level rise.
    pub sea_level_rise: f64,
    /// Precipitation.
    pub precipitation: f64,
    /// Humidity.
    pub humidity: f64,
    /// Wind speed.
    pub wind_speed: f64,
}

impl Request {
    /// Assemble the request into a `FeatureVector`.
    ///
    /// # Errors
    ///
    /// See [`assemble`].
    pub fn features(&self) -> Result<FeatureVector, PipelineError> {
        assemble(
            self.temperature,
            self.co2_emissions,
            self.sea_level_rise,
            self.precipitation,
            self.humidity,
            self.wind_speed,
        )
    }
}

/// The two indices produced for one request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scores {
    /// The Climate Risk Index.
    pub climate: f64,
    /// The Weather Severity Index.
    pub severity: f64,
}

/// The tiers and recommendations derived from a pair of `Scores`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    /// The Climate Risk tier.
    pub climate_tier: RiskTier,
    /// The Weather Severity tier.
    pub severity_tier: RiskTier,
    /// Recommendations, in display order.
    pub recommendations: Vec<String>,
}

impl Assessment {
    /// Classify a pair of scores with the given bands and derive the
    /// recommendations.
    #[must_use]
    pub fn from_scores(scores: &Scores, climate_bands: &Bands, severity_bands: &Bands) -> Self {
        let climate_tier = climate_bands.classify(scores.climate);
        let severity_tier = severity_bands.classify(scores.severity);
        let recommendations = recommend(climate_tier, severity_tier)
            .into_iter()
            .map(ToString::to_string)
            .collect();

        Self {
            climate_tier,
            severity_tier,
            recommendations,
        }
    }

    /// The display label of the Climate Risk tier.
    #[must_use]
    pub const fn climate_label(&self) -> &'static str {
        Axis::ClimateRisk.label(self.climate_tier)
    }

    /// The display label of the Weather Severity tier.
    #[must_use]
    pub const fn severity_label(&self) -> &'static str {
        Axis::WeatherSeverity.label(self.severity_tier)
    }
}

/// Everything produced for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// The assembled features.
    pub features: FeatureVector,
    /// The predicted indices.
    pub scores: Scores,
    /// The classification of the indices.
    pub assessment: Assessment,
}

/// The two predictors and the bands used to classify their scores.
#[derive(Debug)]
pub struct Pipeline {
    /// The Climate Risk predictor.
    climate: ModelSlot,
    /// The Weather Severity predictor.
    severity: ModelSlot,
    /// Band edges for the Climate Risk Index.
    climate_bands: Bands,
    /// Band edges for the Weather Severity Index.
    severity_bands: Bands,
}

impl Pipeline {
    /// Create a pipeline from two predictor slots, using the default bands.
    #[must_use]
    pub fn new(climate: ModelSlot, severity: ModelSlot) -> Self {
        Self {
            climate,
            severity,
            climate_bands: Bands::CLIMATE_RISK,
            severity_bands: Bands::WEATHER_SEVERITY,
        }
    }

    /// Load both regressors and take the bands from `config`.
    ///
    /// A regressor that fails to load leaves the pipeline unavailable rather
    /// than failing here.
    #[must_use]
    pub fn load(config: &Config) -> Self {
        let climate = ModelSlot::load(CLIMATE_MODEL, &config.climate_model_path);
        let severity = ModelSlot::load(SEVERITY_MODEL, &config.severity_model_path);
        Self::new(climate, severity).with_bands(config.climate_bands, config.severity_bands)
    }

    /// Replace the band edges.
    #[must_use]
    pub fn with_bands(mut self, climate_bands: Bands, severity_bands: Bands) -> Self {
        self.climate_bands = climate_bands;
        self.severity_bands = severity_bands;
        self
    }

    /// Whether both predictors are loaded.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.climate.is_available() && self.severity.is_available()
    }

    /// The Climate Risk predictor slot.
    #[must_use]
    pub const fn climate_slot(&self) -> &ModelSlot {
        &self.climate
    }

    /// The Weather Severity predictor slot.
    #[must_use]
    pub const fn severity_slot(&self) -> &ModelSlot {
        &self.severity
    }

    /// Score the features with both predictors.
    ///
    /// Availability of both predictors is checked before either is run, so
    /// no score is produced unless both can be.
    ///
    /// # Errors
    ///
    /// - `ModelUnavailable` if either predictor failed to load.
    /// - `Inference` if either predictor fails to score.
    pub fn predict(&self, features: &FeatureVector) -> Result<Scores, PipelineError> {
        self.climate.predictor()?;
        self.severity.predictor()?;

        let climate = predict(&self.climate, features)?;
        let severity = predict(&self.severity, features)?;
        ftlog::debug!("Scored {features:?}: climate {climate:.4}, severity {severity:.4}");

        Ok(Scores { climate, severity })
    }

    /// Classify a pair of scores and derive the recommendations.
    #[must_use]
    pub fn classify(&self, scores: &Scores) -> Assessment {
        Assessment::from_scores(scores, &self.climate_bands, &self.severity_bands)
    }

    /// Score and classify already-assembled features.
    ///
    /// # Errors
    ///
    /// See [`Pipeline::predict`].
    pub fn run_features(&self, features: FeatureVector) -> Result<Report, PipelineError> {
        let scores = self.predict(&features)?;
        let assessment = self.classify(&scores);
        Ok(Report {
            features,
            scores,
            assessment,
        })
    }

    /// Assemble, score and classify one request.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the request holds NaN or an infinity.
    /// - See [`Pipeline::predict`].
    pub fn run(&self, request: &Request) -> Result<Report, PipelineError> {
        self.run_features(request.features()?)
    }

    /// Run many requests in parallel, returning one result per request in
    /// input order.
    pub fn par_run_batch(&self, batch: &[FeatureVector]) -> Vec<Result<Report, PipelineError>> {
        batch.par_iter().map(|&features| self.run_features(features)).collect()
    }
}
