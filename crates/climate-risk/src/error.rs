//! Errors raised while assembling features or running the predictors.

/// The ways a prediction request can fail.
///
/// All variants are recoverable: the caller is expected to report them and
/// withhold any prediction output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    /// A feature was not representable as a real number.
    #[error("Invalid input for {feature}: {reason}")]
    InvalidInput {
        /// The name of the offending feature.
        feature: String,
        /// What was wrong with the value.
        reason: String,
    },
    /// A predictor failed to load at startup, or was never provided.
    #[error("Model {model} is unavailable: {reason}")]
    ModelUnavailable {
        /// The name of the predictor.
        model: String,
        /// Why the predictor could not be loaded.
        reason: String,
    },
    /// A loaded predictor could not produce a usable score.
    #[error("Model {model} failed to score the features: {reason}")]
    Inference {
        /// The name of the predictor.
        model: String,
        /// The failure reported by the model.
        reason: String,
    },
}

impl PipelineError {
    /// Whether this error means prediction is disabled for the process.
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::ModelUnavailable { .. })
    }
}

impl From<PipelineError> for String {
    fn from(e: PipelineError) -> Self {
        e.to_string()
    }
}
