//! Adapters around the opaque scoring models.

mod regressor;
mod slot;

pub use regressor::{Model, Regressor};
pub use slot::ModelSlot;

use crate::{FeatureVector, PipelineError};

/// A pretrained model mapping a `FeatureVector` to a single score.
///
/// Implementors are shared read-only across requests, so scoring must not
/// need mutable access.
pub trait Predictor: Send + Sync {
    /// The name of the model, used in logs and errors.
    fn name(&self) -> &str;

    /// Score the features.
    ///
    /// # Errors
    ///
    /// If the model cannot produce a score for the features.
    fn score(&self, features: &FeatureVector) -> Result<f64, String>;
}

/// Score the features with the predictor held in `slot`.
///
/// # Errors
///
/// - `ModelUnavailable` if the predictor failed to load.
/// - `Inference` if the predictor fails, or returns NaN or an infinity.
pub fn predict(slot: &ModelSlot, features: &FeatureVector) -> Result<f64, PipelineError> {
    let predictor = slot.predictor()?;
    let score = predictor.score(features).map_err(|reason| PipelineError::Inference {
        model: predictor.name().to_string(),
        reason,
    })?;

    if score.is_finite() {
        Ok(score)
    } else {
        Err(PipelineError::Inference {
            model: predictor.name().to_string(),
            reason: format!("score {score} is not a real number"),
        })
    }
}
