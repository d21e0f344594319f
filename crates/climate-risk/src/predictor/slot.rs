//! A predictor loaded once at startup, or the reason it could not be.

use std::path::Path;

use crate::PipelineError;

use super::{Predictor, Regressor};

/// The outcome of loading one predictor.
///
/// A failed load is kept for the lifetime of the process; nothing in the
/// crate re-attempts it.
pub enum ModelSlot {
    /// The predictor is ready to score.
    Loaded(Box<dyn Predictor>),
    /// The predictor could not be loaded.
    Unavailable {
        /// The name the predictor would have had.
        model: String,
        /// Why loading failed.
        reason: String,
    },
}

impl ModelSlot {
    /// Wrap an already-built predictor.
    pub fn new<P: Predictor + 'static>(predictor: P) -> Self {
        Self::Loaded(Box::new(predictor))
    }

    /// Mark a predictor as unavailable.
    pub fn unavailable<M: Into<String>, R: Into<String>>(model: M, reason: R) -> Self {
        Self::Unavailable {
            model: model.into(),
            reason: reason.into(),
        }
    }

    /// Load a `Regressor` from `path`, recording the failure instead of
    /// returning it.
    pub fn load<P: AsRef<Path>>(model: &str, path: P) -> Self {
        let path = path.as_ref();
        ftlog::info!("Loading {model} from {path:?}...");

        match Regressor::load(path) {
            Ok(regressor) => {
                ftlog::info!("Loaded {model} as a {} model.", regressor.model_name());
                Self::new(regressor.with_name(model))
            }
            Err(reason) => {
                ftlog::error!("Error loading {model} from {path:?}: {reason}");
                Self::unavailable(model, reason)
            }
        }
    }

    /// Whether the predictor loaded.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// The name of the predictor in this slot.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Loaded(p) => p.name(),
            Self::Unavailable { model, .. } => model,
        }
    }

    /// The loaded predictor.
    ///
    /// # Errors
    ///
    /// `ModelUnavailable` if the predictor failed to load.
    pub fn predictor(&self) -> Result<&dyn Predictor, PipelineError> {
        match self {
            Self::Loaded(p) => Ok(p.as_ref()),
            Self::Unavailable { model, reason } => Err(PipelineError::ModelUnavailable {
                model: model.clone(),
                reason: reason.clone(),
            }),
        }
    }
}

impl core::fmt::Debug for ModelSlot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Loaded(p) => f.debug_tuple("Loaded").field(&p.name()).finish(),
            Self::Unavailable { model, reason } => f
                .debug_struct("Unavailable")
                .field("model", model)
                .field("reason", reason)
                .finish(),
        }
    }
}
