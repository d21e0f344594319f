//! Pretrained regressors stored on disk with `bincode`.

use std::path::Path;

use bincode::Options;
use serde::{Deserialize, Serialize};
use smartcore::{
    ensemble::random_forest_regressor::RandomForestRegressor, linalg::basic::matrix::DenseMatrix,
    linear::linear_regression::LinearRegression, tree::decision_tree_regressor::DecisionTreeRegressor,
};

use crate::{FeatureVector, NUM_FEATURES};

use super::Predictor;

/// The kinds of model a `Regressor` can hold.
#[derive(Serialize, Deserialize)]
pub enum Model {
    /// A linear regression model.
    LinearRegression(LinearRegression<f64, f64, DenseMatrix<f64>, Vec<f64>>),
    /// A decision tree model.
    DecisionTree(DecisionTreeRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>),
    /// A random forest model.
    RandomForest(RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>),
}

/// A trained smartcore regressor over the six climate features.
#[derive(Serialize, Deserialize)]
pub struct Regressor {
    /// The name reported in logs and errors.
    name: String,
    /// The trained model.
    model: Model,
}

impl Regressor {
    /// Wrap a trained model.
    pub fn new<N: Into<String>>(name: N, model: Model) -> Self {
        Self {
            name: name.into(),
            model,
        }
    }

    /// Rename the regressor.
    #[must_use]
    pub fn with_name<N: Into<String>>(mut self, name: N) -> Self {
        self.name = name.into();
        self
    }

    /// The kind of model held.
    #[must_use]
    pub const fn model_name(&self) -> &str {
        match self.model {
            Model::LinearRegression(_) => "LinearRegression",
            Model::DecisionTree(_) => "DecisionTree",
            Model::RandomForest(_) => "RandomForest",
        }
    }

    /// A short name for the kind of model held.
    #[must_use]
    pub const fn short_name(&self) -> &str {
        match self.model {
            Model::LinearRegression(_) => "LR",
            Model::DecisionTree(_) => "DT",
            Model::RandomForest(_) => "RF",
        }
    }

    /// Predict scores for several rows of features.
    ///
    /// # Errors
    ///
    /// - If `rows` is empty.
    /// - If the rows cannot be packed into a matrix.
    /// - If the model fails to predict.
    pub fn predict(&self, rows: &[FeatureVector]) -> Result<Vec<f64>, String> {
        if rows.is_empty() {
            return Err("Cannot predict on zero samples".to_string());
        }
        let rows = rows.iter().map(|r| r.as_slice().to_vec()).collect::<Vec<_>>();
        let samples = DenseMatrix::from_2d_vec(&rows).map_err(|e| format!("Failed to create matrix of samples: {e}"))?;

        match &self.model {
            Model::LinearRegression(model) => model
                .predict(&samples)
                .map_err(|e| format!("Failed to predict with LinearRegression model: {e}")),
            Model::DecisionTree(model) => model
                .predict(&samples)
                .map_err(|e| format!("Failed to predict with DecisionTree model: {e}")),
            Model::RandomForest(model) => model
                .predict(&samples)
                .map_err(|e| format!("Failed to predict with RandomForest model: {e}")),
        }
    }

    /// Read a regressor from disk.
    ///
    /// # Errors
    ///
    /// - If the file cannot be read.
    /// - If the contents cannot be deserialized into a `Regressor`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| format!("Failed to read {path:?}: {e}"))?;
        let limit = std::fs::metadata(path)
            .map_err(|e| format!("Failed to read metadata of {path:?}: {e}"))?
            .len();

        // Length prefixes in a corrupt file may not claim more than the file holds.
        bincode::DefaultOptions::new()
            .with_fixint_encoding()
            .allow_trailing_bytes()
            .with_limit(limit)
            .deserialize(&bytes)
            .map_err(|e| format!("Failed to deserialize {path:?}: {e}"))
    }

    /// Write the regressor to disk.
    ///
    /// # Errors
    ///
    /// - If the file cannot be created.
    /// - If the regressor cannot be serialized.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|e| format!("Failed to create {path:?}: {e}"))?;
        let writer = std::io::BufWriter::new(file);
        bincode::serialize_into(writer, self).map_err(|e| format!("Failed to serialize to {path:?}: {e}"))
    }
}

impl core::fmt::Debug for Regressor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Regressor")
            .field("name", &self.name)
            .field("model", &self.model_name())
            .finish()
    }
}

impl Predictor for Regressor {
    fn name(&self) -> &str {
        &self.name
    }

    fn score(&self, features: &FeatureVector) -> Result<f64, String> {
        let scores = self.predict(core::slice::from_ref(features))?;
        match scores.as_slice() {
            &[score] => Ok(score),
            _ => Err(format!(
                "Expected one score for {NUM_FEATURES} features, got {}",
                scores.len()
            )),
        }
    }
}
