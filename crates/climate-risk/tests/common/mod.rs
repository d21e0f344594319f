//! Deterministic predictors shared by the integration tests.

#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use climate_risk::{FeatureVector, Predictor};
use rand::prelude::*;

/// Always returns the same score.
pub struct Constant {
    pub name: &'static str,
    pub score: f64,
}

impl Predictor for Constant {
    fn name(&self) -> &str {
        self.name
    }

    fn score(&self, _: &FeatureVector) -> Result<f64, String> {
        Ok(self.score)
    }
}

/// Returns a constant score and counts how often it was asked.
pub struct Counting {
    pub score: f64,
    pub calls: Arc<AtomicUsize>,
}

impl Predictor for Counting {
    fn name(&self) -> &str {
        "Counting"
    }

    fn score(&self, _: &FeatureVector) -> Result<f64, String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.score)
    }
}

/// Scores by a weighted sum of the features.
pub struct WeightedSum(pub [f64; 6]);

impl Predictor for WeightedSum {
    fn name(&self) -> &str {
        "WeightedSum"
    }

    fn score(&self, features: &FeatureVector) -> Result<f64, String> {
        Ok(self.0.iter().zip(features.as_slice()).map(|(w, x)| w * x).sum())
    }
}

/// Always fails to score.
pub struct Broken;

impl Predictor for Broken {
    fn name(&self) -> &str {
        "Broken"
    }

    fn score(&self, _: &FeatureVector) -> Result<f64, String> {
        Err("weights are corrupt".to_string())
    }
}

/// Returns NaN.
pub struct NotANumber;

impl Predictor for NotANumber {
    fn name(&self) -> &str {
        "NotANumber"
    }

    fn score(&self, _: &FeatureVector) -> Result<f64, String> {
        Ok(f64::NAN)
    }
}

/// Generate `n` rows of features with values in `[-50, 50)`.
pub fn gen_rows(n: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| (0..6).map(|_| rng.gen_range(-50.0..50.0)).collect())
        .collect()
}
