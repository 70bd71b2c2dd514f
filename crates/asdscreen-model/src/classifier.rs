//! The trained classifier: an opaque scoring function over assembled
//! feature vectors.
//!
//! The persisted form is a logistic-regression scorer fitted offline by the
//! training run. Inference is a pure, deterministic, single-shot computation;
//! a failure here means the caller handed over a malformed vector, which a
//! correct assembler never does.

use serde::{Deserialize, Serialize};

use asdscreen_core::FeatureVector;

use crate::error::ModelError;

/// Binary screening outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    Positive,
    Negative,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

/// Result of one inference call: discrete label plus the class-1
/// (positive) probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    pub label: Label,
    pub probability: f64,
}

/// Logistic-regression scorer persisted by the training run.
#[derive(Debug, Clone, Deserialize)]
pub struct LogisticModel {
    coefficients: Vec<f64>,
    intercept: f64,
    /// Decision threshold on the positive-class probability.
    #[serde(default = "default_threshold")]
    threshold: f64,
}

fn default_threshold() -> f64 {
    0.5
}

impl LogisticModel {
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
            threshold: default_threshold(),
        }
    }

    /// The input width this model was trained on.
    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    /// Score one assembled vector.
    ///
    /// The vector must have exactly `n_features()` positions; anything else
    /// is an assembly bug surfacing late, reported as [`ModelError::Inference`].
    pub fn predict(&self, vector: &FeatureVector) -> Result<Prediction, ModelError> {
        if vector.len() != self.coefficients.len() {
            return Err(ModelError::Inference(format!(
                "feature vector has {} positions but the model was trained on {}",
                vector.len(),
                self.coefficients.len()
            )));
        }

        let z: f64 = self.intercept
            + self
                .coefficients
                .iter()
                .zip(vector.values())
                .map(|(w, x)| w * x)
                .sum::<f64>();
        let probability = 1.0 / (1.0 + (-z).exp());

        let label = if probability >= self.threshold {
            Label::Positive
        } else {
            Label::Negative
        };

        Ok(Prediction { label, probability })
    }
}
