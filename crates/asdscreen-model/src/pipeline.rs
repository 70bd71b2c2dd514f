//! End-to-end screening pipeline: normalize and encode one questionnaire's
//! answers in schema order, then score the vector.
//!
//! A `Screener` is built once from loaded artifacts and injected wherever
//! predictions are needed. Everything inside is immutable, so a single
//! instance can be shared across concurrent requests without locking; each
//! request owns its own vector and result.

use std::collections::HashMap;

use asdscreen_core::{EncoderSet, SchemaRegistry, assemble};

use crate::artifacts::Artifacts;
use crate::classifier::Prediction;
use crate::error::ModelError;

/// Immutable prediction context: served schema, fitted encoders, and the
/// trained classifier.
pub struct Screener {
    artifacts: Artifacts,
}

impl Screener {
    pub fn new(artifacts: Artifacts) -> Self {
        Self { artifacts }
    }

    /// The served feature order, for callers building a collection form.
    pub fn registry(&self) -> &SchemaRegistry {
        &self.artifacts.registry
    }

    /// The fitted encoders, for callers listing categorical choices.
    pub fn encoders(&self) -> &EncoderSet {
        &self.artifacts.encoders
    }

    /// Score one completed questionnaire.
    ///
    /// Answer-map iteration order never affects the result; assembly follows
    /// the schema order. Input problems come back as [`ModelError::Answer`]
    /// naming the field. A [`ModelError::Inference`] here means the
    /// assembler and model disagree, which the load-time width check is
    /// supposed to make impossible — it is logged as an internal error, not
    /// as bad input.
    pub fn predict(&self, answers: &HashMap<String, String>) -> Result<Prediction, ModelError> {
        let vector = assemble(&self.artifacts.registry, &self.artifacts.encoders, answers)?;

        match self.artifacts.model.predict(&vector) {
            Ok(prediction) => {
                tracing::debug!(
                    label = prediction.label.as_str(),
                    probability = prediction.probability,
                    "scored questionnaire"
                );
                Ok(prediction)
            }
            Err(err) => {
                tracing::error!(%err, "classifier rejected an assembled vector");
                Err(err)
            }
        }
    }
}
