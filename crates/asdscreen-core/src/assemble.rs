//! Feature vector assembly: raw answers, in whatever order they were
//! collected, into the numeric vector the classifier was trained on.
//!
//! Iteration is always over the schema registry's order, never the answer
//! map's. Order is the one property nothing downstream can check: a
//! mis-ordered vector has the right shape and plausible values, and the
//! classifier will happily score it wrong.

use std::collections::HashMap;

use crate::encoder::EncoderSet;
use crate::error::AnswerError;
use crate::normalize::{NormalizedValue, normalize};
use crate::schema::SchemaRegistry;

/// Assembled model input: one f64 per schema column, in schema order.
/// Immutable once built; consumed by the inference step.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Assemble a feature vector from one questionnaire's raw answers.
///
/// Requires an answer for every schema column; absent fields are collected
/// and reported together, in schema order. Answer keys outside the schema
/// are ignored, so a collection form may gather a superset of fields.
///
/// Any per-field failure aborts assembly — no position is ever padded or
/// defaulted.
pub fn assemble(
    registry: &SchemaRegistry,
    encoders: &EncoderSet,
    answers: &HashMap<String, String>,
) -> Result<FeatureVector, AnswerError> {
    let missing: Vec<String> = registry
        .features()
        .iter()
        .filter(|spec| !answers.contains_key(&spec.name))
        .map(|spec| spec.name.clone())
        .collect();
    if !missing.is_empty() {
        return Err(AnswerError::Missing { fields: missing });
    }

    let mut values = Vec::with_capacity(registry.len());
    for spec in registry.features() {
        let raw = &answers[&spec.name];
        let value = match normalize(spec, raw)? {
            NormalizedValue::Number(v) => v,
            NormalizedValue::Flag(flag) => f64::from(flag),
            NormalizedValue::Label(label) => encoders.encode(&spec.name, &label)? as f64,
        };
        values.push(value);
    }

    tracing::debug!(len = values.len(), "assembled feature vector");
    Ok(FeatureVector(values))
}
