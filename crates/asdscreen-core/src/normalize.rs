//! Per-answer normalization: one raw answer string into the representation
//! its feature kind requires.
//!
//! Numeric and binary answers are encoded here with fixed domain rules; a
//! categorical answer only gets validated and passed through, because its
//! encoding must come from the training-time fitted encoder, which the
//! assembler applies.

use crate::error::AnswerError;
use crate::schema::{FeatureKind, FeatureSpec};

/// Accepted affirmative selection for binary questions.
pub const YES: &str = "Yes";
/// Accepted negative selection for binary questions.
pub const NO: &str = "No";

/// One answer after normalization, pending assembly.
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedValue {
    /// Parsed numeric answer.
    Number(f64),
    /// Binary answer, already encoded: 1 for yes, 0 for no.
    Flag(u8),
    /// Categorical label, validated non-empty, awaiting the fitted encoder.
    Label(String),
}

/// Normalize one raw answer against its column's spec.
pub fn normalize(spec: &FeatureSpec, raw: &str) -> Result<NormalizedValue, AnswerError> {
    match spec.kind {
        FeatureKind::Numeric => parse_numeric(spec, raw).map(NormalizedValue::Number),
        FeatureKind::Binary => match raw {
            YES => Ok(NormalizedValue::Flag(1)),
            NO => Ok(NormalizedValue::Flag(0)),
            _ => Err(AnswerError::InvalidBinary {
                field: spec.name.clone(),
                value: raw.to_string(),
            }),
        },
        FeatureKind::Categorical => {
            if raw.trim().is_empty() {
                return Err(AnswerError::EmptyLabel {
                    field: spec.name.clone(),
                });
            }
            Ok(NormalizedValue::Label(raw.to_string()))
        }
    }
}

fn parse_numeric(spec: &FeatureSpec, raw: &str) -> Result<f64, AnswerError> {
    let invalid = |reason: &str| AnswerError::InvalidNumeric {
        field: spec.name.clone(),
        value: raw.to_string(),
        reason: reason.to_string(),
    };

    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| invalid("not a number"))?;
    if !value.is_finite() {
        return Err(invalid("not finite"));
    }
    if let Some(min) = spec.min
        && value < min
    {
        return Err(invalid(&format!("below minimum {min}")));
    }
    if let Some(max) = spec.max
        && value > max
    {
        return Err(invalid(&format!("above maximum {max}")));
    }
    Ok(value)
}
