//! Feature schema registry: the ordered list of model input columns.
//!
//! Column order is fixed at training time and must be reproduced exactly at
//! inference time. A reordered vector is still shape-compatible, so the
//! classifier cannot detect the corruption — the registry is the single
//! source of truth for order.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// How a column's raw answer becomes a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    /// Free-form text parsed as a real number (e.g. age).
    Numeric,
    /// Yes/No selection, encoded 1/0 with a fixed rule independent of
    /// training data.
    Binary,
    /// String label encoded by a training-time fitted [`CategoryEncoder`].
    ///
    /// [`CategoryEncoder`]: crate::encoder::CategoryEncoder
    Categorical,
}

/// One model input column: name, kind, and (numeric only) accepted range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureSpec {
    pub name: String,
    pub kind: FeatureKind,
    /// Inclusive lower bound for numeric answers; unbounded when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Inclusive upper bound for numeric answers; unbounded when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl FeatureSpec {
    pub fn new(name: impl Into<String>, kind: FeatureKind) -> Self {
        Self {
            name: name.into(),
            kind,
            min: None,
            max: None,
        }
    }

    /// Numeric spec with inclusive bounds.
    pub fn numeric(name: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            name: name.into(),
            kind: FeatureKind::Numeric,
            min: Some(min),
            max: Some(max),
        }
    }
}

/// Ordered, immutable registry of the columns the classifier was trained on,
/// with the target/label column already excluded.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    features: Vec<FeatureSpec>,
}

impl SchemaRegistry {
    /// Build a registry from training-time column metadata.
    ///
    /// `target` names the label column; any column with that name is filtered
    /// out of the served feature order. Duplicate names and an empty result
    /// are load failures.
    pub fn new(columns: Vec<FeatureSpec>, target: Option<&str>) -> Result<Self, SchemaError> {
        let features: Vec<FeatureSpec> = columns
            .into_iter()
            .filter(|c| Some(c.name.as_str()) != target)
            .collect();

        let mut seen = HashSet::new();
        for spec in &features {
            if !seen.insert(spec.name.as_str()) {
                return Err(SchemaError::DuplicateColumn(spec.name.clone()));
            }
        }
        if features.is_empty() {
            return Err(SchemaError::Empty);
        }

        Ok(Self { features })
    }

    /// The served feature order. This is the column order the classifier
    /// expects, verbatim.
    pub fn features(&self) -> &[FeatureSpec] {
        &self.features
    }

    /// Number of served features (the classifier's input width).
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Look up a column by name.
    pub fn get(&self, name: &str) -> Option<&FeatureSpec> {
        self.features.iter().find(|f| f.name == name)
    }
}
