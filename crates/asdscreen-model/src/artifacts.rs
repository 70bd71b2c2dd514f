//! Persisted training artifacts: the served schema, the fitted category
//! encoders, and the trained classifier.
//!
//! Three JSON files in one directory, written by the offline training run
//! and read-only here. Loading runs every cross-artifact consistency check
//! up front, so a process that starts serving can no longer fail for schema
//! reasons.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use asdscreen_core::{CategoryEncoder, EncoderSet, FeatureSpec, SchemaRegistry};

use crate::classifier::LogisticModel;
use crate::error::ModelError;

/// File name of the column-order artifact.
pub const SCHEMA_FILE: &str = "schema.json";
/// File name of the fitted-encoders artifact.
pub const ENCODERS_FILE: &str = "encoders.json";
/// File name of the trained-classifier artifact.
pub const MODEL_FILE: &str = "model.json";

#[derive(Deserialize)]
struct SchemaFile {
    columns: Vec<FeatureSpec>,
    /// Label column to exclude from the served feature order.
    #[serde(default)]
    target: Option<String>,
}

#[derive(Deserialize)]
struct EncoderEntry {
    classes: Vec<String>,
}

/// The three loaded artifacts, validated against each other. Immutable for
/// the process lifetime.
#[derive(Debug)]
pub struct Artifacts {
    pub registry: SchemaRegistry,
    pub encoders: EncoderSet,
    pub model: LogisticModel,
}

impl Artifacts {
    /// Load and validate all three artifacts from `dir`.
    pub fn load(dir: &Path) -> Result<Self, ModelError> {
        let schema = read_artifact(dir, SCHEMA_FILE)?;
        let encoders = read_artifact(dir, ENCODERS_FILE)?;
        let model = read_artifact(dir, MODEL_FILE)?;
        Self::from_json(&schema, &encoders, &model)
    }

    /// Build artifacts from raw JSON strings. Test seam; `load` delegates
    /// here after reading the files.
    pub fn from_json(
        schema_json: &str,
        encoders_json: &str,
        model_json: &str,
    ) -> Result<Self, ModelError> {
        let schema: SchemaFile = parse_artifact(SCHEMA_FILE, schema_json)?;
        let encoder_entries: HashMap<String, EncoderEntry> =
            parse_artifact(ENCODERS_FILE, encoders_json)?;
        let model: LogisticModel = parse_artifact(MODEL_FILE, model_json)?;

        let registry = SchemaRegistry::new(schema.columns, schema.target.as_deref())?;

        let mut fitted = HashMap::with_capacity(encoder_entries.len());
        for (field, entry) in encoder_entries {
            let encoder = CategoryEncoder::new(&field, entry.classes)?;
            fitted.insert(field, encoder);
        }
        let encoders = EncoderSet::new(fitted);
        encoders.validate_against(&registry)?;

        if model.n_features() != registry.len() {
            return Err(ModelError::FeatureCountMismatch {
                expected: model.n_features(),
                actual: registry.len(),
            });
        }

        tracing::info!(
            features = registry.len(),
            encoders = encoders.len(),
            "loaded screening artifacts"
        );

        Ok(Self {
            registry,
            encoders,
            model,
        })
    }
}

fn read_artifact(dir: &Path, name: &str) -> Result<String, ModelError> {
    let path = dir.join(name);
    fs::read_to_string(&path).map_err(|source| ModelError::ArtifactRead { path, source })
}

fn parse_artifact<'a, T: Deserialize<'a>>(name: &str, json: &'a str) -> Result<T, ModelError> {
    serde_json::from_str(json).map_err(|source| ModelError::ArtifactParse {
        name: name.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use asdscreen_core::SchemaError;

    const SCHEMA: &str = r#"{
        "columns": [
            {"name": "A9_Score", "kind": "binary"},
            {"name": "age", "kind": "numeric", "min": 0.0, "max": 120.0},
            {"name": "relation", "kind": "categorical"},
            {"name": "Class/ASD", "kind": "binary"}
        ],
        "target": "Class/ASD"
    }"#;

    const ENCODERS: &str = r#"{
        "relation": {"classes": ["Others", "Parent", "Self"]}
    }"#;

    const MODEL: &str = r#"{
        "coefficients": [1.2, 0.05, -0.4],
        "intercept": -0.8
    }"#;

    #[test]
    fn loads_consistent_artifacts() {
        let artifacts = Artifacts::from_json(SCHEMA, ENCODERS, MODEL).unwrap();
        assert_eq!(artifacts.registry.len(), 3);
        assert_eq!(artifacts.encoders.len(), 1);
        assert_eq!(artifacts.model.n_features(), 3);
    }

    #[test]
    fn target_column_is_excluded_from_served_order() {
        let artifacts = Artifacts::from_json(SCHEMA, ENCODERS, MODEL).unwrap();
        assert!(artifacts.registry.get("Class/ASD").is_none());
    }

    #[test]
    fn rejects_encoder_for_field_outside_schema() {
        let encoders = r#"{
            "relation": {"classes": ["Others", "Parent", "Self"]},
            "ethnicity": {"classes": ["Asian", "White-European"]}
        }"#;
        let err = Artifacts::from_json(SCHEMA, encoders, MODEL).unwrap_err();
        assert!(matches!(
            err,
            ModelError::SchemaLoad(SchemaError::UnusedEncoder { field }) if field == "ethnicity"
        ));
    }

    #[test]
    fn rejects_categorical_field_without_encoder() {
        let err = Artifacts::from_json(SCHEMA, "{}", MODEL).unwrap_err();
        assert!(matches!(
            err,
            ModelError::SchemaLoad(SchemaError::MissingEncoder { field }) if field == "relation"
        ));
    }

    #[test]
    fn rejects_coefficient_count_mismatch() {
        let model = r#"{"coefficients": [1.0], "intercept": 0.0}"#;
        let err = Artifacts::from_json(SCHEMA, ENCODERS, model).unwrap_err();
        assert!(matches!(
            err,
            ModelError::FeatureCountMismatch {
                expected: 1,
                actual: 3
            }
        ));
    }

    #[test]
    fn malformed_artifact_names_the_file() {
        let err = Artifacts::from_json("not json", ENCODERS, MODEL).unwrap_err();
        let ModelError::ArtifactParse { name, .. } = err else {
            panic!("expected ArtifactParse");
        };
        assert_eq!(name, SCHEMA_FILE);
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = Artifacts::load(Path::new("/nonexistent/artifacts")).unwrap_err();
        let ModelError::ArtifactRead { path, .. } = err else {
            panic!("expected ArtifactRead");
        };
        assert!(path.ends_with(SCHEMA_FILE));
    }
}
