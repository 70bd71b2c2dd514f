//! Fitted category encoders: training-time bijections between string class
//! labels and integer codes.
//!
//! Encoders are persisted by the training run and read-only here. A label
//! outside the fitted class set is an error, never a default code — silent
//! coercion would corrupt the feature vector without any visible failure.

use std::collections::HashMap;

use crate::error::{AnswerError, SchemaError};
use crate::schema::{FeatureKind, SchemaRegistry};

/// One fitted encoder: an ordered class list where a label's code is its
/// index (0..n-1), matching the code assignment of the training run.
#[derive(Debug, Clone)]
pub struct CategoryEncoder {
    classes: Vec<String>,
}

impl CategoryEncoder {
    /// Build an encoder from a fitted class list. The list must be non-empty
    /// and duplicate-free, or the code↔label mapping is not a bijection.
    pub fn new(field: &str, classes: Vec<String>) -> Result<Self, SchemaError> {
        if classes.is_empty() {
            return Err(SchemaError::EmptyClasses {
                field: field.to_string(),
            });
        }
        for (i, label) in classes.iter().enumerate() {
            if classes[..i].contains(label) {
                return Err(SchemaError::DuplicateClass {
                    field: field.to_string(),
                    label: label.clone(),
                });
            }
        }
        Ok(Self { classes })
    }

    /// The fitted code for `label`, or `None` if the label was never fitted.
    pub fn code(&self, label: &str) -> Option<usize> {
        self.classes.iter().position(|c| c == label)
    }

    /// The fitted class list, in code order. Collection surfaces use this to
    /// populate selection widgets.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

/// All fitted encoders for one trained model, keyed by field name.
#[derive(Debug, Clone, Default)]
pub struct EncoderSet {
    encoders: HashMap<String, CategoryEncoder>,
}

impl EncoderSet {
    pub fn new(encoders: HashMap<String, CategoryEncoder>) -> Self {
        Self { encoders }
    }

    /// Encode one categorical answer. Pure lookup, stable for the process
    /// lifetime.
    pub fn encode(&self, field: &str, label: &str) -> Result<usize, AnswerError> {
        let encoder = self.encoders.get(field).ok_or_else(|| AnswerError::NoEncoder {
            field: field.to_string(),
        })?;
        encoder.code(label).ok_or_else(|| AnswerError::UnknownCategory {
            field: field.to_string(),
            label: label.to_string(),
        })
    }

    pub fn get(&self, field: &str) -> Option<&CategoryEncoder> {
        self.encoders.get(field)
    }

    pub fn len(&self) -> usize {
        self.encoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.encoders.is_empty()
    }

    /// Cross-check this encoder set against the served schema: every
    /// categorical feature needs an encoder, and every encoder must belong to
    /// a categorical feature. Either direction failing means the persisted
    /// artifacts are inconsistent with each other.
    pub fn validate_against(&self, registry: &SchemaRegistry) -> Result<(), SchemaError> {
        for spec in registry.features() {
            if spec.kind == FeatureKind::Categorical && !self.encoders.contains_key(&spec.name) {
                return Err(SchemaError::MissingEncoder {
                    field: spec.name.clone(),
                });
            }
        }
        for field in self.encoders.keys() {
            match registry.get(field) {
                Some(spec) if spec.kind == FeatureKind::Categorical => {}
                _ => {
                    return Err(SchemaError::UnusedEncoder {
                        field: field.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FeatureSpec, SchemaRegistry};

    fn relation_encoder() -> CategoryEncoder {
        CategoryEncoder::new(
            "relation",
            vec!["Others".into(), "Parent".into(), "Self".into()],
        )
        .unwrap()
    }

    fn set_with_relation() -> EncoderSet {
        let mut map = HashMap::new();
        map.insert("relation".to_string(), relation_encoder());
        EncoderSet::new(map)
    }

    #[test]
    fn code_is_class_index() {
        let enc = relation_encoder();
        assert_eq!(enc.code("Others"), Some(0));
        assert_eq!(enc.code("Parent"), Some(1));
        assert_eq!(enc.code("Self"), Some(2));
    }

    #[test]
    fn encode_is_deterministic() {
        let set = set_with_relation();
        let first = set.encode("relation", "Parent").unwrap();
        for _ in 0..10 {
            assert_eq!(set.encode("relation", "Parent").unwrap(), first);
        }
    }

    #[test]
    fn unknown_label_is_an_error_not_a_default() {
        let set = set_with_relation();
        let err = set.encode("relation", "Grandparent").unwrap_err();
        assert!(matches!(
            err,
            AnswerError::UnknownCategory { field, label }
                if field == "relation" && label == "Grandparent"
        ));
    }

    #[test]
    fn encode_without_encoder_fails() {
        let set = set_with_relation();
        let err = set.encode("ethnicity", "Asian").unwrap_err();
        assert!(matches!(err, AnswerError::NoEncoder { field } if field == "ethnicity"));
    }

    #[test]
    fn rejects_empty_class_list() {
        let err = CategoryEncoder::new("relation", vec![]).unwrap_err();
        assert!(matches!(err, SchemaError::EmptyClasses { .. }));
    }

    #[test]
    fn rejects_duplicate_classes() {
        let err =
            CategoryEncoder::new("relation", vec!["Parent".into(), "Parent".into()]).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::DuplicateClass { label, .. } if label == "Parent"
        ));
    }

    #[test]
    fn validate_accepts_matching_schema() {
        let reg = SchemaRegistry::new(
            vec![FeatureSpec::new("relation", FeatureKind::Categorical)],
            None,
        )
        .unwrap();
        set_with_relation().validate_against(&reg).unwrap();
    }

    #[test]
    fn validate_rejects_categorical_without_encoder() {
        let reg = SchemaRegistry::new(
            vec![
                FeatureSpec::new("relation", FeatureKind::Categorical),
                FeatureSpec::new("ethnicity", FeatureKind::Categorical),
            ],
            None,
        )
        .unwrap();
        let err = set_with_relation().validate_against(&reg).unwrap_err();
        assert!(matches!(err, SchemaError::MissingEncoder { field } if field == "ethnicity"));
    }

    #[test]
    fn validate_rejects_encoder_for_field_outside_schema() {
        let reg = SchemaRegistry::new(
            vec![FeatureSpec::new("A1_Score", FeatureKind::Binary)],
            None,
        )
        .unwrap();
        let err = set_with_relation().validate_against(&reg).unwrap_err();
        assert!(matches!(err, SchemaError::UnusedEncoder { field } if field == "relation"));
    }

    #[test]
    fn validate_rejects_encoder_for_non_categorical_field() {
        let reg = SchemaRegistry::new(
            vec![FeatureSpec::new("relation", FeatureKind::Binary)],
            None,
        )
        .unwrap();
        let err = set_with_relation().validate_against(&reg).unwrap_err();
        assert!(matches!(err, SchemaError::UnusedEncoder { field } if field == "relation"));
    }
}
