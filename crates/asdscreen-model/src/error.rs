use std::path::PathBuf;

use thiserror::Error;

use asdscreen_core::{AnswerError, SchemaError};

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read artifact {path}: {source}")]
    ArtifactRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse artifact {name}: {source}")]
    ArtifactParse {
        name: String,
        source: serde_json::Error,
    },

    /// Persisted schema/encoder artifacts are inconsistent. Fatal at load.
    #[error("schema load failed: {0}")]
    SchemaLoad(#[from] SchemaError),

    /// The trained model and the served schema disagree on input width.
    /// Fatal at load.
    #[error("model load failed: model expects {expected} features but the schema serves {actual}")]
    FeatureCountMismatch { expected: usize, actual: usize },

    /// A per-request answer problem; the request is aborted, nothing else.
    #[error(transparent)]
    Answer(#[from] AnswerError),

    /// The classifier rejected an assembled vector. A correctly assembled
    /// vector is always shape-compatible, so this is an internal invariant
    /// violation, not bad user input.
    #[error("inference failed: {0}")]
    Inference(String),
}

impl ModelError {
    /// Whether this error reflects bad per-request input (recoverable) as
    /// opposed to a fatal load failure or an internal invariant violation.
    pub fn is_input_error(&self) -> bool {
        matches!(self, ModelError::Answer(_))
    }
}
