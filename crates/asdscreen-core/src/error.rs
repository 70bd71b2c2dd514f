use thiserror::Error;

/// Fatal schema/encoder consistency failures, detected when the persisted
/// training artifacts are loaded. The process cannot serve predictions past
/// any of these.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("schema has no feature columns after excluding the target")]
    Empty,

    #[error("duplicate feature column: {0}")]
    DuplicateColumn(String),

    #[error("categorical feature '{field}' has no fitted encoder")]
    MissingEncoder { field: String },

    #[error("encoder fitted for '{field}', which is not a categorical feature in the schema")]
    UnusedEncoder { field: String },

    #[error("encoder for '{field}' has an empty class set")]
    EmptyClasses { field: String },

    #[error("encoder for '{field}' lists class '{label}' more than once")]
    DuplicateClass { field: String, label: String },
}

/// Per-request answer failures. Each aborts the request's pipeline
/// immediately and names the offending field; no default value is ever
/// substituted, since a defaulted position would yield a confident-looking
/// but wrong prediction.
#[derive(Debug, Error)]
pub enum AnswerError {
    #[error("missing answer for field(s): {}", fields.join(", "))]
    Missing { fields: Vec<String> },

    #[error("invalid numeric answer for '{field}': '{value}' ({reason})")]
    InvalidNumeric {
        field: String,
        value: String,
        reason: String,
    },

    #[error("invalid binary answer for '{field}': expected 'Yes' or 'No', got '{value}'")]
    InvalidBinary { field: String, value: String },

    #[error("unknown category for '{field}': '{label}' is not in the fitted class set")]
    UnknownCategory { field: String, label: String },

    #[error("empty answer for categorical field '{field}'")]
    EmptyLabel { field: String },

    #[error("no fitted encoder available for field '{field}'")]
    NoEncoder { field: String },
}
