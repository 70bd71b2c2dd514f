//! Core answer-encoding pipeline for questionnaire screening.
//!
//! Turns heterogeneous raw answers (free-form numeric text, Yes/No
//! selections, categorical selections) into a numeric feature vector whose
//! column order and category codes exactly match what the trained classifier
//! saw during training. Pure computation over immutable schema metadata —
//! artifact loading and classifier invocation live in `asdscreen-model`.

pub mod assemble;
pub mod encoder;
pub mod error;
pub mod normalize;
pub mod schema;

pub use assemble::{FeatureVector, assemble};
pub use encoder::{CategoryEncoder, EncoderSet};
pub use error::{AnswerError, SchemaError};
pub use normalize::{NormalizedValue, normalize};
pub use schema::{FeatureKind, FeatureSpec, SchemaRegistry};
