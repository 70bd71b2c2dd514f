//! Model layer: persisted training artifacts, the trained classifier, and
//! the end-to-end screening pipeline built on `asdscreen-core`.

mod artifacts;
mod classifier;
mod error;
mod pipeline;

pub use artifacts::{Artifacts, ENCODERS_FILE, MODEL_FILE, SCHEMA_FILE};
pub use classifier::{Label, LogisticModel, Prediction};
pub use error::ModelError;
pub use pipeline::Screener;
