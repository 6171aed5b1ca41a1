//! Error types for the parcel engine

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed dataset: {0}")]
    Dataset(#[from] serde_json::Error),
}
