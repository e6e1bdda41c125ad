//! Storage error types.

use thiserror::Error;

/// Errors that can occur when reading or writing a store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open the backing store.
    #[error("failed to open store: {0}")]
    Open(String),

    /// Underlying I/O failure.
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize or deserialize a payload.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
