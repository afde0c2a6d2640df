//! Storage error types.

use thiserror::Error;

/// Errors that can occur when using the durable store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to serialize or deserialize a stored value.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The backend failed to perform an operation.
    #[error("Store operation failed: {0}")]
    Backend(String),

    /// Key not found.
    #[error("Key not found: {0}")]
    NotFound(String),
}

impl StoreError {
    /// Check whether this error means the stored blob could not be decoded.
    ///
    /// Callers hydrating state use this to distinguish "corrupt entry, discard
    /// and start fresh" from a backend fault.
    pub fn is_corrupt_value(&self) -> bool {
        matches!(self, StoreError::Serialize(_))
    }
}
