//! Storage error types.

use thiserror::Error;

/// Errors that can occur when reading or writing storefront storage.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The backing store cannot be reached.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Writing would exceed the store's quota.
    #[error("Storage quota exceeded writing {key}: {needed} bytes needed, {quota} allowed")]
    QuotaExceeded {
        key: String,
        needed: usize,
        quota: usize,
    },

    /// Failed to serialize or parse a value.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
