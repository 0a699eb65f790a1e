//! Store errors.

use std::io;

use thiserror::Error;

/// Errors that can occur when reading or writing the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The key contains characters the store cannot map to a name.
    #[error("invalid store key {0:?}")]
    InvalidKey(String),

    /// Reading or writing the backing file failed.
    #[error("failed to access store key {key:?}")]
    Io {
        /// Key being accessed.
        key: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A value could not be serialized or deserialized.
    #[error("stored value is not valid JSON")]
    Json(#[from] serde_json::Error),

    /// The store refused the operation.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
