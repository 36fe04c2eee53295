//! Error types for storage operations.

use std::io;
use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The backing file does not exist.
    #[error("storage not found: {location}")]
    NotFound {
        /// Where the storage was expected.
        location: String,
    },

    /// The stored bytes are not valid UTF-8 text.
    #[error("storage at {location} is not valid UTF-8")]
    InvalidText {
        /// Where the storage lives.
        location: String,
    },
}
