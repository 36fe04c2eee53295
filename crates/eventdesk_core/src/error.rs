//! Error types for EventDesk core.

use crate::types::EventId;
use std::io;
use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in EventDesk core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Storage backend error.
    #[error("storage error: {0}")]
    Storage(#[from] eventdesk_storage::StorageError),

    /// Flat-file codec error.
    #[error("codec error: {0}")]
    Codec(#[from] eventdesk_codec::CodecError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Caller-supplied data was rejected.
    #[error("validation failed: {message}")]
    Validation {
        /// Human-readable reason.
        message: String,
    },

    /// No event with this id exists.
    #[error("event not found: {id}")]
    EventNotFound {
        /// The id that was looked up.
        id: EventId,
    },

    /// Username/password pair did not match any account.
    #[error("invalid credentials")]
    InvalidCredentials,
}

impl CoreError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Creates an event-not-found error.
    pub fn event_not_found(id: EventId) -> Self {
        Self::EventNotFound { id }
    }

    /// Returns true for failures caused by caller input rather than storage.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::Codec(_))
    }
}
