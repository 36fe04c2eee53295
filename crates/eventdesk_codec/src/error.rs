//! Error types for the codec crate.

use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while decoding a stored line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The line has the wrong number of `|`-delimited fields.
    #[error("expected {expected} fields, found {actual}")]
    FieldCount {
        /// Accepted field count(s), e.g. `"at least 5"`.
        expected: String,
        /// Number of fields on the line.
        actual: usize,
    },

    /// A date field is not in `dd/MM/yyyy` form.
    #[error("invalid date {input:?}: expected dd/MM/yyyy")]
    InvalidDate {
        /// The offending text.
        input: String,
    },

    /// A required field is empty.
    #[error("field {field} is empty")]
    EmptyField {
        /// Name of the empty field.
        field: &'static str,
    },
}

impl CodecError {
    /// Create a field count error.
    pub fn field_count(expected: impl Into<String>, actual: usize) -> Self {
        Self::FieldCount {
            expected: expected.into(),
            actual,
        }
    }

    /// Create an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.into(),
        }
    }
}
