//! # Error Types
//!
//! Errors shared by every crate that handles credential records. All use
//! `thiserror` for `Display` and `Error` implementations.

use thiserror::Error;

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// Float values are not permitted in canonical representations.
    #[error("float values are not permitted in canonical representations: {0}")]
    FloatRejected(f64),

    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

/// A record or identifier failed structural validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required string field is empty or whitespace-only.
    #[error("field `{0}` must not be empty")]
    EmptyField(&'static str),

    /// An identifier field is not a well-formed UUID.
    #[error("field `{field}` is not a valid UUID: {value:?}")]
    InvalidUuid {
        /// The offending field name.
        field: &'static str,
        /// The raw value that failed to parse.
        value: String,
    },

    /// A ticket category outside the known set.
    #[error("unknown ticket category: {0:?}")]
    UnknownTicketCategory(String),

    /// A category (folder) name that is empty or contains path separators.
    #[error("invalid category name: {0:?}")]
    InvalidCategory(String),

    /// A requester identity key that is empty or contains whitespace.
    #[error("invalid semaphore id: {0:?}")]
    InvalidSemaphoreId(String),
}
