//! Shared Error Types
//!
//! This module defines error types for request payloads that are shared
//! between the API and any client that talks to it. These errors represent
//! input that was rejected before it reached the store.
//!
//! # Error Categories
//!
//! - `ValidationError` - A field failed a schema rule (length, pattern, required)
//! - `MalformedBody` - The body could not be parsed as the expected JSON shape
//!
//! # Usage
//!
//! ```rust
//! use mesto::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "must be a valid email address");
//! assert_eq!(error.field(), Some("email"));
//! ```
use serde::Serialize;
use thiserror::Error;

/// Errors raised while checking an incoming payload
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// JSON body could not be parsed
    #[error("Malformed request body: {message}")]
    MalformedBody {
        /// Human-readable error message
        message: String,
    },
}

/// Field-level validation details, rendered next to the error message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new malformed body error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedBody {
            message: message.into(),
        }
    }

    /// The offending field, if the error is tied to one
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::ValidationError { field, .. } => Some(field),
            Self::MalformedBody { .. } => None,
        }
    }

    /// Field-level details for the response body
    pub fn violation(&self) -> Option<FieldViolation> {
        match self {
            Self::ValidationError { field, message } => Some(FieldViolation {
                field: field.clone(),
                message: message.clone(),
            }),
            Self::MalformedBody { .. } => None,
        }
    }
}
