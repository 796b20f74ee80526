/**
 * Backend Error Types
 *
 * This module defines the error taxonomy of the REST API. Every failure a
 * handler can detect is expressed as exactly one `BackendError`, which is
 * propagated with `?` and rendered once by the `IntoResponse` impl.
 *
 * # Error Kinds
 *
 * | Kind           | Status | Raised for                                         |
 * |----------------|--------|----------------------------------------------------|
 * | `BadRequest`   | 400    | malformed body, failed validation, invalid id      |
 * | `Unauthorized` | 401    | missing/invalid/expired token, wrong credentials   |
 * | `Forbidden`    | 403    | acting on another user's card                      |
 * | `NotFound`     | 404    | missing resource or route                          |
 * | `Conflict`     | 409    | duplicate email                                    |
 * | `Internal`     | 500    | anything unclassified                              |
 *
 * Lower-level errors (store, bcrypt, jsonwebtoken) are classified through
 * `From` impls; no handler builds a response for a failure itself.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::store::StoreError;
use crate::shared::{FieldViolation, SharedError};

/// Message rendered for every 401 raised by the auth gate
pub const AUTH_REQUIRED_MESSAGE: &str = "Authorization required";
/// Message rendered for failed sign-in, whatever the reason
pub const BAD_CREDENTIALS_MESSAGE: &str = "Incorrect email or password";
/// Body message for 500 responses; the real cause only goes to the log
pub const INTERNAL_ERROR_MESSAGE: &str = "An error occurred on the server";
pub const VALIDATION_FAILED_MESSAGE: &str = "Validation failed";
pub const INVALID_ID_MESSAGE: &str = "Invalid id";

/// Reasons the auth gate or sign-in can refuse a caller
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// No `jwt` cookie on the request
    #[error("Missing token")]
    MissingToken,

    /// Malformed, mis-signed or expired token
    #[error("Invalid token")]
    InvalidToken,

    /// Unknown email or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use mesto::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::forbidden("Cannot delete another user's card");
/// assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Malformed input, failed validation, or an id that cannot be parsed
    #[error("Bad request: {message}")]
    BadRequest {
        message: String,
        /// Field-level details for validation failures
        violation: Option<FieldViolation>,
    },

    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// Unclassified failure; `message` is logged, never sent to the client
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl BackendError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            violation: None,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    ///
    /// Internal errors always yield the generic message.
    pub fn message(&self) -> String {
        match self {
            Self::BadRequest { message, .. }
            | Self::Unauthorized { message }
            | Self::Forbidden { message }
            | Self::NotFound { message }
            | Self::Conflict { message } => message.clone(),
            Self::Internal { .. } => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn violation(&self) -> Option<&FieldViolation> {
        match self {
            Self::BadRequest { violation, .. } => violation.as_ref(),
            _ => None,
        }
    }
}

impl From<SharedError> for BackendError {
    fn from(err: SharedError) -> Self {
        match err.violation() {
            Some(violation) => Self::BadRequest {
                message: VALIDATION_FAILED_MESSAGE.to_string(),
                violation: Some(violation),
            },
            None => Self::bad_request(err.to_string()),
        }
    }
}

impl From<AuthError> for BackendError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingToken | AuthError::InvalidToken => {
                Self::unauthorized(AUTH_REQUIRED_MESSAGE)
            }
            AuthError::InvalidCredentials => Self::unauthorized(BAD_CREDENTIALS_MESSAGE),
        }
    }
}

impl From<StoreError> for BackendError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate(field) => {
                Self::conflict(format!("A user with this {} is already registered", field))
            }
            StoreError::NotFound => Self::not_found("Requested resource not found"),
            other => Self::internal(other.to_string()),
        }
    }
}

impl From<bcrypt::BcryptError> for BackendError {
    fn from(err: bcrypt::BcryptError) -> Self {
        Self::internal(format!("Password hashing failed: {}", err))
    }
}

impl From<jsonwebtoken::errors::Error> for BackendError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        Self::internal(format!("Token signing failed: {}", err))
    }
}

impl From<tokio::task::JoinError> for BackendError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::internal(format!("Blocking task failed: {}", err))
    }
}
