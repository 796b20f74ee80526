//! Shared Module
//!
//! This module contains the payload types of the REST API: request bodies
//! with their validation rules, response shapes, and the errors raised while
//! checking input. Nothing here depends on the HTTP framework or the store.

/// Shared error types
pub mod error;

/// Request payload validation rules
pub mod validation;

/// Request and response payloads
pub mod models;

/// Re-export commonly used types for convenience
pub use error::{FieldViolation, SharedError};
pub use models::{
    CardResponse, CreateCardRequest, LoginRequest, MessageResponse, SignupRequest,
    UpdateAvatarRequest, UpdateProfileRequest, UserResponse,
};
pub use validation::Validate;
