//! Backend Error Module
//!
//! This module defines the error taxonomy of the REST API and its
//! conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - BackendError, AuthError and their From impls
//! └── conversion.rs - IntoResponse for BackendError
//! ```
//!
//! # Propagation
//!
//! Handlers return `Result<_, BackendError>` and use `?` on store, hashing and
//! validation calls. The error travels unchanged to the `IntoResponse` impl,
//! which is the only place a failure becomes a response.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{AuthError, BackendError};
