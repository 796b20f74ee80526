//! Authentication Handlers Module
//!
//! HTTP handlers for the session lifecycle.
//!
//! # Handlers
//!
//! - **`signup`** - POST /signup - Register a user (public)
//! - **`login`** - POST /signin - Verify credentials, set the `jwt` cookie (public)
//! - **`logout`** - GET /users/logout - Clear the `jwt` cookie (protected)

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

pub use login::login;
pub use logout::logout;
pub use signup::signup;
