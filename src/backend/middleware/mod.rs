//! Middleware Module
//!
//! HTTP middleware applied before handlers run.
//!
//! - **`auth`** - Session cookie verification for protected routes
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//! use mesto::backend::middleware::auth_middleware;
//!
//! let protected = protected_routes.route_layer(from_fn_with_state(app_state, auth_middleware));
//! ```

pub mod auth;

pub use auth::{auth_middleware, authenticate, AuthUser, AuthenticatedUser};
