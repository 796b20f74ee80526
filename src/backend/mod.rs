//! Backend Module
//!
//! Server-side code for the Mesto API: an Axum HTTP server with cookie-based
//! JWT sessions, user profiles and photo cards.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, app creation
//! - **`routes`** - Router assembly, auth gate placement, CORS, fallback
//! - **`auth`** - Tokens, cookies, password hashing, sign-in/up/out handlers
//! - **`middleware`** - The auth gate and the `AuthUser` extractor
//! - **`users`** - Profile handlers
//! - **`cards`** - Card and like handlers
//! - **`store`** - `Repository` trait with in-memory and PostgreSQL backends
//! - **`extract`** - Validated JSON bodies and path ids
//! - **`error`** - `BackendError` and its HTTP rendering
//!
//! # Request Pipeline
//!
//! ```text
//! CORS → TraceLayer → [auth_middleware] → extractors → handler → Result
//! ```
//!
//! Every handler returns `Result<_, BackendError>`; the error type decides
//! the status code and the JSON body.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Backend error types
pub mod error;

/// Persistence
pub mod store;

/// User profile handlers
pub mod users;

/// Card handlers
pub mod cards;

/// Request extractors
pub mod extract;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, create_app_with_store, AppState, ServerConfig};
pub use store::{MemoryStore, PgStore, Repository};
