//! Mesto - Main Library
//!
//! Mesto is the REST backend for a photo-sharing site: users register, sign
//! in with a cookie-held JWT, edit their profile, post photo cards and like
//! each other's cards.
//!
//! # Module Structure
//!
//! - **`shared`** - Request/response payloads, validation rules, `SharedError`
//! - **`backend`** - Axum server, auth gate, handlers, storage
//!
//! # Usage
//!
//! ```rust,no_run
//! use mesto::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
