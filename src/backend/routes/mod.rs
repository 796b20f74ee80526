//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//! Routes are organized by functionality into focused submodules.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, auth gate, CORS, fallback
//! ├── auth_routes.rs  - Public sign-in / sign-up
//! ├── user_routes.rs  - /users/** (protected)
//! └── card_routes.rs  - /cards/** (protected)
//! ```
//!
//! # Route Types
//!
//! ## Public
//!
//! - `POST /signin` - Sign in, sets the `jwt` cookie
//! - `POST /signup` - Register
//!
//! ## Protected
//!
//! - `GET /users`, `GET /users/{id}`
//! - `GET /users/me`, `PATCH /users/me`, `PATCH /users/me/avatar`
//! - `GET /users/logout`
//! - `GET /cards`, `POST /cards`, `DELETE /cards/{id}`
//! - `PUT /cards/{id}/likes`, `DELETE /cards/{id}/likes`
//!
//! Anything else answers with a JSON 404.

/// Main router creation
pub mod router;

/// Public authentication routes
pub mod auth_routes;

/// User routes
pub mod user_routes;

/// Card routes
pub mod card_routes;

// Re-export commonly used functions
pub use router::create_router;
