//! Server Module
//!
//! This module contains the code that initializes and configures the Axum
//! HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Configuration loading from the environment
//! └── init.rs         - Store selection and app creation
//! ```
//!
//! # State Management
//!
//! `AppState` holds the repository (`Arc<dyn Repository>`), the token codec
//! and the bcrypt cost. Handlers extract only what they need via `FromRef`.
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env()`
//! 2. **Store Selection**: PostgreSQL or in-memory
//! 3. **Router Creation**: routes, auth gate, tracing, CORS

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::{ConfigError, ServerConfig};
pub use init::{create_app, create_app_with_store};
pub use state::{AppState, SharedStore};
