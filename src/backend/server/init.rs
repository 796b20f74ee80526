/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including store selection, state creation, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Pick the store: PostgreSQL when `DATABASE_URL` is set, otherwise the
 *    in-memory store
 * 2. Build `AppState` from the store and the configuration
 * 3. Create and configure the router
 *
 * A configured database that cannot be reached (or migrated) is a startup
 * error; the server does not silently fall back to memory.
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::{AppState, SharedStore};
use crate::backend::store::{MemoryStore, PgStore, StoreError};

/// Create and configure the Axum application
///
/// # Errors
///
/// Returns `StoreError` if `DATABASE_URL` is set and the connection or the
/// migrations fail.
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, StoreError> {
    tracing::info!("Initializing backend server ({:?})", config.environment);

    let store: SharedStore = match &config.database_url {
        Some(url) => Arc::new(PgStore::connect(url).await?),
        None => {
            tracing::warn!("DATABASE_URL not set. Using the in-memory store; data will not persist.");
            Arc::new(MemoryStore::new())
        }
    };

    Ok(create_app_with_store(store, config))
}

/// Build the application around an existing store
pub fn create_app_with_store(store: SharedStore, config: &ServerConfig) -> Router<()> {
    let app_state = AppState::new(store, config);
    let app = create_router(app_state, &config.cors_origins);
    tracing::info!("Router configured");
    app
}
