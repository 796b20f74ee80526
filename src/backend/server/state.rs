/**
 * Application State
 *
 * `AppState` is the single state container handed to the router. It is cheap
 * to clone: the store sits behind an `Arc` and the token codec only holds
 * keys. Handlers pull out just the part they need through `FromRef`.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::sessions::TokenCodec;
use crate::backend::server::config::ServerConfig;
use crate::backend::store::Repository;

/// Repository handle shared by all handlers
pub type SharedStore = Arc<dyn Repository>;

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,

    pub tokens: TokenCodec,

    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
}

impl AppState {
    pub fn new(store: SharedStore, config: &ServerConfig) -> Self {
        Self {
            store,
            tokens: TokenCodec::new(&config.jwt_secret),
            bcrypt_cost: config.bcrypt_cost,
        }
    }
}

impl FromRef<AppState> for SharedStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

impl FromRef<AppState> for TokenCodec {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
