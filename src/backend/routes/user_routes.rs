//! User routes. Mounted behind the auth gate.

use axum::{
    routing::{get, patch},
    Router,
};

use crate::backend::auth::logout;
use crate::backend::server::state::AppState;
use crate::backend::users::{get_me, get_user, list_users, update_avatar, update_profile};

/// Configure user routes
///
/// - `GET /users`
/// - `GET /users/me`, `PATCH /users/me`
/// - `PATCH /users/me/avatar`
/// - `GET /users/logout`
/// - `GET /users/{id}`
///
/// Static segments take precedence over `{id}`, so `me` and `logout` are
/// never parsed as ids.
pub fn configure_user_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/users", get(list_users))
        .route("/users/me", get(get_me).patch(update_profile))
        .route("/users/me/avatar", patch(update_avatar))
        .route("/users/logout", get(logout))
        .route("/users/{id}", get(get_user))
}
