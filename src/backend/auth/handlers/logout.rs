//! Logout Handler
//!
//! GET /users/logout, behind the auth gate. Clears the session cookie with
//! the same attributes it was set with. Tokens are stateless, so nothing is
//! revoked server-side.

use axum::{
    http::{header::SET_COOKIE, StatusCode},
    response::{IntoResponse, Json},
};

use crate::backend::auth::cookies::cleared_session_cookie;
use crate::backend::middleware::AuthUser;
use crate::shared::MessageResponse;

pub const LOGOUT_MESSAGE: &str = "Cookie cleared";

pub async fn logout(AuthUser(user): AuthUser) -> impl IntoResponse {
    tracing::info!("User logged out: {}", user.user_id);

    (
        StatusCode::ACCEPTED,
        [(SET_COOKIE, cleared_session_cookie())],
        Json(MessageResponse::new(LOGOUT_MESSAGE)),
    )
}
