/**
 * Authentication Middleware
 *
 * This module guards every route except sign-in and sign-up. It reads the
 * session token from the `jwt` cookie, verifies it, and exposes the user id
 * to handlers through request extensions.
 *
 * `authenticate` returns a plain `Result`; the middleware branches on it and
 * either rejects with 401 without touching the handler, or attaches the
 * identity and runs the handler exactly once.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{request::Parts, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::backend::auth::cookies::{get_cookie_value, SESSION_COOKIE};
use crate::backend::auth::sessions::TokenCodec;
use crate::backend::error::{AuthError, BackendError};

/// Authenticated user data extracted from the session token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Resolve the caller's identity from the session cookie
pub fn authenticate(headers: &HeaderMap, codec: &TokenCodec) -> Result<Uuid, AuthError> {
    let token = get_cookie_value(headers, SESSION_COOKIE).ok_or(AuthError::MissingToken)?;
    codec.verify(&token)
}

/// Authentication middleware
///
/// Returns 401 Unauthorized if the cookie is missing or the token is invalid.
pub async fn auth_middleware(
    State(codec): State<TokenCodec>,
    mut request: Request,
    next: Next,
) -> Response {
    match authenticate(request.headers(), &codec) {
        Ok(user_id) => {
            request.extensions_mut().insert(AuthenticatedUser { user_id });
            next.run(request).await
        }
        Err(reason) => {
            tracing::warn!(
                "Rejected {} {}: {}",
                request.method(),
                request.uri().path(),
                reason
            );
            BackendError::from(reason).into_response()
        }
    }
}

/// Axum extractor for the authenticated user
///
/// Only meaningful behind `auth_middleware`; elsewhere it rejects with 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::from(AuthError::MissingToken)
            })?;

        Ok(AuthUser(user))
    }
}
