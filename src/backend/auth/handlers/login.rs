/**
 * Login Handler
 *
 * POST /signin
 *
 * Looks the user up by email, checks the password with bcrypt and, on
 * success, returns the user together with a `jwt` session cookie. Unknown
 * emails and wrong passwords produce the same 401, and both pay for one
 * bcrypt verification.
 */

use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{IntoResponse, Json},
};

use crate::backend::auth::cookies::session_cookie;
use crate::backend::auth::password::{verify_dummy_password, verify_password};
use crate::backend::error::{AuthError, BackendError};
use crate::backend::extract::ValidJson;
use crate::backend::server::state::AppState;
use crate::shared::{LoginRequest, UserResponse};

pub async fn login(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<LoginRequest>,
) -> Result<impl IntoResponse, BackendError> {
    tracing::info!("Login request for: {}", request.email);

    let Some(user) = state.store.find_user_by_email(&request.email).await? else {
        tracing::warn!("User not found: {}", request.email);
        verify_dummy_password(request.password, state.bcrypt_cost).await?;
        return Err(AuthError::InvalidCredentials.into());
    };

    if !verify_password(request.password, user.password_hash.clone()).await? {
        tracing::warn!("Invalid password for user: {}", user.email);
        return Err(AuthError::InvalidCredentials.into());
    }

    let token = state.tokens.issue(user.id)?;
    let cookie = session_cookie(&token)?;

    tracing::info!("User logged in successfully: {} ({})", user.id, user.email);

    Ok(([(SET_COOKIE, cookie)], Json(UserResponse::from(user))))
}
