/**
 * Signup Handler
 *
 * POST /signup
 *
 * # Registration Process
 *
 * 1. Validate the payload (`ValidJson`)
 * 2. Reject an already registered email with 409
 * 3. Hash the password with bcrypt on the blocking pool
 * 4. Create the user, filling in profile defaults
 * 5. Return the user with 201; no session is started
 *
 * The plaintext password never reaches the store.
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::password::hash_password;
use crate::backend::error::BackendError;
use crate::backend::extract::ValidJson;
use crate::backend::server::state::AppState;
use crate::backend::store::NewUser;
use crate::shared::{SignupRequest, UserResponse};

pub const EMAIL_TAKEN_MESSAGE: &str = "A user with this email is already registered";

pub async fn signup(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<SignupRequest>,
) -> Result<(StatusCode, Json<UserResponse>), BackendError> {
    tracing::info!("Signup request for: {}", request.email);

    if state.store.find_user_by_email(&request.email).await?.is_some() {
        tracing::warn!("Email already exists: {}", request.email);
        return Err(BackendError::conflict(EMAIL_TAKEN_MESSAGE));
    }

    let password_hash = hash_password(request.password, state.bcrypt_cost).await?;

    let user = state
        .store
        .create_user(NewUser::new(
            request.email,
            password_hash,
            request.name,
            request.about,
            request.avatar,
        ))
        .await?;

    tracing::info!("User created successfully: {} ({})", user.id, user.email);

    Ok((StatusCode::CREATED, Json(user.into())))
}
