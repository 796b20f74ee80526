/**
 * User Handlers
 *
 * Everything here runs behind the auth gate, so the caller's id comes from
 * `AuthUser`. Profile edits only ever touch the caller's own record.
 */

use axum::{
    extract::State,
    response::Json,
};

use crate::backend::error::BackendError;
use crate::backend::extract::{RecordId, ValidJson};
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::SharedStore;
use crate::backend::store::ProfileUpdate;
use crate::shared::{UpdateAvatarRequest, UpdateProfileRequest, UserResponse};

pub const USER_NOT_FOUND_MESSAGE: &str = "User with this id does not exist";

/// GET /users
pub async fn list_users(
    State(store): State<SharedStore>,
) -> Result<Json<Vec<UserResponse>>, BackendError> {
    let users = store.list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /users/me
///
/// A valid token whose user has since been removed yields 404.
pub async fn get_me(
    State(store): State<SharedStore>,
    AuthUser(user): AuthUser,
) -> Result<Json<UserResponse>, BackendError> {
    let record = store.find_user_by_id(user.user_id).await?.ok_or_else(|| {
        tracing::warn!("Authenticated user missing from store: {}", user.user_id);
        BackendError::not_found(USER_NOT_FOUND_MESSAGE)
    })?;

    Ok(Json(record.into()))
}

/// GET /users/{id}
pub async fn get_user(
    State(store): State<SharedStore>,
    RecordId(id): RecordId,
) -> Result<Json<UserResponse>, BackendError> {
    let record = store
        .find_user_by_id(id)
        .await?
        .ok_or_else(|| BackendError::not_found(USER_NOT_FOUND_MESSAGE))?;

    Ok(Json(record.into()))
}

/// PATCH /users/me
pub async fn update_profile(
    State(store): State<SharedStore>,
    AuthUser(user): AuthUser,
    ValidJson(request): ValidJson<UpdateProfileRequest>,
) -> Result<Json<UserResponse>, BackendError> {
    let update = ProfileUpdate {
        name: request.name,
        about: request.about,
    };

    let record = store
        .update_user_profile(user.user_id, update)
        .await?
        .ok_or_else(|| BackendError::not_found(USER_NOT_FOUND_MESSAGE))?;

    tracing::info!("Profile updated: {}", record.id);
    Ok(Json(record.into()))
}

/// PATCH /users/me/avatar
pub async fn update_avatar(
    State(store): State<SharedStore>,
    AuthUser(user): AuthUser,
    ValidJson(request): ValidJson<UpdateAvatarRequest>,
) -> Result<Json<UserResponse>, BackendError> {
    let record = store
        .update_user_avatar(user.user_id, request.avatar)
        .await?
        .ok_or_else(|| BackendError::not_found(USER_NOT_FOUND_MESSAGE))?;

    tracing::info!("Avatar updated: {}", record.id);
    Ok(Json(record.into()))
}
