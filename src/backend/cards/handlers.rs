/**
 * Card Handlers
 *
 * Cards are owned by the user who created them. Anyone authenticated may
 * list, like and unlike; only the owner may delete.
 */

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};

use crate::backend::error::BackendError;
use crate::backend::extract::{RecordId, ValidJson};
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::SharedStore;
use crate::backend::store::NewCard;
use crate::shared::{CardResponse, CreateCardRequest, MessageResponse};

pub const CARD_NOT_FOUND_MESSAGE: &str = "Card not found";
pub const NOT_CARD_OWNER_MESSAGE: &str = "You are not allowed to delete this card";
pub const CARD_DELETED_MESSAGE: &str = "Card deleted";

/// GET /cards, newest first
pub async fn list_cards(
    State(store): State<SharedStore>,
) -> Result<Json<Vec<CardResponse>>, BackendError> {
    let cards = store.list_cards().await?;
    Ok(Json(cards.into_iter().map(CardResponse::from).collect()))
}

/// POST /cards
pub async fn create_card(
    State(store): State<SharedStore>,
    AuthUser(user): AuthUser,
    ValidJson(request): ValidJson<CreateCardRequest>,
) -> Result<(StatusCode, Json<CardResponse>), BackendError> {
    let card = store
        .create_card(NewCard {
            name: request.name,
            link: request.link,
            owner: user.user_id,
        })
        .await?;

    tracing::info!("Card created: {} by {}", card.id, card.owner);
    Ok((StatusCode::CREATED, Json(card.into())))
}

/// DELETE /cards/{id}
///
/// Missing card → 404, someone else's card → 403.
pub async fn delete_card(
    State(store): State<SharedStore>,
    AuthUser(user): AuthUser,
    RecordId(id): RecordId,
) -> Result<Json<MessageResponse>, BackendError> {
    let card = store
        .find_card_by_id(id)
        .await?
        .ok_or_else(|| BackendError::not_found(CARD_NOT_FOUND_MESSAGE))?;

    if card.owner != user.user_id {
        tracing::warn!("User {} tried to delete card {} owned by {}", user.user_id, card.id, card.owner);
        return Err(BackendError::forbidden(NOT_CARD_OWNER_MESSAGE));
    }

    // A concurrent delete can win the race between lookup and removal.
    if !store.delete_card(id).await? {
        return Err(BackendError::not_found(CARD_NOT_FOUND_MESSAGE));
    }

    tracing::info!("Card deleted: {}", id);
    Ok(Json(MessageResponse::new(CARD_DELETED_MESSAGE)))
}

/// PUT /cards/{id}/likes
pub async fn like_card(
    State(store): State<SharedStore>,
    AuthUser(user): AuthUser,
    RecordId(id): RecordId,
) -> Result<Json<CardResponse>, BackendError> {
    let card = store
        .add_like(id, user.user_id)
        .await?
        .ok_or_else(|| BackendError::not_found(CARD_NOT_FOUND_MESSAGE))?;

    Ok(Json(card.into()))
}

/// DELETE /cards/{id}/likes
pub async fn unlike_card(
    State(store): State<SharedStore>,
    AuthUser(user): AuthUser,
    RecordId(id): RecordId,
) -> Result<Json<CardResponse>, BackendError> {
    let card = store
        .remove_like(id, user.user_id)
        .await?
        .ok_or_else(|| BackendError::not_found(CARD_NOT_FOUND_MESSAGE))?;

    Ok(Json(card.into()))
}
