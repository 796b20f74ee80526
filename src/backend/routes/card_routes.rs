//! Card routes. Mounted behind the auth gate.

use axum::{
    routing::{delete, get, put},
    Router,
};

use crate::backend::cards::{create_card, delete_card, like_card, list_cards, unlike_card};
use crate::backend::server::state::AppState;

pub fn configure_card_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/cards", get(list_cards).post(create_card))
        .route("/cards/{id}", delete(delete_card))
        .route("/cards/{id}/likes", put(like_card).delete(unlike_card))
}
