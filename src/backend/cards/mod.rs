//! Cards Module
//!
//! Photo cards with likes.
//!
//! - `GET /cards` - all cards, newest first
//! - `POST /cards` - create a card owned by the caller
//! - `DELETE /cards/{id}` - owner-only delete
//! - `PUT /cards/{id}/likes` - add the caller's like
//! - `DELETE /cards/{id}/likes` - remove the caller's like

pub mod handlers;

pub use handlers::{create_card, delete_card, like_card, list_cards, unlike_card};
