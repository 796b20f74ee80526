//! Users Module
//!
//! Profile reads and edits for authenticated callers.
//!
//! - `GET /users` - all users
//! - `GET /users/me` - the caller
//! - `PATCH /users/me` - name and/or about
//! - `PATCH /users/me/avatar` - avatar URL
//! - `GET /users/{id}` - one user

pub mod handlers;

pub use handlers::{get_me, get_user, list_users, update_avatar, update_profile};
