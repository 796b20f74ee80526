//! Store Module
//!
//! Persistence behind an explicit repository interface. Handlers depend on
//! `Arc<dyn Repository>` and never on a concrete storage engine.
//!
//! # Module Structure
//!
//! ```text
//! store/
//! ├── mod.rs       - Records, the Repository trait, StoreError
//! ├── memory.rs    - Process-local store (default, tests)
//! └── postgres.rs  - PostgreSQL store via sqlx
//! ```
//!
//! # Semantics shared by every implementation
//!
//! - Emails are unique; a second insert fails with `StoreError::Duplicate`
//! - Lookups by id return `Ok(None)` for missing records
//! - Likes behave as a set: adding twice or removing an absent like is a no-op
//! - Users are listed oldest first, cards newest first

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::shared::{CardResponse, UserResponse};

pub const DEFAULT_USER_NAME: &str = "Жак-Ив Кусто";
pub const DEFAULT_USER_ABOUT: &str = "Исследователь";
pub const DEFAULT_USER_AVATAR: &str =
    "https://pictures.s3.yandex.net/resources/jacques-cousteau_1604399756.png";

/// User record
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    /// bcrypt hash, never serialized
    pub password_hash: String,
    pub name: String,
    pub about: String,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Card record
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Card {
    pub id: Uuid,
    pub name: String,
    pub link: String,
    pub owner: Uuid,
    pub likes: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a user, with profile defaults already applied
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub about: String,
    pub avatar: String,
}

impl NewUser {
    pub fn new(
        email: String,
        password_hash: String,
        name: Option<String>,
        about: Option<String>,
        avatar: Option<String>,
    ) -> Self {
        Self {
            email,
            password_hash,
            name: name.unwrap_or_else(|| DEFAULT_USER_NAME.to_string()),
            about: about.unwrap_or_else(|| DEFAULT_USER_ABOUT.to_string()),
            avatar: avatar.unwrap_or_else(|| DEFAULT_USER_AVATAR.to_string()),
        }
    }
}

/// Partial profile update; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub about: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewCard {
    pub name: String,
    pub link: String,
    pub owner: Uuid,
}

/// Errors raised by repository implementations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Unique constraint violation
    #[error("Duplicate value for {0}")]
    Duplicate(String),

    /// A referenced record does not exist (e.g. the owner of a new card)
    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Storage operations needed by the route handlers
#[async_trait]
pub trait Repository: Send + Sync {
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    async fn list_users(&self) -> Result<Vec<User>, StoreError>;

    /// Returns the updated user, or `None` if it does not exist
    async fn update_user_profile(
        &self,
        id: Uuid,
        update: ProfileUpdate,
    ) -> Result<Option<User>, StoreError>;

    async fn update_user_avatar(&self, id: Uuid, avatar: String)
        -> Result<Option<User>, StoreError>;

    async fn create_card(&self, card: NewCard) -> Result<Card, StoreError>;

    async fn list_cards(&self) -> Result<Vec<Card>, StoreError>;

    async fn find_card_by_id(&self, id: Uuid) -> Result<Option<Card>, StoreError>;

    /// Returns whether a card was removed
    async fn delete_card(&self, id: Uuid) -> Result<bool, StoreError>;

    async fn add_like(&self, card_id: Uuid, user_id: Uuid) -> Result<Option<Card>, StoreError>;

    async fn remove_like(&self, card_id: Uuid, user_id: Uuid)
        -> Result<Option<Card>, StoreError>;
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            about: user.about,
            avatar: user.avatar,
        }
    }
}

impl From<Card> for CardResponse {
    fn from(card: Card) -> Self {
        Self {
            id: card.id,
            name: card.name,
            link: card.link,
            owner: card.owner,
            likes: card.likes,
            created_at: card.created_at,
        }
    }
}
