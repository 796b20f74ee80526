/**
 * PostgreSQL Store
 *
 * Repository implementation backed by a `PgPool`. Migrations under
 * `migrations/` are applied on connect.
 *
 * Likes are stored as a `UUID[]` column and updated in place with
 * `array_append` / `array_remove`, so concurrent likes never lose writes.
 */

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use super::{Card, NewCard, NewUser, ProfileUpdate, Repository, StoreError, User};

const USER_COLUMNS: &str = "id, email, password_hash, name, about, avatar, created_at, updated_at";
const CARD_COLUMNS: &str = "id, name, link, owner, likes, created_at";

/// PostgreSQL-backed repository
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to `database_url` and run pending migrations
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        tracing::info!("Connecting to database...");
        let pool = PgPool::connect(database_url).await?;
        tracing::info!("Database connection pool created successfully");

        tracing::info!("Running database migrations...");
        sqlx::migrate!().run(&pool).await?;
        tracing::info!("Database migrations completed successfully");

        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Map constraint violations onto store errors
///
/// Unique violations (23505) become `Duplicate(field)`, foreign key
/// violations (23503) become `NotFound`.
fn classify(err: sqlx::Error, field: &str) -> StoreError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            StoreError::Duplicate(field.to_string())
        }
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            StoreError::NotFound
        }
        _ => StoreError::Database(err),
    }
}

#[async_trait]
impl Repository for PgStore {
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        let now = Utc::now();
        sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (id, email, password_hash, name, about, avatar, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.name)
        .bind(&user.about)
        .bind(&user.avatar)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| classify(e, "email"))
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn update_user_profile(
        &self,
        id: Uuid,
        update: ProfileUpdate,
    ) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            UPDATE users
            SET name = COALESCE($1, name), about = COALESCE($2, about), updated_at = $3
            WHERE id = $4
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(update.name)
        .bind(update.about)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn update_user_avatar(
        &self,
        id: Uuid,
        avatar: String,
    ) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            UPDATE users
            SET avatar = $1, updated_at = $2
            WHERE id = $3
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(avatar)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn create_card(&self, card: NewCard) -> Result<Card, StoreError> {
        let card = sqlx::query_as::<_, Card>(&format!(
            r#"
            INSERT INTO cards (id, name, link, owner, likes, created_at)
            VALUES ($1, $2, $3, $4, '{{}}', $5)
            RETURNING {CARD_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(&card.name)
        .bind(&card.link)
        .bind(card.owner)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| classify(e, "owner"))?;

        Ok(card)
    }

    async fn list_cards(&self) -> Result<Vec<Card>, StoreError> {
        let cards = sqlx::query_as::<_, Card>(&format!(
            "SELECT {CARD_COLUMNS} FROM cards ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(cards)
    }

    async fn find_card_by_id(&self, id: Uuid) -> Result<Option<Card>, StoreError> {
        let card = sqlx::query_as::<_, Card>(&format!(
            "SELECT {CARD_COLUMNS} FROM cards WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(card)
    }

    async fn delete_card(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM cards WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn add_like(&self, card_id: Uuid, user_id: Uuid) -> Result<Option<Card>, StoreError> {
        let card = sqlx::query_as::<_, Card>(&format!(
            r#"
            UPDATE cards
            SET likes = CASE WHEN $2 = ANY(likes) THEN likes ELSE array_append(likes, $2) END
            WHERE id = $1
            RETURNING {CARD_COLUMNS}
            "#
        ))
        .bind(card_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(card)
    }

    async fn remove_like(
        &self,
        card_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Card>, StoreError> {
        let card = sqlx::query_as::<_, Card>(&format!(
            r#"
            UPDATE cards
            SET likes = array_remove(likes, $2)
            WHERE id = $1
            RETURNING {CARD_COLUMNS}
            "#
        ))
        .bind(card_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(card)
    }
}
