//! Database test fixtures
//!
//! PostgreSQL tests only run when `DATABASE_URL` points at a live server.
//! Each test works on its own uniquely named rows, so suites can share one
//! database without truncating it.

use sqlx::PgPool;
use uuid::Uuid;

use mesto::backend::store::{NewUser, PgStore, Repository, User};

/// Connection string for the test database, if one is configured
pub fn test_database_url() -> Option<String> {
    match std::env::var("DATABASE_URL") {
        Ok(url) if !url.trim().is_empty() => Some(url),
        _ => {
            eprintln!("DATABASE_URL not set, skipping PostgreSQL test");
            None
        }
    }
}

/// Create a test database connection pool
pub async fn create_test_pool() -> Option<PgPool> {
    let url = test_database_url()?;
    Some(
        PgPool::connect(&url)
            .await
            .expect("Failed to create test database pool"),
    )
}

/// Run database migrations for testing
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Connect a `PgStore` with migrations applied
pub async fn create_test_store() -> Option<PgStore> {
    let url = test_database_url()?;
    Some(
        PgStore::connect(&url)
            .await
            .expect("Failed to connect test store"),
    )
}

/// An email no other test run will use
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@pg.example.com", prefix, Uuid::new_v4().simple())
}

/// Insert a user with default profile fields
pub async fn insert_user(store: &PgStore, email: &str) -> User {
    store
        .create_user(NewUser::new(
            email.to_string(),
            "$2b$04$placeholderhashplaceholderhashplaceholderhashpla".to_string(),
            None,
            None,
            None,
        ))
        .await
        .expect("Failed to insert test user")
}

/// Remove users (and, by cascade, their cards) created by one test
pub async fn cleanup_users(pool: &PgPool, ids: &[Uuid]) {
    sqlx::query("DELETE FROM users WHERE id = ANY($1)")
        .bind(ids)
        .execute(pool)
        .await
        .expect("Failed to clean up test users");
}
