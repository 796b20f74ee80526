//! Password hashing
//!
//! bcrypt is CPU-bound, so both hashing and verification run on tokio's
//! blocking pool instead of the request-serving workers.

use tokio::sync::OnceCell;

use crate::backend::error::BackendError;

/// Work factor used when none is configured
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Work factors bcrypt accepts
pub const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

const DUMMY_PASSWORD: &str = "mesto-dummy-password";

/// Hash checked when no user matches, computed once at the first cost asked for
static DUMMY_HASH: OnceCell<String> = OnceCell::const_new();

pub async fn hash_password(password: String, cost: u32) -> Result<String, BackendError> {
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
    Ok(hash)
}

pub async fn verify_password(password: String, hash: String) -> Result<bool, BackendError> {
    let valid = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;
    Ok(valid)
}

/// Run a full bcrypt verification that always fails
///
/// Sign-in calls this for unknown emails, so they take as long as a wrong
/// password for a registered one.
pub async fn verify_dummy_password(password: String, cost: u32) -> Result<bool, BackendError> {
    let hash = DUMMY_HASH
        .get_or_try_init(|| hash_password(DUMMY_PASSWORD.to_string(), cost))
        .await?
        .clone();

    verify_password(password, hash).await?;
    Ok(false)
}
