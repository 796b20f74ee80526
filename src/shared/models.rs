//! API payloads
//!
//! Request bodies accepted by the REST API and the JSON shapes it returns.
//! Request types reject unknown keys and carry their own [`Validate`] rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;
use crate::shared::validation::{
    check_email, check_len, check_min_len, check_optional_len, check_url, Validate,
    PASSWORD_MIN_LEN, TEXT_MAX_LEN, TEXT_MIN_LEN,
};

/// Sign up request
///
/// Profile fields are optional; the store fills in defaults.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct SignupRequest {
    pub email: String,
    /// Plaintext password, hashed before it is stored
    pub password: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl Validate for SignupRequest {
    fn validate(&self) -> Result<(), SharedError> {
        check_email("email", &self.email)?;
        check_min_len("password", &self.password, PASSWORD_MIN_LEN)?;
        check_optional_len("name", self.name.as_deref(), TEXT_MIN_LEN, TEXT_MAX_LEN)?;
        check_optional_len("about", self.about.as_deref(), TEXT_MIN_LEN, TEXT_MAX_LEN)?;
        if let Some(avatar) = &self.avatar {
            check_url("avatar", avatar)?;
        }
        Ok(())
    }
}

/// Sign in request
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl Validate for LoginRequest {
    fn validate(&self) -> Result<(), SharedError> {
        check_email("email", &self.email)?;
        check_min_len("password", &self.password, PASSWORD_MIN_LEN)
    }
}

/// Profile update; absent fields are left untouched
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
}

impl Validate for UpdateProfileRequest {
    fn validate(&self) -> Result<(), SharedError> {
        check_optional_len("name", self.name.as_deref(), TEXT_MIN_LEN, TEXT_MAX_LEN)?;
        check_optional_len("about", self.about.as_deref(), TEXT_MIN_LEN, TEXT_MAX_LEN)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct UpdateAvatarRequest {
    pub avatar: String,
}

impl Validate for UpdateAvatarRequest {
    fn validate(&self) -> Result<(), SharedError> {
        check_url("avatar", &self.avatar)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct CreateCardRequest {
    pub name: String,
    pub link: String,
}

impl Validate for CreateCardRequest {
    fn validate(&self) -> Result<(), SharedError> {
        check_len("name", &self.name, TEXT_MIN_LEN, TEXT_MAX_LEN)?;
        check_url("link", &self.link)
    }
}

/// User response (without sensitive data)
///
/// Never carries the password hash.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub about: String,
    pub avatar: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CardResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub link: String,
    pub owner: Uuid,
    pub likes: Vec<Uuid>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Plain acknowledgement body (logout, card deletion)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
