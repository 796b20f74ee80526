//! Request payload validation
//!
//! Payloads implement [`Validate`] and are checked by the `ValidJson`
//! extractor before a handler sees them. The first failing rule is reported.

use std::sync::LazyLock;

use regex::Regex;

use crate::shared::error::SharedError;

/// Links and avatars: http(s) URL with a dotted host and an optional path.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^https?://(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_+.~#?&/=]*)$",
    )
    .expect("url pattern is a valid regex")
});

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Minimum password length accepted at sign-up and sign-in
pub const PASSWORD_MIN_LEN: usize = 8;
/// Bounds shared by user names, user descriptions and card titles
pub const TEXT_MIN_LEN: usize = 2;
pub const TEXT_MAX_LEN: usize = 30;

/// Schema check for a deserialized payload
pub trait Validate {
    fn validate(&self) -> Result<(), SharedError>;
}

pub fn is_valid_url(value: &str) -> bool {
    URL_PATTERN.is_match(value)
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

pub fn check_email(field: &str, value: &str) -> Result<(), SharedError> {
    if is_valid_email(value) {
        Ok(())
    } else {
        Err(SharedError::validation(field, "must be a valid email address"))
    }
}

pub fn check_url(field: &str, value: &str) -> Result<(), SharedError> {
    if is_valid_url(value) {
        Ok(())
    } else {
        Err(SharedError::validation(field, "must be a valid http(s) URL"))
    }
}

pub fn check_min_len(field: &str, value: &str, min: usize) -> Result<(), SharedError> {
    if value.chars().count() >= min {
        Ok(())
    } else {
        Err(SharedError::validation(
            field,
            format!("must be at least {} characters long", min),
        ))
    }
}

/// Length in characters, inclusive on both ends
pub fn check_len(field: &str, value: &str, min: usize, max: usize) -> Result<(), SharedError> {
    let len = value.chars().count();
    if (min..=max).contains(&len) {
        Ok(())
    } else {
        Err(SharedError::validation(
            field,
            format!("must be between {} and {} characters long", min, max),
        ))
    }
}

/// Same as [`check_len`] but only when the field is present
pub fn check_optional_len(
    field: &str,
    value: Option<&str>,
    min: usize,
    max: usize,
) -> Result<(), SharedError> {
    match value {
        Some(value) => check_len(field, value, min, max),
        None => Ok(()),
    }
}
