//! Session cookie handling
//!
//! The session token travels in a cookie named `jwt`. It is always set and
//! cleared with the same attributes: `HttpOnly`, `Secure`, `SameSite=None`,
//! `Path=/`.

use axum::http::{header::COOKIE, HeaderMap, HeaderValue};

use crate::backend::auth::sessions::TOKEN_TTL_SECS;
use crate::backend::error::BackendError;

pub const SESSION_COOKIE: &str = "jwt";

#[derive(Debug, Clone)]
pub struct CookieOptions {
    pub http_only: bool,
    pub secure: bool,
    /// `SameSite` attribute value
    pub same_site: &'static str,
    pub path: String,
    pub max_age: Option<i64>,
}

impl Default for CookieOptions {
    fn default() -> Self {
        Self {
            http_only: true,
            secure: true,
            same_site: "None",
            path: "/".to_string(),
            max_age: None,
        }
    }
}

/// Render a `Set-Cookie` value
pub fn build_cookie(name: &str, value: &str, options: &CookieOptions) -> String {
    let mut cookie = format!("{}={}", name, value);

    if let Some(max_age) = options.max_age {
        cookie.push_str(&format!("; Max-Age={}", max_age));
    }

    cookie.push_str(&format!("; Path={}", options.path));

    if options.http_only {
        cookie.push_str("; HttpOnly");
    }

    if options.secure {
        cookie.push_str("; Secure");
    }

    cookie.push_str(&format!("; SameSite={}", options.same_site));
    cookie
}

/// `Set-Cookie` value carrying a fresh session token
pub fn session_cookie(token: &str) -> Result<HeaderValue, BackendError> {
    let options = CookieOptions {
        max_age: Some(TOKEN_TTL_SECS),
        ..Default::default()
    };

    HeaderValue::from_str(&build_cookie(SESSION_COOKIE, token, &options))
        .map_err(|e| BackendError::internal(format!("Invalid session cookie: {}", e)))
}

/// `Set-Cookie` value that makes the browser drop the session
pub fn cleared_session_cookie() -> HeaderValue {
    let options = CookieOptions {
        max_age: Some(0),
        ..Default::default()
    };

    // Only static ASCII goes into this value
    HeaderValue::from_str(&build_cookie(SESSION_COOKIE, "", &options))
        .unwrap_or_else(|_| HeaderValue::from_static("jwt=; Max-Age=0; Path=/"))
}

/// Read a cookie from every `Cookie` header on the request
pub fn get_cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(cookie_name, _)| cookie_name.trim() == name)
        .map(|(_, cookie_value)| cookie_value.trim().to_string())
        .filter(|value| !value.is_empty())
}
