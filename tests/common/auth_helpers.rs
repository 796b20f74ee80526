//! Authentication test helpers
//!
//! Provides utilities for creating signed-in test users and forging session
//! cookies.

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde_json::json;
use uuid::Uuid;

use mesto::backend::auth::sessions::TokenCodec;

use super::{TestApp, TEST_JWT_SECRET};

pub const TEST_PASSWORD: &str = "test_password_123";

/// A registered, signed-in user
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    /// `jwt=<token>` for the `Cookie` header
    pub cookie: String,
}

impl TestUser {
    pub fn cookie(&self) -> Option<&str> {
        Some(self.cookie.as_str())
    }
}

/// Sign up and sign in through the HTTP API
pub async fn create_test_user(app: &TestApp, email: &str, password: &str) -> TestUser {
    let signup = app
        .post("/signup", json!({ "email": email, "password": password }), None)
        .await;
    assert_eq!(signup.status, StatusCode::CREATED, "signup failed: {}", signup.body);

    let signin = app
        .post("/signin", json!({ "email": email, "password": password }), None)
        .await;
    assert_eq!(signin.status, StatusCode::OK, "signin failed: {}", signin.body);

    let id = signin.body["_id"]
        .as_str()
        .and_then(|raw| Uuid::parse_str(raw).ok())
        .unwrap();

    TestUser {
        id,
        email: email.to_string(),
        password: password.to_string(),
        cookie: signin.session_cookie().unwrap(),
    }
}

/// Create a test user with a unique email
pub async fn create_unique_test_user(app: &TestApp) -> TestUser {
    let email = format!("test_{}@example.com", Uuid::new_v4().simple());
    create_test_user(app, &email, TEST_PASSWORD).await
}

/// A session cookie signed with the test secret, issued at `issued_at`
pub fn cookie_issued_at(user_id: Uuid, issued_at: DateTime<Utc>) -> String {
    let token = TokenCodec::new(TEST_JWT_SECRET)
        .issue_at(user_id, issued_at)
        .unwrap();
    format!("jwt={}", token)
}

/// Change one character in the middle of the signature
pub fn tamper_cookie(cookie: &str) -> String {
    let (head, signature) = cookie.rsplit_once('.').unwrap();
    let mut chars: Vec<char> = signature.chars().collect();
    let middle = chars.len() / 2;
    chars[middle] = if chars[middle] == 'A' { 'B' } else { 'A' };
    format!("{}.{}", head, chars.into_iter().collect::<String>())
}
