//! Common test utilities and helpers
//!
//! - `TestApp`: the full router over an in-memory store, driven with
//!   `tower::ServiceExt::oneshot`
//! - Authentication helpers (sign up, sign in, forged cookies)
//! - Assertion macros for API responses
//! - PostgreSQL fixtures, active only when `DATABASE_URL` is set

#![allow(dead_code)]

pub mod assertions;
pub mod auth_helpers;
pub mod database;

pub use auth_helpers::*;

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{
        header::{CONTENT_TYPE, COOKIE, SET_COOKIE},
        HeaderMap, Method, Request, StatusCode,
    },
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use mesto::backend::server::{create_app_with_store, ServerConfig, SharedStore};
use mesto::backend::store::MemoryStore;

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// The application under test together with its store
pub struct TestApp {
    router: Router,
    pub store: SharedStore,
}

/// A fully buffered response
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    /// Raw `Set-Cookie` header, if any
    pub fn set_cookie(&self) -> Option<&str> {
        self.headers.get(SET_COOKIE).and_then(|v| v.to_str().ok())
    }

    /// The `jwt=<token>` pair from `Set-Cookie`, ready for a `Cookie` header
    pub fn session_cookie(&self) -> Option<String> {
        self.set_cookie()
            .and_then(|value| value.split(';').next())
            .map(|pair| pair.trim().to_string())
    }
}

impl TestApp {
    pub fn new() -> Self {
        let store: SharedStore = Arc::new(MemoryStore::new());
        let mut config = ServerConfig::development(TEST_JWT_SECRET);
        config.bcrypt_cost = 4;

        Self {
            router: create_app_with_store(store.clone(), &config),
            store,
        }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }

        let request = match body {
            Some(json) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> TestResponse {
        self.request(Method::GET, uri, None, cookie).await
    }

    pub async fn post(&self, uri: &str, body: Value, cookie: Option<&str>) -> TestResponse {
        self.request(Method::POST, uri, Some(body), cookie).await
    }

    pub async fn patch(&self, uri: &str, body: Value, cookie: Option<&str>) -> TestResponse {
        self.request(Method::PATCH, uri, Some(body), cookie).await
    }

    pub async fn put(&self, uri: &str, cookie: Option<&str>) -> TestResponse {
        self.request(Method::PUT, uri, None, cookie).await
    }

    pub async fn delete(&self, uri: &str, cookie: Option<&str>) -> TestResponse {
        self.request(Method::DELETE, uri, None, cookie).await
    }
}
