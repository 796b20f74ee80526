//! Authentication Module
//!
//! This module handles registration, sign-in and the session lifecycle.
//!
//! # Architecture
//!
//! - **`sessions`** - `TokenCodec`: JWT issuance and verification
//! - **`cookies`** - Setting, clearing and reading the `jwt` cookie
//! - **`password`** - bcrypt hashing on the blocking pool
//! - **`handlers`** - HTTP handlers for `/signup`, `/signin`, `/users/logout`
//!
//! # Authentication Flow
//!
//! 1. **Signup**: email + password → password hashed → user created (201)
//! 2. **Signin**: credentials verified → token issued → `jwt` cookie set (200)
//! 3. **Protected request**: cookie read by the auth gate → token verified →
//!    user id attached to the request
//! 4. **Logout**: cookie cleared (202)
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are HS256 JWTs that expire after 7 days, with no leeway
//! - The cookie is `HttpOnly`, `Secure`, `SameSite=None`
//! - Invalid credentials return 401 (no information leakage)

/// JWT token generation and validation
pub mod sessions;

/// Session cookie handling
pub mod cookies;

/// Password hashing
pub mod password;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{login, logout, signup};
pub use sessions::TokenCodec;
