/**
 * Session Tokens
 *
 * This module signs and verifies the JWT carried in the session cookie.
 * The token binds a user id (`sub`) to an absolute expiry seven days after
 * issuance. Nothing else in the token is trusted.
 *
 * The signing secret is handed to `TokenCodec::new` by the server
 * configuration; it is never read from the environment here.
 */

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::error::{AuthError, BackendError};

/// Token lifetime, matching the session cookie max-age
pub const TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Signs and verifies session tokens with a single HS256 secret
#[derive(Clone)]
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCodec").finish_non_exhaustive()
    }
}

impl TokenCodec {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Create a token for `user_id`, valid for seven days from now
    pub fn issue(&self, user_id: Uuid) -> Result<String, BackendError> {
        self.issue_at(user_id, Utc::now())
    }

    /// Create a token as if it had been issued at `issued_at`
    pub fn issue_at(&self, user_id: Uuid, issued_at: DateTime<Utc>) -> Result<String, BackendError> {
        let expires_at = issued_at + Duration::seconds(TOKEN_TTL_SECS);
        let claims = Claims {
            sub: user_id.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    /// Verify signature and expiry, returning the embedded user id
    pub fn verify(&self, token: &str) -> Result<Uuid, AuthError> {
        let token_data = decode::<Claims>(token, &self.decoding, &self.validation).map_err(|e| {
            tracing::warn!("Invalid token: {:?}", e.kind());
            AuthError::InvalidToken
        })?;

        Uuid::parse_str(&token_data.claims.sub).map_err(|e| {
            tracing::warn!("Invalid user ID in token: {:?}", e);
            AuthError::InvalidToken
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SECRET: &str = "unit-test-secret";

    #[test]
    fn test_issue_and_verify() {
        let codec = TokenCodec::new(SECRET);
        let user_id = Uuid::new_v4();
        let token = codec.issue(user_id).unwrap();

        assert!(!token.is_empty());
        assert_eq!(codec.verify(&token), Ok(user_id));
    }

    #[test]
    fn test_token_expires_after_seven_days() {
        let codec = TokenCodec::new(SECRET);
        let user_id = Uuid::new_v4();

        let stale = codec.issue_at(user_id, Utc::now() - Duration::days(8)).unwrap();
        assert_eq!(codec.verify(&stale), Err(AuthError::InvalidToken));

        let aging = codec.issue_at(user_id, Utc::now() - Duration::days(6)).unwrap();
        assert_eq!(codec.verify(&aging), Ok(user_id));
    }

    #[test]
    fn test_claims_carry_seven_day_window() {
        let codec = TokenCodec::new(SECRET);
        let token = codec.issue(Uuid::new_v4()).unwrap();

        let data = decode::<Claims>(&token, &codec.decoding, &codec.validation).unwrap();
        assert_eq!(data.claims.exp - data.claims.iat, TOKEN_TTL_SECS);
    }

    #[test]
    fn test_verify_rejects_other_secret() {
        let token = TokenCodec::new("other-secret").issue(Uuid::new_v4()).unwrap();
        let codec = TokenCodec::new(SECRET);
        assert_eq!(codec.verify(&token), Err(AuthError::InvalidToken));
    }

    #[test]
    fn test_verify_rejects_swapped_payload() {
        let codec = TokenCodec::new(SECRET);
        let victim = codec.issue(Uuid::new_v4()).unwrap();
        let attacker = codec.issue(Uuid::new_v4()).unwrap();

        // Attacker's payload under the victim's signature
        let victim_parts: Vec<&str> = victim.split('.').collect();
        let attacker_parts: Vec<&str> = attacker.split('.').collect();
        let forged = format!("{}.{}.{}", victim_parts[0], attacker_parts[1], victim_parts[2]);

        assert_eq!(codec.verify(&forged), Err(AuthError::InvalidToken));
    }

    #[test]
    fn test_verify_invalid_token() {
        let codec = TokenCodec::new(SECRET);
        assert_eq!(codec.verify("invalid.token.here"), Err(AuthError::InvalidToken));
        assert_eq!(codec.verify(""), Err(AuthError::InvalidToken));
    }

    #[test]
    fn test_verify_rejects_non_uuid_subject() {
        let codec = TokenCodec::new(SECRET);
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "not-a-user-id".to_string(),
            iat: now,
            exp: now + 60,
        };
        let token = encode(&Header::default(), &claims, &codec.encoding).unwrap();
        assert_eq!(codec.verify(&token), Err(AuthError::InvalidToken));
    }

    proptest! {
        #[test]
        fn prop_verify_returns_issued_identity(bytes in any::<[u8; 16]>(), age_secs in 0i64..(TOKEN_TTL_SECS - 60)) {
            let codec = TokenCodec::new(SECRET);
            let user_id = Uuid::from_bytes(bytes);
            let token = codec.issue_at(user_id, Utc::now() - Duration::seconds(age_secs)).unwrap();
            prop_assert_eq!(codec.verify(&token), Ok(user_id));
        }
    }
}
