/**
 * Server Configuration
 *
 * This module loads the server configuration from the process environment
 * (after `.env` has been applied by the binary). The result is passed down
 * explicitly; nothing else in the crate reads the environment.
 *
 * # Variables
 *
 * | Variable       | Default                         |
 * |----------------|---------------------------------|
 * | `SERVER_PORT`  | `3000`                          |
 * | `DATABASE_URL` | unset, in-memory store is used  |
 * | `JWT_SECRET`   | development fallback, see below |
 * | `APP_ENV`      | `development`                   |
 * | `CORS_ORIGINS` | the public frontend origins     |
 * | `BCRYPT_COST`  | `10`                            |
 *
 * In production a missing or fallback `JWT_SECRET` aborts startup.
 */

use thiserror::Error;

use crate::backend::auth::password::{BCRYPT_COST_RANGE, DEFAULT_BCRYPT_COST};

pub const DEFAULT_PORT: u16 = 3000;

/// Signing secret used outside production when `JWT_SECRET` is unset
pub const DEVELOPMENT_JWT_SECRET: &str = "dev-secret";

pub const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "https://mestogram.nomoreparties.co",
    "https://mestogram.students.nomoreparties.co",
    "https://localhost:3000",
];

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" | "test" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(ConfigError::InvalidValue {
                key: "APP_ENV",
                value: value.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: Option<String>,
    pub jwt_secret: String,
    pub environment: Environment,
    pub cors_origins: Vec<String>,
    pub bcrypt_cost: u32,
}

impl ServerConfig {
    /// Development configuration with an explicit secret
    pub fn development(jwt_secret: impl Into<String>) -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: None,
            jwt_secret: jwt_secret.into(),
            environment: Environment::Development,
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let environment = match get("APP_ENV") {
            Some(value) => Environment::parse(&value)?,
            None => Environment::Development,
        };

        let port = match get("SERVER_PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                key: "SERVER_PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let jwt_secret = match (get("JWT_SECRET"), environment) {
            (Some(secret), Environment::Production) if secret == DEVELOPMENT_JWT_SECRET => {
                return Err(ConfigError::InvalidValue {
                    key: "JWT_SECRET",
                    value: "<development fallback>".to_string(),
                });
            }
            (Some(secret), _) => secret,
            (None, Environment::Production) => return Err(ConfigError::MissingValue("JWT_SECRET")),
            (None, Environment::Development) => {
                tracing::warn!("JWT_SECRET not set. Using the insecure development secret.");
                DEVELOPMENT_JWT_SECRET.to_string()
            }
        };

        let cors_origins = match get("CORS_ORIGINS") {
            Some(value) => value
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
            None => DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
        };

        let bcrypt_cost = match get("BCRYPT_COST") {
            Some(value) => value
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|cost| BCRYPT_COST_RANGE.contains(cost))
                .ok_or(ConfigError::InvalidValue {
                    key: "BCRYPT_COST",
                    value,
                })?,
            None => DEFAULT_BCRYPT_COST,
        };

        Ok(Self {
            port,
            database_url: get("DATABASE_URL"),
            jwt_secret,
            environment,
            cors_origins,
            bcrypt_cost,
        })
    }
}
