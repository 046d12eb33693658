use std::env;

use crate::shared::config::{parse_or, ConfigError};

const MIN_SECRET_LENGTH: usize = 32;
const MAX_ACCESS_EXPIRY: i64 = 86_400;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64,  // seconds
    pub refresh_token_expiry: i64, // seconds
}

impl JwtConfig {
    /// Expects the dotenv files to be loaded already (see `AppConfig::from_env`).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = lookup("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;

        // HS256 needs at least 32 bytes of key material
        if secret_key.len() < MIN_SECRET_LENGTH {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: format!("must be at least {} characters long", MIN_SECRET_LENGTH),
            });
        }

        let access_token_expiry = parse_or("JWT_ACCESS_EXPIRY", lookup("JWT_ACCESS_EXPIRY"), 1800i64)?;
        let refresh_token_expiry =
            parse_or("JWT_REFRESH_EXPIRY", lookup("JWT_REFRESH_EXPIRY"), 604_800i64)?;

        if access_token_expiry <= 0 || access_token_expiry > MAX_ACCESS_EXPIRY {
            return Err(ConfigError::Invalid {
                key: "JWT_ACCESS_EXPIRY",
                reason: "must be between 1 and 86400 seconds".to_string(),
            });
        }

        if refresh_token_expiry <= access_token_expiry {
            return Err(ConfigError::Invalid {
                key: "JWT_REFRESH_EXPIRY",
                reason: "must be greater than JWT_ACCESS_EXPIRY".to_string(),
            });
        }

        let issuer = lookup("JWT_ISSUER").unwrap_or_else(|| "lms_backend".to_string());

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
            refresh_token_expiry,
        })
    }
}
