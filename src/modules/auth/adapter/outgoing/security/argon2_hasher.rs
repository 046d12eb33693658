use argon2::{
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use rand_core::OsRng;
use std::env;

use crate::auth::application::ports::outgoing::password_hasher::{
    HashError, PasswordHasher as HasherTrait,
};
use crate::shared::config::{parse_or, ConfigError};

const DEFAULT_MEMORY_KIB: u32 = 4 * 1024;
const DEFAULT_ITERATIONS: u32 = 3;
const DEFAULT_PARALLELISM: u32 = 1;

#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Argon2Hasher {
    pub fn new() -> Self {
        // Small-server profile: 4MB memory, 3 iterations, 1 lane
        let params = Params::new(DEFAULT_MEMORY_KIB, DEFAULT_ITERATIONS, DEFAULT_PARALLELISM, None)
            .unwrap_or_default();

        Self { params }
    }

    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, ConfigError> {
        let params = Params::new(memory_kib, iterations, parallelism, None).map_err(|e| {
            ConfigError::Invalid {
                key: "ARGON2_MEMORY_KIB",
                reason: e.to_string(),
            }
        })?;

        Ok(Self { params })
    }

    /// `ARGON2_MEMORY_KIB`, `ARGON2_ITERATIONS`, `ARGON2_PARALLELISM`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let memory_kib = parse_or(
            "ARGON2_MEMORY_KIB",
            env::var("ARGON2_MEMORY_KIB").ok(),
            DEFAULT_MEMORY_KIB,
        )?;
        let iterations = parse_or(
            "ARGON2_ITERATIONS",
            env::var("ARGON2_ITERATIONS").ok(),
            DEFAULT_ITERATIONS,
        )?;
        let parallelism = parse_or(
            "ARGON2_PARALLELISM",
            env::var("ARGON2_PARALLELISM").ok(),
            DEFAULT_PARALLELISM,
        )?;

        Self::with_params(memory_kib, iterations, parallelism)
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HasherTrait for Argon2Hasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let params = self.params.clone();

        tokio::task::spawn_blocking(move || {
            let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
            let salt = SaltString::generate(&mut OsRng);

            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|_| HashError::HashFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || {
            let parsed_hash = PasswordHash::new(&hash).map_err(|_| HashError::VerifyFailed)?;

            // Parameters come from the PHC string, not from self.params
            match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
                Ok(_) => Ok(true),
                Err(PasswordHashError::Password) => Ok(false),
                Err(_) => Err(HashError::VerifyFailed),
            }
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}
