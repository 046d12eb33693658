use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    #[error("Password hashing failed")]
    HashFailed,

    #[error("Password verification failed")]
    VerifyFailed,

    /// The blocking worker panicked or was cancelled.
    #[error("Hashing worker failed")]
    TaskFailed,
}

/// Password storage used by self-registration, admin account creation and
/// login. Implementations keep CPU-heavy work off the async executor.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// `Ok(false)` for a wrong password; `Err` only when `hash` is unusable.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
