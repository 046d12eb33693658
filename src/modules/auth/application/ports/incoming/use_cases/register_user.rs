use async_trait::async_trait;

use super::user_input::{check_password, normalize_email, normalize_name, UserInputError};
use crate::auth::application::ports::outgoing::UserResult;

//
// ──────────────────────────────────────────────────────────
// Register User Command
// ──────────────────────────────────────────────────────────
//

/// Self-registration. A group code, when present, places the new learner in
/// that group.
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    email: String,
    name: String,
    password: String,
    group_code: Option<String>,
}

impl RegisterUserCommand {
    pub fn new(
        email: String,
        name: String,
        password: String,
        group_code: Option<String>,
    ) -> Result<Self, UserInputError> {
        let email = normalize_email(&email)?;
        let name = normalize_name(&name)?;
        check_password(&password)?;

        let group_code = group_code
            .map(|code| code.trim().to_uppercase())
            .filter(|code| !code.is_empty());

        Ok(Self {
            email,
            name,
            password,
            group_code,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn group_code(&self) -> Option<&str> {
        self.group_code.as_deref()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Group code does not match any group")]
    InvalidGroupCode,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, command: RegisterUserCommand) -> Result<UserResult, RegisterUserError>;
}
