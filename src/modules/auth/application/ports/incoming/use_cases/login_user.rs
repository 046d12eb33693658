use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserRole;

#[derive(Debug, Clone)]
pub struct LoginCommand {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginCommandError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl LoginCommand {
    pub fn new(email: String, password: String) -> Result<Self, LoginCommandError> {
        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Err(LoginCommandError::EmptyEmail);
        }
        if password.is_empty() {
            return Err(LoginCommandError::EmptyPassword);
        }
        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginUserInfo {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub group_id: Option<Uuid>,
    /// Value before this login; clients use it to show onboarding.
    pub is_first_login: bool,
    pub last_login_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResult {
    pub access_token: String,
    pub refresh_token: String,
    pub user: LoginUserInfo,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, command: LoginCommand) -> Result<LoginResult, LoginError>;
}
