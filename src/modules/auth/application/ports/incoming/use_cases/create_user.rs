use async_trait::async_trait;
use uuid::Uuid;

use super::user_input::{check_password, normalize_email, normalize_name, UserInputError};
use crate::auth::application::{domain::entities::UserRole, ports::outgoing::UserResult};

/// Account creation by an administrator, with an explicit role and an
/// optional group.
#[derive(Debug, Clone)]
pub struct CreateUserCommand {
    email: String,
    name: String,
    password: String,
    role: UserRole,
    group_id: Option<Uuid>,
}

impl CreateUserCommand {
    pub fn new(
        email: String,
        name: String,
        password: String,
        role: UserRole,
        group_id: Option<Uuid>,
    ) -> Result<Self, UserInputError> {
        let email = normalize_email(&email)?;
        let name = normalize_name(&name)?;
        check_password(&password)?;

        Ok(Self {
            email,
            name,
            password,
            role,
            group_id,
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

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn group_id(&self) -> Option<Uuid> {
        self.group_id
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateUserError {
    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Group not found")]
    GroupNotFound,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateUserUseCase: Send + Sync {
    async fn execute(&self, command: CreateUserCommand) -> Result<UserResult, CreateUserError>;
}
