use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::ports::{
    incoming::use_cases::{CreateUserCommand, CreateUserError, CreateUserUseCase},
    outgoing::{CreateUserData, PasswordHasher, UserRepository, UserRepositoryError, UserResult},
};

pub struct CreateUserService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<R> CreateUserService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R, password_hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<R> CreateUserUseCase for CreateUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: CreateUserCommand) -> Result<UserResult, CreateUserError> {
        let password_hash = self
            .password_hasher
            .hash_password(command.password())
            .await
            .map_err(|e| CreateUserError::HashingFailed(e.to_string()))?;

        let data = CreateUserData {
            email: command.email().to_string(),
            name: command.name().to_string(),
            password_hash,
            role: command.role(),
            group_id: command.group_id(),
        };

        self.repository.create_user(data).await.map_err(|e| match e {
            UserRepositoryError::EmailAlreadyExists => CreateUserError::EmailAlreadyExists,
            UserRepositoryError::GroupNotFound => CreateUserError::GroupNotFound,
            other => CreateUserError::RepositoryError(other.to_string()),
        })
    }
}
