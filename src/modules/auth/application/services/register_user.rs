use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::UserRole,
    ports::{
        incoming::use_cases::{RegisterUserCommand, RegisterUserError, RegisterUserUseCase},
        outgoing::{CreateUserData, PasswordHasher, UserQuery, UserRepository, UserRepositoryError, UserResult},
    },
};
use crate::group::application::ports::outgoing::GroupQuery;

pub struct RegisterUserService<Q, R, G>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    G: GroupQuery + Send + Sync,
{
    query: Q,
    repository: R,
    groups: G,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R, G> RegisterUserService<Q, R, G>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    G: GroupQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        groups: G,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            groups,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R, G> RegisterUserUseCase for RegisterUserService<Q, R, G>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    G: GroupQuery + Send + Sync,
{
    async fn execute(&self, command: RegisterUserCommand) -> Result<UserResult, RegisterUserError> {
        let group_id = match command.group_code() {
            Some(code) => {
                let group = self
                    .groups
                    .find_by_code(code)
                    .await
                    .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?
                    .ok_or(RegisterUserError::InvalidGroupCode)?;
                Some(group.id)
            }
            None => None,
        };

        let existing = self
            .query
            .find_by_email(command.email())
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;

        if existing.is_some() {
            return Err(RegisterUserError::EmailAlreadyExists);
        }

        let password_hash = self
            .password_hasher
            .hash_password(command.password())
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        let data = CreateUserData {
            email: command.email().to_string(),
            name: command.name().to_string(),
            password_hash,
            role: UserRole::User,
            group_id,
        };

        self.repository.create_user(data).await.map_err(|e| match e {
            UserRepositoryError::EmailAlreadyExists => RegisterUserError::EmailAlreadyExists,
            // Group deleted between lookup and insert
            UserRepositoryError::GroupNotFound => RegisterUserError::InvalidGroupCode,
            other => RegisterUserError::RepositoryError(other.to_string()),
        })
    }
}
