use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::auth::application::{
    domain::entities::UserId,
    ports::{
        incoming::use_cases::{
            LoginCommand, LoginError, LoginResult, LoginUserInfo, LoginUserUseCase,
        },
        outgoing::{PasswordHasher, TokenProvider, UserQuery, UserRepository},
    },
};

pub struct LoginUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q, R> LoginUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, R> LoginUserUseCase for LoginUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: LoginCommand) -> Result<LoginResult, LoginError> {
        let user = self
            .query
            .find_by_email(command.email())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let is_valid = self
            .password_hasher
            .verify_password(command.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(LoginError::InvalidCredentials);
        }

        let access_token = self
            .token_provider
            .generate_access_token(user.id, user.role)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        let refresh_token = self
            .token_provider
            .generate_refresh_token(user.id, user.role)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        // The response carries the flag as it was before this login.
        let now = Utc::now();
        self.repository
            .record_login(UserId::from(user.id), now)
            .await
            .map_err(|e| LoginError::RepositoryError(e.to_string()))?;

        if user.is_first_login {
            tracing::info!(user_id = %user.id, "First login");
        }

        Ok(LoginResult {
            access_token,
            refresh_token,
            user: LoginUserInfo {
                id: user.id,
                email: user.email,
                name: user.name,
                role: user.role,
                group_id: user.group_id,
                is_first_login: user.is_first_login,
                last_login_at: now,
            },
        })
    }
}
