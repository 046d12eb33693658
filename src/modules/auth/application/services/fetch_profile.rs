use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::UserId,
    ports::{
        incoming::use_cases::{FetchProfileError, FetchProfileUseCase, UserProfile},
        outgoing::UserQuery,
    },
};

#[derive(Debug, Clone)]
pub struct FetchProfileService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> FetchProfileService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> FetchProfileUseCase for FetchProfileService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<UserProfile, FetchProfileError> {
        let user = self
            .query
            .find_by_id(user_id)
            .await
            .map_err(|e| FetchProfileError::QueryFailed(e.to_string()))?
            .ok_or(FetchProfileError::UserNotFound)?;

        Ok(UserProfile {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
            group_id: user.group_id,
            is_first_login: user.is_first_login,
            last_login_at: user.last_login_at,
            created_at: user.created_at,
        })
    }
}
