use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::{
    domain::entities::UserId,
    ports::{
        incoming::use_cases::{AssignUserGroupError, AssignUserGroupUseCase},
        outgoing::{UserRepository, UserRepositoryError, UserResult},
    },
};

#[derive(Debug, Clone)]
pub struct AssignUserGroupService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
}

impl<R> AssignUserGroupService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> AssignUserGroupUseCase for AssignUserGroupService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        group_id: Option<Uuid>,
    ) -> Result<UserResult, AssignUserGroupError> {
        let updated = self
            .repository
            .assign_group(user_id, group_id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => AssignUserGroupError::UserNotFound,
                UserRepositoryError::GroupNotFound => AssignUserGroupError::GroupNotFound,
                other => AssignUserGroupError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(user_id = %user_id, group_id = ?group_id, "User group changed");
        Ok(updated)
    }
}
