use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::{domain::entities::UserId, ports::outgoing::UserResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum AssignUserGroupError {
    #[error("User not found")]
    UserNotFound,

    #[error("Group not found")]
    GroupNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Moves a user into a group, or out of any group with `None`.
#[async_trait]
pub trait AssignUserGroupUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        group_id: Option<Uuid>,
    ) -> Result<UserResult, AssignUserGroupError>;
}
