use async_trait::async_trait;

use crate::group::application::ports::outgoing::GroupView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListGroupsError {
    #[error("Query error: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListGroupsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<GroupView>, ListGroupsError>;
}
