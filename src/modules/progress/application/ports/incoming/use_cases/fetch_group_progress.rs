use async_trait::async_trait;
use uuid::Uuid;

use crate::progress::application::domain::GroupProgressReport;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchGroupProgressError {
    #[error("Group not found")]
    GroupNotFound,

    #[error("Query error: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait FetchGroupProgressUseCase: Send + Sync {
    async fn execute(&self, group_id: Uuid)
        -> Result<GroupProgressReport, FetchGroupProgressError>;
}
