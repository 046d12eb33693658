use async_trait::async_trait;

use crate::progress::application::domain::MemberProgress;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchProgressStatsError {
    #[error("Query error: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait FetchProgressStatsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<MemberProgress>, FetchProgressStatsError>;
}
