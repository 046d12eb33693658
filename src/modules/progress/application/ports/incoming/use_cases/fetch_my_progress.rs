use async_trait::async_trait;

use crate::auth::application::domain::entities::CurrentUser;
use crate::progress::application::domain::UserProgress;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchMyProgressError {
    #[error("Query error: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait FetchMyProgressUseCase: Send + Sync {
    async fn execute(&self, user: &CurrentUser) -> Result<UserProgress, FetchMyProgressError>;
}
