use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RevokeCourseError {
    #[error("Grant not found")]
    GrantNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RevokeCourseUseCase: Send + Sync {
    async fn execute(&self, group_id: Uuid, course_id: Uuid) -> Result<(), RevokeCourseError>;
}
