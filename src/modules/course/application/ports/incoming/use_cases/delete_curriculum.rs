use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteCurriculumError {
    #[error("Curriculum not found")]
    CurriculumNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteCurriculumUseCase: Send + Sync {
    async fn execute(&self, curriculum_id: Uuid) -> Result<(), DeleteCurriculumError>;
}
