use async_trait::async_trait;
use uuid::Uuid;

use crate::course::application::ports::{
    incoming::use_cases::{DeleteCurriculumError, DeleteCurriculumUseCase},
    outgoing::{CourseRepository, CourseRepositoryError},
};

pub struct DeleteCurriculumService<R>
where
    R: CourseRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteCurriculumService<R>
where
    R: CourseRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteCurriculumUseCase for DeleteCurriculumService<R>
where
    R: CourseRepository + Send + Sync,
{
    async fn execute(&self, curriculum_id: Uuid) -> Result<(), DeleteCurriculumError> {
        self.repository
            .delete_curriculum(curriculum_id)
            .await
            .map_err(|e| match e {
                CourseRepositoryError::CurriculumNotFound => {
                    DeleteCurriculumError::CurriculumNotFound
                }
                other => DeleteCurriculumError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(%curriculum_id, "Curriculum deleted");
        Ok(())
    }
}
