use async_trait::async_trait;

use crate::course::application::domain::CurriculumTree;
use crate::course::application::ports::{
    incoming::use_cases::{CreateCurriculumCommand, CreateCurriculumError, CreateCurriculumUseCase},
    outgoing::{CourseRepository, CourseRepositoryError, NewCurriculum},
};

pub struct CreateCurriculumService<R>
where
    R: CourseRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateCurriculumService<R>
where
    R: CourseRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateCurriculumUseCase for CreateCurriculumService<R>
where
    R: CourseRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateCurriculumCommand,
    ) -> Result<CurriculumTree, CreateCurriculumError> {
        let data = NewCurriculum {
            course_id: command.course_id(),
            title: command.title().to_string(),
            description: command.description().cloned(),
        };

        self.repository
            .create_curriculum(data)
            .await
            .map_err(|e| match e {
                CourseRepositoryError::CourseNotFound => CreateCurriculumError::CourseNotFound,
                other => CreateCurriculumError::RepositoryError(other.to_string()),
            })
    }
}
