use async_trait::async_trait;

use crate::course::application::domain::CourseTree;
use crate::course::application::ports::{
    incoming::use_cases::{CreateCourseCommand, CreateCourseError, CreateCourseUseCase},
    outgoing::{CourseRepository, NewCourse},
};

pub struct CreateCourseService<R>
where
    R: CourseRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateCourseService<R>
where
    R: CourseRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateCourseUseCase for CreateCourseService<R>
where
    R: CourseRepository + Send + Sync,
{
    async fn execute(&self, command: CreateCourseCommand) -> Result<CourseTree, CreateCourseError> {
        let data = NewCourse {
            title: command.title().to_string(),
            description: command.description().cloned(),
            thumbnail_url: command.thumbnail_url().cloned(),
        };

        let course = self
            .repository
            .create_course(data)
            .await
            .map_err(|e| CreateCourseError::RepositoryError(e.to_string()))?;

        tracing::info!(course_id = %course.id, "Course created");
        Ok(course)
    }
}
