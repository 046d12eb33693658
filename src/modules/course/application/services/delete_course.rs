use async_trait::async_trait;
use uuid::Uuid;

use crate::course::application::ports::{
    incoming::use_cases::{DeleteCourseError, DeleteCourseUseCase},
    outgoing::{CourseRepository, CourseRepositoryError},
};

pub struct DeleteCourseService<R>
where
    R: CourseRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteCourseService<R>
where
    R: CourseRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteCourseUseCase for DeleteCourseService<R>
where
    R: CourseRepository + Send + Sync,
{
    async fn execute(&self, course_id: Uuid) -> Result<(), DeleteCourseError> {
        self.repository
            .delete_course(course_id)
            .await
            .map_err(|e| match e {
                CourseRepositoryError::CourseNotFound => DeleteCourseError::CourseNotFound,
                other => DeleteCourseError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(%course_id, "Course deleted");
        Ok(())
    }
}
