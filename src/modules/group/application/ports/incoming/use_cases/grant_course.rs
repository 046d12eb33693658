use async_trait::async_trait;
use uuid::Uuid;

use crate::group::application::ports::outgoing::GrantOutcome;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GrantCourseError {
    #[error("Group not found")]
    GroupNotFound,

    #[error("Course not found")]
    CourseNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GrantCourseUseCase: Send + Sync {
    async fn execute(&self, group_id: Uuid, course_id: Uuid)
        -> Result<GrantOutcome, GrantCourseError>;
}
