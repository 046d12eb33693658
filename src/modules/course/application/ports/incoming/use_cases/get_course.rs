use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::CurrentUser;
use crate::course::application::domain::{CourseTree, DenyReason};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCourseError {
    #[error("Access denied: {0}")]
    Denied(DenyReason),

    #[error("Course not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetCourseUseCase: Send + Sync {
    async fn execute(&self, user: &CurrentUser, course_id: Uuid)
        -> Result<CourseTree, GetCourseError>;
}
