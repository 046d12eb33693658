use async_trait::async_trait;

use crate::auth::application::domain::entities::CurrentUser;
use crate::course::application::domain::CourseTree;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListVisibleCoursesError {
    #[error("Query error: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListVisibleCoursesUseCase: Send + Sync {
    async fn execute(&self, user: &CurrentUser)
        -> Result<Vec<CourseTree>, ListVisibleCoursesError>;
}
