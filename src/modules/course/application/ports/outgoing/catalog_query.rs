use async_trait::async_trait;
use uuid::Uuid;

use crate::course::application::domain::{CatalogScope, CourseTree};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side of the catalog. Courses, curriculums and videos come back in
/// creation order.
#[async_trait]
pub trait CatalogQuery: Send + Sync {
    /// Course trees inside `scope`. `CatalogScope::Empty` yields an empty
    /// list without touching storage.
    async fn list_courses(&self, scope: CatalogScope) -> Result<Vec<CourseTree>, CatalogQueryError>;

    async fn find_course(&self, course_id: Uuid) -> Result<Option<CourseTree>, CatalogQueryError>;

    async fn group_has_course(
        &self,
        group_id: Uuid,
        course_id: Uuid,
    ) -> Result<bool, CatalogQueryError>;

    /// The course owning `video_id`, if the video exists.
    async fn find_video_course(&self, video_id: Uuid) -> Result<Option<Uuid>, CatalogQueryError>;
}
