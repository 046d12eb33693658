use async_trait::async_trait;
use uuid::Uuid;

use crate::course::application::domain::{CourseTree, CurriculumTree, VideoItem};

#[derive(Debug, Clone)]
pub struct NewCourse {
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewCurriculum {
    pub course_id: Uuid,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewVideo {
    pub curriculum_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub video_url: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CourseRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Course not found")]
    CourseNotFound,

    #[error("Curriculum not found")]
    CurriculumNotFound,
}

/// Write side of the catalog. Deletes are hard deletes; children and
/// viewing logs are removed by the database cascade.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn create_course(&self, data: NewCourse) -> Result<CourseTree, CourseRepositoryError>;

    async fn create_curriculum(
        &self,
        data: NewCurriculum,
    ) -> Result<CurriculumTree, CourseRepositoryError>;

    async fn create_video(&self, data: NewVideo) -> Result<VideoItem, CourseRepositoryError>;

    async fn delete_course(&self, course_id: Uuid) -> Result<(), CourseRepositoryError>;

    async fn delete_curriculum(&self, curriculum_id: Uuid) -> Result<(), CourseRepositoryError>;
}
