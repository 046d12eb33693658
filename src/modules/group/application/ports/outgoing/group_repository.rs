use async_trait::async_trait;
use uuid::Uuid;

use super::group_query::GroupView;

#[derive(Debug, Clone)]
pub struct CreateGroupData {
    pub name: String,
    pub code: String,
    pub description: Option<String>,
}

/// Whether a grant call created the row or found it already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantOutcome {
    Created,
    AlreadyGranted,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GroupRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Group code already exists")]
    CodeAlreadyExists,

    #[error("Group not found")]
    GroupNotFound,

    #[error("Course not found")]
    CourseNotFound,

    #[error("Grant not found")]
    GrantNotFound,
}

#[async_trait]
pub trait GroupRepository: Send + Sync {
    async fn create_group(&self, data: CreateGroupData) -> Result<GroupView, GroupRepositoryError>;

    /// Idempotent: granting twice leaves one row.
    async fn grant_course(
        &self,
        group_id: Uuid,
        course_id: Uuid,
    ) -> Result<GrantOutcome, GroupRepositoryError>;

    async fn revoke_course(&self, group_id: Uuid, course_id: Uuid)
        -> Result<(), GroupRepositoryError>;
}
