use async_trait::async_trait;
use uuid::Uuid;

use crate::group::application::ports::{
    incoming::use_cases::{GrantCourseError, GrantCourseUseCase},
    outgoing::{GrantOutcome, GroupRepository, GroupRepositoryError},
};

pub struct GrantCourseService<R>
where
    R: GroupRepository + Send + Sync,
{
    repository: R,
}

impl<R> GrantCourseService<R>
where
    R: GroupRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GrantCourseUseCase for GrantCourseService<R>
where
    R: GroupRepository + Send + Sync,
{
    async fn execute(
        &self,
        group_id: Uuid,
        course_id: Uuid,
    ) -> Result<GrantOutcome, GrantCourseError> {
        let outcome = self
            .repository
            .grant_course(group_id, course_id)
            .await
            .map_err(|e| match e {
                GroupRepositoryError::GroupNotFound => GrantCourseError::GroupNotFound,
                GroupRepositoryError::CourseNotFound => GrantCourseError::CourseNotFound,
                other => GrantCourseError::RepositoryError(other.to_string()),
            })?;

        if outcome == GrantOutcome::Created {
            tracing::info!(%group_id, %course_id, "Course granted to group");
        }

        Ok(outcome)
    }
}
