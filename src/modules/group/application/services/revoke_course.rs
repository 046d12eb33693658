use async_trait::async_trait;
use uuid::Uuid;

use crate::group::application::ports::{
    incoming::use_cases::{RevokeCourseError, RevokeCourseUseCase},
    outgoing::{GroupRepository, GroupRepositoryError},
};

pub struct RevokeCourseService<R>
where
    R: GroupRepository + Send + Sync,
{
    repository: R,
}

impl<R> RevokeCourseService<R>
where
    R: GroupRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> RevokeCourseUseCase for RevokeCourseService<R>
where
    R: GroupRepository + Send + Sync,
{
    async fn execute(&self, group_id: Uuid, course_id: Uuid) -> Result<(), RevokeCourseError> {
        self.repository
            .revoke_course(group_id, course_id)
            .await
            .map_err(|e| match e {
                GroupRepositoryError::GrantNotFound => RevokeCourseError::GrantNotFound,
                other => RevokeCourseError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(%group_id, %course_id, "Course revoked from group");
        Ok(())
    }
}
