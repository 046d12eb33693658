use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use super::catalog_video_ids;
use crate::course::application::domain::CatalogScope;
use crate::course::application::ports::outgoing::CatalogQuery;
use crate::group::application::ports::outgoing::GroupQuery;
use crate::progress::application::domain::{
    compute_user_progress, CourseSummary, GroupProgressReport, MemberProgress,
};
use crate::progress::application::ports::{
    incoming::use_cases::{FetchGroupProgressError, FetchGroupProgressUseCase},
    outgoing::ProgressQuery,
};

/// The group's granted courses and each member's progress over them.
///
/// Members come back in name order. Group-level averages are left to the
/// caller.
pub struct FetchGroupProgressService<Q>
where
    Q: ProgressQuery + Send + Sync,
{
    groups: Arc<dyn GroupQuery + Send + Sync>,
    catalog: Arc<dyn CatalogQuery + Send + Sync>,
    progress: Q,
}

impl<Q> FetchGroupProgressService<Q>
where
    Q: ProgressQuery + Send + Sync,
{
    pub fn new(
        groups: Arc<dyn GroupQuery + Send + Sync>,
        catalog: Arc<dyn CatalogQuery + Send + Sync>,
        progress: Q,
    ) -> Self {
        Self {
            groups,
            catalog,
            progress,
        }
    }
}

#[async_trait]
impl<Q> FetchGroupProgressUseCase for FetchGroupProgressService<Q>
where
    Q: ProgressQuery + Send + Sync,
{
    async fn execute(
        &self,
        group_id: Uuid,
    ) -> Result<GroupProgressReport, FetchGroupProgressError> {
        let group = self
            .groups
            .find_by_id(group_id)
            .await
            .map_err(|e| FetchGroupProgressError::QueryFailed(e.to_string()))?
            .ok_or(FetchGroupProgressError::GroupNotFound)?;

        let courses = self
            .catalog
            .list_courses(CatalogScope::Group(group_id))
            .await
            .map_err(|e| FetchGroupProgressError::QueryFailed(e.to_string()))?;
        let video_ids = catalog_video_ids(&courses);

        let members = self
            .progress
            .members_of_group(group_id)
            .await
            .map_err(|e| FetchGroupProgressError::QueryFailed(e.to_string()))?;

        let member_ids: Vec<Uuid> = members.iter().map(|m| m.id).collect();
        let logs = self
            .progress
            .logs_for_users(&member_ids, &video_ids)
            .await
            .map_err(|e| FetchGroupProgressError::QueryFailed(e.to_string()))?;

        let members = members
            .into_iter()
            .map(|user| MemberProgress {
                progress: compute_user_progress(user.id, video_ids.iter().copied(), &logs),
                user,
            })
            .collect();

        let courses = courses
            .iter()
            .map(|course| CourseSummary {
                id: course.id,
                title: course.title.clone(),
                video_count: course.video_count() as u32,
            })
            .collect();

        Ok(GroupProgressReport {
            group,
            courses,
            members,
        })
    }
}
