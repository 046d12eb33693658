use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use super::catalog_video_ids;
use crate::course::application::domain::CatalogScope;
use crate::course::application::ports::outgoing::CatalogQuery;
use crate::progress::application::domain::{compute_user_progress, MemberProgress};
use crate::progress::application::ports::{
    incoming::use_cases::{FetchProgressStatsError, FetchProgressStatsUseCase},
    outgoing::ProgressQuery,
};

/// Per-user progress for every account against the full catalog.
pub struct FetchProgressStatsService<Q>
where
    Q: ProgressQuery + Send + Sync,
{
    catalog: Arc<dyn CatalogQuery + Send + Sync>,
    progress: Q,
}

impl<Q> FetchProgressStatsService<Q>
where
    Q: ProgressQuery + Send + Sync,
{
    pub fn new(catalog: Arc<dyn CatalogQuery + Send + Sync>, progress: Q) -> Self {
        Self { catalog, progress }
    }
}

#[async_trait]
impl<Q> FetchProgressStatsUseCase for FetchProgressStatsService<Q>
where
    Q: ProgressQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<MemberProgress>, FetchProgressStatsError> {
        let users = self
            .progress
            .all_users()
            .await
            .map_err(|e| FetchProgressStatsError::QueryFailed(e.to_string()))?;

        let courses = self
            .catalog
            .list_courses(CatalogScope::All)
            .await
            .map_err(|e| FetchProgressStatsError::QueryFailed(e.to_string()))?;
        let video_ids = catalog_video_ids(&courses);

        let user_ids: Vec<Uuid> = users.iter().map(|u| u.id).collect();
        let logs = self
            .progress
            .logs_for_users(&user_ids, &video_ids)
            .await
            .map_err(|e| FetchProgressStatsError::QueryFailed(e.to_string()))?;

        Ok(users
            .into_iter()
            .map(|user| MemberProgress {
                progress: compute_user_progress(user.id, video_ids.iter().copied(), &logs),
                user,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::lms_fixtures::LmsFixture;

    #[tokio::test]
    async fn rates_match_completed_share_of_ten_video_catalog() {
        // 6 + 4 videos across two courses
        let fixture = LmsFixture::build(6, 4);
        let all_videos: Vec<_> = fixture
            .video_ids(fixture.course_a)
            .into_iter()
            .chain(fixture.video_ids(fixture.course_b))
            .collect();
        assert_eq!(all_videos.len(), 10);

        let mut store = fixture.progress_store();
        for video in &all_videos[..6] {
            store = store.with_log(fixture.member.id, *video, 120, true);
        }
        for video in &all_videos[..3] {
            store = store.with_log(fixture.second_member.id, *video, 120, true);
        }
        for video in &all_videos {
            store = store.with_log(fixture.ungrouped.id, *video, 5, false);
        }
        let service = FetchProgressStatsService::new(Arc::new(fixture.catalog()), store);

        let stats = service.execute().await.unwrap();

        let rate_of = |id: Uuid| {
            stats
                .iter()
                .find(|m| m.user.id == id)
                .map(|m| (m.progress.completion_rate, m.progress.watch_rate))
                .unwrap()
        };
        assert_eq!(stats.len(), 4);
        assert_eq!(rate_of(fixture.member.id), (60, 60));
        assert_eq!(rate_of(fixture.second_member.id), (30, 30));
        assert_eq!(rate_of(fixture.ungrouped.id), (0, 100));
        assert_eq!(rate_of(fixture.admin.id), (0, 0));
    }

    #[tokio::test]
    async fn storage_failure_is_reported() {
        let fixture = LmsFixture::standard();
        let service = FetchProgressStatsService::new(
            Arc::new(fixture.catalog()),
            fixture.progress_store().failing("timeout"),
        );

        let result = service.execute().await;

        assert!(matches!(result, Err(FetchProgressStatsError::QueryFailed(_))));
    }
}
