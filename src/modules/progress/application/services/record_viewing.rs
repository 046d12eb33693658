use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::auth::application::domain::entities::CurrentUser;
use crate::course::application::domain::AccessDecision;
use crate::course::application::helpers::CourseAccessGuard;
use crate::course::application::ports::outgoing::CatalogQuery;
use crate::progress::application::domain::ViewingLog;
use crate::progress::application::ports::{
    incoming::use_cases::{RecordViewingCommand, RecordViewingError, RecordViewingUseCase},
    outgoing::{ViewingEvent, ViewingLogRepository, ViewingLogRepositoryError},
};

/// Records a viewing event after checking the caller can see the video's
/// course.
pub struct RecordViewingService<L>
where
    L: ViewingLogRepository + Send + Sync,
{
    logs: L,
    catalog: Arc<dyn CatalogQuery + Send + Sync>,
    guard: CourseAccessGuard,
}

impl<L> RecordViewingService<L>
where
    L: ViewingLogRepository + Send + Sync,
{
    pub fn new(logs: L, catalog: Arc<dyn CatalogQuery + Send + Sync>) -> Self {
        Self {
            logs,
            guard: CourseAccessGuard::new(catalog.clone()),
            catalog,
        }
    }
}

#[async_trait]
impl<L> RecordViewingUseCase for RecordViewingService<L>
where
    L: ViewingLogRepository + Send + Sync,
{
    async fn execute(
        &self,
        user: &CurrentUser,
        command: RecordViewingCommand,
    ) -> Result<ViewingLog, RecordViewingError> {
        let course_id = self
            .catalog
            .find_video_course(command.video_id())
            .await
            .map_err(|e| RecordViewingError::RepositoryError(e.to_string()))?
            .ok_or(RecordViewingError::VideoNotFound)?;

        let decision = self
            .guard
            .authorize(user, course_id)
            .await
            .map_err(|e| RecordViewingError::RepositoryError(e.to_string()))?;

        if let AccessDecision::Deny(reason) = decision {
            return Err(RecordViewingError::Denied(reason));
        }

        let event = ViewingEvent {
            user_id: user.id.value(),
            video_id: command.video_id(),
            watched_seconds: command.watched_seconds(),
            is_completed: command.is_completed(),
            watched_at: Utc::now(),
        };

        let log = self.logs.upsert(event).await.map_err(|e| match e {
            ViewingLogRepositoryError::VideoNotFound => RecordViewingError::VideoNotFound,
            other => RecordViewingError::RepositoryError(other.to_string()),
        })?;

        tracing::debug!(
            user_id = %log.user_id,
            video_id = %log.video_id,
            watched_seconds = log.watched_seconds,
            is_completed = log.is_completed,
            "Viewing event recorded"
        );

        Ok(log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    use crate::course::application::domain::DenyReason;
    use crate::tests::support::lms_fixtures::LmsFixture;

    fn record(video_id: Uuid, seconds: i32, completed: bool) -> RecordViewingCommand {
        RecordViewingCommand::new(video_id, seconds, completed).unwrap()
    }

    #[tokio::test]
    async fn stale_report_does_not_regress_progress() {
        let fixture = LmsFixture::standard();
        let store = fixture.progress_store();
        let service = RecordViewingService::new(store.clone(), Arc::new(fixture.catalog()));
        let member = fixture.member.to_current_user();
        let video = fixture.video_ids(fixture.course_a)[0];

        service.execute(&member, record(video, 540, true)).await.unwrap();
        let merged = service.execute(&member, record(video, 10, false)).await.unwrap();

        assert_eq!(merged.watched_seconds, 540);
        assert!(merged.is_completed);
        assert_eq!(store.logs().len(), 1);
    }

    #[tokio::test]
    async fn larger_report_moves_progress_forward() {
        let fixture = LmsFixture::standard();
        let service =
            RecordViewingService::new(fixture.progress_store(), Arc::new(fixture.catalog()));
        let member = fixture.member.to_current_user();
        let video = fixture.video_ids(fixture.course_a)[1];

        service.execute(&member, record(video, 30, false)).await.unwrap();
        let merged = service.execute(&member, record(video, 60, false)).await.unwrap();

        assert_eq!(merged.watched_seconds, 60);
        assert!(!merged.is_completed);
    }

    #[tokio::test]
    async fn write_for_ungranted_course_is_denied() {
        let fixture = LmsFixture::standard();
        let store = fixture.progress_store();
        let service = RecordViewingService::new(store.clone(), Arc::new(fixture.catalog()));
        let member = fixture.member.to_current_user();
        let video = fixture.video_ids(fixture.course_b)[0];

        let result = service.execute(&member, record(video, 30, false)).await;

        assert!(matches!(
            result,
            Err(RecordViewingError::Denied(DenyReason::NoGroupGrant))
        ));
        assert!(store.logs().is_empty());
    }

    #[tokio::test]
    async fn unknown_video_is_not_found() {
        let fixture = LmsFixture::standard();
        let service =
            RecordViewingService::new(fixture.progress_store(), Arc::new(fixture.catalog()));

        let result = service
            .execute(&fixture.admin.to_current_user(), record(Uuid::new_v4(), 5, false))
            .await;

        assert!(matches!(result, Err(RecordViewingError::VideoNotFound)));
    }

    #[tokio::test]
    async fn admin_may_log_any_video() {
        let fixture = LmsFixture::standard();
        let service =
            RecordViewingService::new(fixture.progress_store(), Arc::new(fixture.catalog()));
        let video = fixture.video_ids(fixture.course_b)[0];

        let log = service
            .execute(&fixture.admin.to_current_user(), record(video, 5, false))
            .await
            .unwrap();

        assert_eq!(log.user_id, fixture.admin.id);
    }
}
