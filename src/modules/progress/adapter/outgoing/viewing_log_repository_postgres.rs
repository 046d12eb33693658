use async_trait::async_trait;
use sea_orm::{DatabaseBackend, DatabaseConnection, EntityTrait, Statement};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::viewing_logs::Entity as ViewingLogEntity;
use crate::progress::application::domain::ViewingLog;
use crate::progress::application::ports::outgoing::{
    ViewingEvent, ViewingLogRepository, ViewingLogRepositoryError,
};
use crate::shared::db::{constraint_violation, ConstraintViolation};

// Single statement so concurrent saves for the same (user, video) cannot lose
// an update.
const UPSERT_SQL: &str = r#"
INSERT INTO viewing_logs (id, user_id, video_id, watched_seconds, is_completed, last_watched_at)
VALUES ($1, $2, $3, $4, $5, $6)
ON CONFLICT (user_id, video_id) DO UPDATE SET
    watched_seconds = GREATEST(viewing_logs.watched_seconds, EXCLUDED.watched_seconds),
    is_completed = viewing_logs.is_completed OR EXCLUDED.is_completed,
    last_watched_at = EXCLUDED.last_watched_at
RETURNING id, user_id, video_id, watched_seconds, is_completed, last_watched_at, created_at
"#;

#[derive(Debug, Clone)]
pub struct ViewingLogRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ViewingLogRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ViewingLogRepository for ViewingLogRepositoryPostgres {
    async fn upsert(&self, event: ViewingEvent) -> Result<ViewingLog, ViewingLogRepositoryError> {
        let statement = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            UPSERT_SQL,
            [
                Uuid::new_v4().into(),
                event.user_id.into(),
                event.video_id.into(),
                event.watched_seconds.into(),
                event.is_completed.into(),
                event.watched_at.fixed_offset().into(),
            ],
        );

        let row = ViewingLogEntity::find()
            .from_raw_sql(statement)
            .one(&*self.db)
            .await
            .map_err(|e| match constraint_violation(&e) {
                // The video was deleted between the access check and the write
                Some(ConstraintViolation::ForeignKey) => ViewingLogRepositoryError::VideoNotFound,
                _ => ViewingLogRepositoryError::DatabaseError(e.to_string()),
            })?;

        row.map(|model| model.to_log()).ok_or_else(|| {
            ViewingLogRepositoryError::DatabaseError("upsert returned no row".to_string())
        })
    }
}
