use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::progress::application::domain::ViewingLog;

#[derive(Debug, Clone)]
pub struct ViewingEvent {
    pub user_id: Uuid,
    pub video_id: Uuid,
    pub watched_seconds: i32,
    pub is_completed: bool,
    pub watched_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ViewingLogRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Video not found")]
    VideoNotFound,
}

#[async_trait]
pub trait ViewingLogRepository: Send + Sync {
    /// Inserts or merges the (user, video) row in one atomic statement:
    /// `watched_seconds` keeps the maximum, `is_completed` is OR'd and
    /// `last_watched_at` takes the event time.
    async fn upsert(&self, event: ViewingEvent) -> Result<ViewingLog, ViewingLogRepositoryError>;
}
