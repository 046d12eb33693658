use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::CurrentUser;
use crate::course::application::domain::DenyReason;
use crate::progress::application::domain::ViewingLog;

#[derive(Debug, Clone)]
pub struct RecordViewingCommand {
    video_id: Uuid,
    watched_seconds: i32,
    is_completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordViewingCommandError {
    #[error("watchedSeconds must not be negative")]
    NegativeWatchedSeconds,
}

impl RecordViewingCommand {
    pub fn new(
        video_id: Uuid,
        watched_seconds: i32,
        is_completed: bool,
    ) -> Result<Self, RecordViewingCommandError> {
        if watched_seconds < 0 {
            return Err(RecordViewingCommandError::NegativeWatchedSeconds);
        }

        Ok(Self {
            video_id,
            watched_seconds,
            is_completed,
        })
    }

    pub fn video_id(&self) -> Uuid {
        self.video_id
    }

    pub fn watched_seconds(&self) -> i32 {
        self.watched_seconds
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RecordViewingError {
    #[error("Video not found")]
    VideoNotFound,

    #[error("Access denied: {0}")]
    Denied(DenyReason),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RecordViewingUseCase: Send + Sync {
    async fn execute(
        &self,
        user: &CurrentUser,
        command: RecordViewingCommand,
    ) -> Result<ViewingLog, RecordViewingError>;
}
