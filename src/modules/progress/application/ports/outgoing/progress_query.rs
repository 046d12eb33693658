use async_trait::async_trait;
use uuid::Uuid;

use crate::progress::application::domain::{LearnerSummary, ViewingLog};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProgressQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Stored row is invalid: {0}")]
    CorruptRow(String),
}

#[async_trait]
pub trait ProgressQuery: Send + Sync {
    /// Logs of `user_ids` restricted to `video_ids`. Either list being empty
    /// yields no logs.
    async fn logs_for_users(
        &self,
        user_ids: &[Uuid],
        video_ids: &[Uuid],
    ) -> Result<Vec<ViewingLog>, ProgressQueryError>;

    /// Users whose group is `group_id`, ordered by name.
    async fn members_of_group(&self, group_id: Uuid)
        -> Result<Vec<LearnerSummary>, ProgressQueryError>;

    /// Every account, ordered by name.
    async fn all_users(&self) -> Result<Vec<LearnerSummary>, ProgressQueryError>;
}
