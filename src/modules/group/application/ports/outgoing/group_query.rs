use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupView {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GroupQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait GroupQuery: Send + Sync {
    async fn find_by_id(&self, group_id: Uuid) -> Result<Option<GroupView>, GroupQueryError>;

    /// `code` is matched exactly; callers normalise it first.
    async fn find_by_code(&self, code: &str) -> Result<Option<GroupView>, GroupQueryError>;

    /// Ordered by name.
    async fn list_groups(&self) -> Result<Vec<GroupView>, GroupQueryError>;
}
