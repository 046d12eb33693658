// application/ports/outgoing/user_query.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::{CurrentUser, UserId, UserRole};

/// Result DTO for user queries
#[derive(Debug, Clone)]
pub struct UserQueryResult {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub role: UserRole,
    pub group_id: Option<Uuid>,
    pub is_first_login: bool,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl UserQueryResult {
    pub fn to_current_user(&self) -> CurrentUser {
        CurrentUser {
            id: UserId::from(self.id),
            role: self.role,
            group_id: self.group_id,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Stored user row is invalid: {0}")]
    CorruptRow(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<UserQueryResult>, UserQueryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError>;
}
