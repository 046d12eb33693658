use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::{UserId, UserRole};

// Input DTO for creating a user
#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub role: UserRole,
    pub group_id: Option<Uuid>,
}

// Output DTO for every write that returns a user
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResult {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub group_id: Option<Uuid>,
    pub is_first_login: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Group not found")]
    GroupNotFound,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError>;

    /// Marks a successful login: clears the first-login flag and stamps
    /// `last_login_at`.
    async fn record_login(
        &self,
        user_id: UserId,
        at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError>;

    async fn assign_group(
        &self,
        user_id: UserId,
        group_id: Option<Uuid>,
    ) -> Result<UserResult, UserRepositoryError>;
}
