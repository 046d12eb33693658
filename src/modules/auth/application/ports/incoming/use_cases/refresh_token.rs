use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenResult {
    pub access_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RefreshTokenError {
    #[error("Refresh token cannot be empty")]
    EmptyToken,

    #[error("Refresh token has expired")]
    TokenExpired,

    #[error("Invalid refresh token")]
    InvalidToken,

    #[error("Token issuing failed: {0}")]
    IssuingFailed(String),
}

#[async_trait]
pub trait RefreshTokenUseCase: Send + Sync {
    async fn execute(&self, refresh_token: &str) -> Result<RefreshTokenResult, RefreshTokenError>;
}
