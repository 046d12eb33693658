use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::ports::{
    incoming::use_cases::{RefreshTokenError, RefreshTokenResult, RefreshTokenUseCase},
    outgoing::{TokenError, TokenProvider},
};

pub struct RefreshTokenService {
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl RefreshTokenService {
    pub fn new(token_provider: Arc<dyn TokenProvider + Send + Sync>) -> Self {
        Self { token_provider }
    }
}

#[async_trait]
impl RefreshTokenUseCase for RefreshTokenService {
    async fn execute(&self, refresh_token: &str) -> Result<RefreshTokenResult, RefreshTokenError> {
        let refresh_token = refresh_token.trim();
        if refresh_token.is_empty() {
            return Err(RefreshTokenError::EmptyToken);
        }

        let access_token = self
            .token_provider
            .refresh_access_token(refresh_token)
            .map_err(|e| match e {
                TokenError::TokenExpired => RefreshTokenError::TokenExpired,
                TokenError::EncodingError(msg) => RefreshTokenError::IssuingFailed(msg),
                _ => RefreshTokenError::InvalidToken,
            })?;

        Ok(RefreshTokenResult { access_token })
    }
}
