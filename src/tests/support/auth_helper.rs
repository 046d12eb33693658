use actix_web::web;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider, ACCESS_TOKEN, REFRESH_TOKEN,
};

pub const TEST_ACCESS_TOKEN: &str = "test-token";
pub const TEST_REFRESH_TOKEN: &str = "test-refresh-token";

/// Accepts the two fixed test tokens and maps both to one identity.
#[derive(Debug, Clone)]
pub struct StubTokenProvider {
    pub user_id: Uuid,
    pub role: UserRole,
}

impl StubTokenProvider {
    pub fn new(user_id: Uuid, role: UserRole) -> Self {
        Self { user_id, role }
    }

    fn claims(&self, token_type: &str) -> TokenClaims {
        let now = Utc::now().timestamp();
        TokenClaims {
            sub: self.user_id,
            role: self.role,
            exp: now + 3600,
            iat: now,
            nbf: now,
            iss: "lms-test".to_string(),
            token_type: token_type.to_string(),
        }
    }
}

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(&self, _user_id: Uuid, _role: UserRole) -> Result<String, TokenError> {
        Ok(TEST_ACCESS_TOKEN.to_string())
    }

    fn generate_refresh_token(
        &self,
        _user_id: Uuid,
        _role: UserRole,
    ) -> Result<String, TokenError> {
        Ok(TEST_REFRESH_TOKEN.to_string())
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        match token {
            TEST_ACCESS_TOKEN => Ok(self.claims(ACCESS_TOKEN)),
            TEST_REFRESH_TOKEN => Ok(self.claims(REFRESH_TOKEN)),
            _ => Err(TokenError::InvalidSignature),
        }
    }

    fn refresh_access_token(&self, refresh_token: &str) -> Result<String, TokenError> {
        match refresh_token {
            TEST_REFRESH_TOKEN => Ok(TEST_ACCESS_TOKEN.to_string()),
            TEST_ACCESS_TOKEN => Err(TokenError::InvalidTokenType(REFRESH_TOKEN.to_string())),
            _ => Err(TokenError::InvalidSignature),
        }
    }
}

pub fn token_provider_data(
    user_id: Uuid,
    role: UserRole,
) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    web::Data::new(Arc::new(StubTokenProvider::new(user_id, role)) as Arc<dyn TokenProvider + Send + Sync>)
}

pub fn bearer() -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", TEST_ACCESS_TOKEN))
}
