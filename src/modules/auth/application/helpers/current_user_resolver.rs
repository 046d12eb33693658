use std::sync::Arc;

use crate::auth::application::domain::entities::{CurrentUser, UserId};
use crate::auth::application::ports::outgoing::user_query::UserQuery;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolveCurrentUserError {
    #[error("User not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Turns a verified token subject into the caller's current identity.
///
/// Role and group are read from storage on every call, so an admin moving a
/// learner between groups takes effect on the learner's next request.
#[derive(Clone)]
pub struct CurrentUserResolver {
    user_query: Arc<dyn UserQuery + Send + Sync>,
}

impl CurrentUserResolver {
    pub fn new(user_query: Arc<dyn UserQuery + Send + Sync>) -> Self {
        Self { user_query }
    }

    pub async fn resolve(&self, user_id: UserId) -> Result<CurrentUser, ResolveCurrentUserError> {
        match self.user_query.find_by_id(user_id).await {
            Ok(Some(user)) => Ok(user.to_current_user()),
            Ok(None) => Err(ResolveCurrentUserError::NotFound),
            Err(e) => Err(ResolveCurrentUserError::RepositoryError(e.to_string())),
        }
    }
}
