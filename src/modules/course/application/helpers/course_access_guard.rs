use std::sync::Arc;

use uuid::Uuid;

use crate::auth::application::domain::entities::CurrentUser;
use crate::course::application::domain::{AccessDecision, CatalogScope};
use crate::course::application::ports::outgoing::{CatalogQuery, CatalogQueryError};

/// Single-course authorization. Shared by course detail and the viewing-log
/// write path so both agree with the visible course list.
#[derive(Clone)]
pub struct CourseAccessGuard {
    catalog: Arc<dyn CatalogQuery + Send + Sync>,
}

impl CourseAccessGuard {
    pub fn new(catalog: Arc<dyn CatalogQuery + Send + Sync>) -> Self {
        Self { catalog }
    }

    pub async fn authorize(
        &self,
        user: &CurrentUser,
        course_id: Uuid,
    ) -> Result<AccessDecision, CatalogQueryError> {
        let scope = CatalogScope::for_user(user);

        let has_grant = match scope {
            CatalogScope::Group(group_id) => {
                self.catalog.group_has_course(group_id, course_id).await?
            }
            CatalogScope::All | CatalogScope::Empty => false,
        };

        let decision = AccessDecision::decide(scope, has_grant);
        if let AccessDecision::Deny(reason) = decision {
            tracing::debug!(user_id = %user.id, %course_id, reason = reason.code(), "Course access denied");
        }

        Ok(decision)
    }
}
