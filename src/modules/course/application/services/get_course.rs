use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::CurrentUser;
use crate::course::application::domain::{AccessDecision, CourseTree};
use crate::course::application::helpers::CourseAccessGuard;
use crate::course::application::ports::{
    incoming::use_cases::{GetCourseError, GetCourseUseCase},
    outgoing::CatalogQuery,
};

pub struct GetCourseService {
    catalog: Arc<dyn CatalogQuery + Send + Sync>,
    guard: CourseAccessGuard,
}

impl GetCourseService {
    pub fn new(catalog: Arc<dyn CatalogQuery + Send + Sync>) -> Self {
        Self {
            guard: CourseAccessGuard::new(catalog.clone()),
            catalog,
        }
    }
}

#[async_trait]
impl GetCourseUseCase for GetCourseService {
    async fn execute(
        &self,
        user: &CurrentUser,
        course_id: Uuid,
    ) -> Result<CourseTree, GetCourseError> {
        let decision = self
            .guard
            .authorize(user, course_id)
            .await
            .map_err(|e| GetCourseError::QueryFailed(e.to_string()))?;

        if let AccessDecision::Deny(reason) = decision {
            return Err(GetCourseError::Denied(reason));
        }

        self.catalog
            .find_course(course_id)
            .await
            .map_err(|e| GetCourseError::QueryFailed(e.to_string()))?
            .ok_or(GetCourseError::NotFound)
    }
}
