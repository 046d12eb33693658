use async_trait::async_trait;

use crate::auth::application::domain::entities::CurrentUser;
use crate::course::application::domain::{CatalogScope, CourseTree};
use crate::course::application::ports::{
    incoming::use_cases::{ListVisibleCoursesError, ListVisibleCoursesUseCase},
    outgoing::CatalogQuery,
};

pub struct ListVisibleCoursesService<Q>
where
    Q: CatalogQuery + Send + Sync,
{
    catalog: Q,
}

impl<Q> ListVisibleCoursesService<Q>
where
    Q: CatalogQuery + Send + Sync,
{
    pub fn new(catalog: Q) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl<Q> ListVisibleCoursesUseCase for ListVisibleCoursesService<Q>
where
    Q: CatalogQuery + Send + Sync,
{
    async fn execute(
        &self,
        user: &CurrentUser,
    ) -> Result<Vec<CourseTree>, ListVisibleCoursesError> {
        let scope = CatalogScope::for_user(user);

        self.catalog
            .list_courses(scope)
            .await
            .map_err(|e| ListVisibleCoursesError::QueryFailed(e.to_string()))
    }
}
