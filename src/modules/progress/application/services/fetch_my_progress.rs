use std::sync::Arc;

use async_trait::async_trait;

use super::catalog_video_ids;
use crate::auth::application::domain::entities::CurrentUser;
use crate::course::application::domain::CatalogScope;
use crate::course::application::ports::outgoing::CatalogQuery;
use crate::progress::application::domain::{compute_user_progress, UserProgress};
use crate::progress::application::ports::{
    incoming::use_cases::{FetchMyProgressError, FetchMyProgressUseCase},
    outgoing::ProgressQuery,
};

pub struct FetchMyProgressService<Q>
where
    Q: ProgressQuery + Send + Sync,
{
    catalog: Arc<dyn CatalogQuery + Send + Sync>,
    progress: Q,
}

impl<Q> FetchMyProgressService<Q>
where
    Q: ProgressQuery + Send + Sync,
{
    pub fn new(catalog: Arc<dyn CatalogQuery + Send + Sync>, progress: Q) -> Self {
        Self { catalog, progress }
    }
}

#[async_trait]
impl<Q> FetchMyProgressUseCase for FetchMyProgressService<Q>
where
    Q: ProgressQuery + Send + Sync,
{
    async fn execute(&self, user: &CurrentUser) -> Result<UserProgress, FetchMyProgressError> {
        let courses = self
            .catalog
            .list_courses(CatalogScope::for_user(user))
            .await
            .map_err(|e| FetchMyProgressError::QueryFailed(e.to_string()))?;
        let video_ids = catalog_video_ids(&courses);

        let user_id = user.id.value();
        let logs = self
            .progress
            .logs_for_users(&[user_id], &video_ids)
            .await
            .map_err(|e| FetchMyProgressError::QueryFailed(e.to_string()))?;

        Ok(compute_user_progress(user_id, video_ids, &logs))
    }
}
