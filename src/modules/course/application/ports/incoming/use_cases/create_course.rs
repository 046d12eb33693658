use async_trait::async_trait;

use super::{normalize_optional, normalize_title, CatalogInputError};
use crate::course::application::domain::CourseTree;

#[derive(Debug, Clone)]
pub struct CreateCourseCommand {
    title: String,
    description: Option<String>,
    thumbnail_url: Option<String>,
}

impl CreateCourseCommand {
    pub fn new(
        title: String,
        description: Option<String>,
        thumbnail_url: Option<String>,
    ) -> Result<Self, CatalogInputError> {
        Ok(Self {
            title: normalize_title(title)?,
            description: normalize_optional(description),
            thumbnail_url: normalize_optional(thumbnail_url),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&String> {
        self.description.as_ref()
    }

    pub fn thumbnail_url(&self) -> Option<&String> {
        self.thumbnail_url.as_ref()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCourseError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateCourseUseCase: Send + Sync {
    async fn execute(&self, command: CreateCourseCommand) -> Result<CourseTree, CreateCourseError>;
}
