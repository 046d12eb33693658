use async_trait::async_trait;
use uuid::Uuid;

use super::{normalize_optional, normalize_title, CatalogInputError};
use crate::course::application::domain::CurriculumTree;

#[derive(Debug, Clone)]
pub struct CreateCurriculumCommand {
    course_id: Uuid,
    title: String,
    description: Option<String>,
}

impl CreateCurriculumCommand {
    pub fn new(
        course_id: Uuid,
        title: String,
        description: Option<String>,
    ) -> Result<Self, CatalogInputError> {
        Ok(Self {
            course_id,
            title: normalize_title(title)?,
            description: normalize_optional(description),
        })
    }

    pub fn course_id(&self) -> Uuid {
        self.course_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&String> {
        self.description.as_ref()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCurriculumError {
    #[error("Course not found")]
    CourseNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateCurriculumUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateCurriculumCommand,
    ) -> Result<CurriculumTree, CreateCurriculumError>;
}
