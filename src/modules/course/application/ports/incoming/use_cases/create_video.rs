use async_trait::async_trait;
use uuid::Uuid;

use super::{normalize_optional, normalize_title, CatalogInputError};
use crate::course::application::domain::VideoItem;

#[derive(Debug, Clone)]
pub struct CreateVideoCommand {
    curriculum_id: Uuid,
    title: String,
    description: Option<String>,
    video_url: String,
}

impl CreateVideoCommand {
    pub fn new(
        curriculum_id: Uuid,
        title: String,
        description: Option<String>,
        video_url: String,
    ) -> Result<Self, CatalogInputError> {
        let title = normalize_title(title)?;
        let video_url = video_url.trim().to_string();
        if video_url.is_empty() {
            return Err(CatalogInputError::EmptyVideoUrl);
        }

        Ok(Self {
            curriculum_id,
            title,
            description: normalize_optional(description),
            video_url,
        })
    }

    pub fn curriculum_id(&self) -> Uuid {
        self.curriculum_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&String> {
        self.description.as_ref()
    }

    pub fn video_url(&self) -> &str {
        &self.video_url
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateVideoError {
    #[error("Curriculum not found")]
    CurriculumNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateVideoUseCase: Send + Sync {
    async fn execute(&self, command: CreateVideoCommand) -> Result<VideoItem, CreateVideoError>;
}
