use async_trait::async_trait;

use crate::course::application::domain::VideoItem;
use crate::course::application::ports::{
    incoming::use_cases::{CreateVideoCommand, CreateVideoError, CreateVideoUseCase},
    outgoing::{CourseRepository, CourseRepositoryError, NewVideo},
};

pub struct CreateVideoService<R>
where
    R: CourseRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateVideoService<R>
where
    R: CourseRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateVideoUseCase for CreateVideoService<R>
where
    R: CourseRepository + Send + Sync,
{
    async fn execute(&self, command: CreateVideoCommand) -> Result<VideoItem, CreateVideoError> {
        let data = NewVideo {
            curriculum_id: command.curriculum_id(),
            title: command.title().to_string(),
            description: command.description().cloned(),
            video_url: command.video_url().to_string(),
        };

        self.repository.create_video(data).await.map_err(|e| match e {
            CourseRepositoryError::CurriculumNotFound => CreateVideoError::CurriculumNotFound,
            other => CreateVideoError::RepositoryError(other.to_string()),
        })
    }
}
