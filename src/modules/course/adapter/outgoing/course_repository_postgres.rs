use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::courses::{ActiveModel as CourseActiveModel, Entity as CourseEntity};
use super::sea_orm_entity::curriculums::{
    ActiveModel as CurriculumActiveModel, Entity as CurriculumEntity,
};
use super::sea_orm_entity::videos::ActiveModel as VideoActiveModel;
use crate::course::application::domain::{CourseTree, CurriculumTree, VideoItem};
use crate::course::application::ports::outgoing::{
    CourseRepository, CourseRepositoryError, NewCourse, NewCurriculum, NewVideo,
};
use crate::shared::db::{constraint_violation, ConstraintViolation};

#[derive(Debug, Clone)]
pub struct CourseRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CourseRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Maps an insert failure, treating a foreign-key violation as a missing
/// parent row.
fn map_insert_error(e: DbErr, missing_parent: CourseRepositoryError) -> CourseRepositoryError {
    match constraint_violation(&e) {
        Some(ConstraintViolation::ForeignKey) => missing_parent,
        _ => CourseRepositoryError::DatabaseError(e.to_string()),
    }
}

#[async_trait]
impl CourseRepository for CourseRepositoryPostgres {
    async fn create_course(&self, data: NewCourse) -> Result<CourseTree, CourseRepositoryError> {
        let active = CourseActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            description: Set(data.description),
            thumbnail_url: Set(data.thumbnail_url),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let course = active
            .insert(&*self.db)
            .await
            .map_err(|e| CourseRepositoryError::DatabaseError(e.to_string()))?
            .to_record();

        Ok(CourseTree {
            id: course.id,
            title: course.title,
            description: course.description,
            thumbnail_url: course.thumbnail_url,
            created_at: course.created_at,
            curriculums: Vec::new(),
        })
    }

    async fn create_curriculum(
        &self,
        data: NewCurriculum,
    ) -> Result<CurriculumTree, CourseRepositoryError> {
        let active = CurriculumActiveModel {
            id: Set(Uuid::new_v4()),
            course_id: Set(data.course_id),
            title: Set(data.title),
            description: Set(data.description),
            created_at: NotSet,
        };

        let curriculum = active
            .insert(&*self.db)
            .await
            .map_err(|e| map_insert_error(e, CourseRepositoryError::CourseNotFound))?;

        tracing::debug!(curriculum_id = %curriculum.id, course_id = %curriculum.course_id, "Curriculum created");

        Ok(CurriculumTree {
            id: curriculum.id,
            course_id: curriculum.course_id,
            title: curriculum.title,
            description: curriculum.description,
            videos: Vec::new(),
        })
    }

    async fn create_video(&self, data: NewVideo) -> Result<VideoItem, CourseRepositoryError> {
        let active = VideoActiveModel {
            id: Set(Uuid::new_v4()),
            curriculum_id: Set(data.curriculum_id),
            title: Set(data.title),
            description: Set(data.description),
            video_url: Set(data.video_url),
            created_at: NotSet,
        };

        let video = active
            .insert(&*self.db)
            .await
            .map_err(|e| map_insert_error(e, CourseRepositoryError::CurriculumNotFound))?;

        tracing::debug!(video_id = %video.id, curriculum_id = %video.curriculum_id, "Video created");
        Ok(video.to_item())
    }

    async fn delete_course(&self, course_id: Uuid) -> Result<(), CourseRepositoryError> {
        let result = CourseEntity::delete_by_id(course_id)
            .exec(&*self.db)
            .await
            .map_err(|e| CourseRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(CourseRepositoryError::CourseNotFound);
        }

        Ok(())
    }

    async fn delete_curriculum(&self, curriculum_id: Uuid) -> Result<(), CourseRepositoryError> {
        let result = CurriculumEntity::delete_by_id(curriculum_id)
            .exec(&*self.db)
            .await
            .map_err(|e| CourseRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(CourseRepositoryError::CurriculumNotFound);
        }

        Ok(())
    }
}
