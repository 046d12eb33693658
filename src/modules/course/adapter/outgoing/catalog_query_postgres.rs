use async_trait::async_trait;
use sea_orm::sea_query::Query;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::courses::{
    Column as CourseColumn, Entity as CourseEntity, Model as CourseModel,
};
use super::sea_orm_entity::curriculums::{Column as CurriculumColumn, Entity as CurriculumEntity};
use super::sea_orm_entity::videos::{Column as VideoColumn, Entity as VideoEntity};
use crate::course::application::domain::{assemble_course_trees, CatalogScope, CourseTree};
use crate::course::application::ports::outgoing::{CatalogQuery, CatalogQueryError};
use crate::group::adapter::outgoing::sea_orm_entity::group_courses::{
    Column as GrantColumn, Entity as GrantEntity,
};

#[derive(Debug, Clone)]
pub struct CatalogQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CatalogQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Loads curriculums and videos for `courses` with one query per level.
    async fn load_trees(&self, courses: Vec<CourseModel>) -> Result<Vec<CourseTree>, DbErr> {
        if courses.is_empty() {
            return Ok(Vec::new());
        }

        let course_ids: Vec<Uuid> = courses.iter().map(|c| c.id).collect();
        let curriculums = CurriculumEntity::find()
            .filter(CurriculumColumn::CourseId.is_in(course_ids))
            .order_by_asc(CurriculumColumn::CreatedAt)
            .order_by_asc(CurriculumColumn::Id)
            .all(&*self.db)
            .await?;

        let curriculum_ids: Vec<Uuid> = curriculums.iter().map(|c| c.id).collect();
        let videos = if curriculum_ids.is_empty() {
            Vec::new()
        } else {
            VideoEntity::find()
                .filter(VideoColumn::CurriculumId.is_in(curriculum_ids))
                .order_by_asc(VideoColumn::CreatedAt)
                .order_by_asc(VideoColumn::Id)
                .all(&*self.db)
                .await?
        };

        Ok(assemble_course_trees(
            courses.into_iter().map(CourseModel::to_record).collect(),
            curriculums.into_iter().map(|c| c.to_record()).collect(),
            videos.into_iter().map(|v| v.to_item()).collect(),
        ))
    }
}

fn db_error(e: DbErr) -> CatalogQueryError {
    CatalogQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl CatalogQuery for CatalogQueryPostgres {
    async fn list_courses(&self, scope: CatalogScope) -> Result<Vec<CourseTree>, CatalogQueryError> {
        let select = match scope {
            CatalogScope::Empty => return Ok(Vec::new()),
            CatalogScope::All => CourseEntity::find(),
            // IN (subquery) keeps each course once however many grants match
            CatalogScope::Group(group_id) => CourseEntity::find().filter(
                CourseColumn::Id.in_subquery(
                    Query::select()
                        .column(GrantColumn::CourseId)
                        .from(GrantEntity)
                        .and_where(GrantColumn::GroupId.eq(group_id))
                        .to_owned(),
                ),
            ),
        };

        let courses = select
            .order_by_asc(CourseColumn::CreatedAt)
            .order_by_asc(CourseColumn::Id)
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        self.load_trees(courses).await.map_err(db_error)
    }

    async fn find_course(&self, course_id: Uuid) -> Result<Option<CourseTree>, CatalogQueryError> {
        let Some(course) = CourseEntity::find_by_id(course_id)
            .one(&*self.db)
            .await
            .map_err(db_error)?
        else {
            return Ok(None);
        };

        let trees = self.load_trees(vec![course]).await.map_err(db_error)?;
        Ok(trees.into_iter().next())
    }

    async fn group_has_course(
        &self,
        group_id: Uuid,
        course_id: Uuid,
    ) -> Result<bool, CatalogQueryError> {
        let grant = GrantEntity::find_by_id((group_id, course_id))
            .one(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(grant.is_some())
    }

    async fn find_video_course(&self, video_id: Uuid) -> Result<Option<Uuid>, CatalogQueryError> {
        let row = VideoEntity::find_by_id(video_id)
            .find_also_related(CurriculumEntity)
            .one(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(row.and_then(|(_, curriculum)| curriculum.map(|c| c.course_id)))
    }
}
