use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::group_courses::{
    ActiveModel as GrantActiveModel, Column as GrantColumn, Entity as GrantEntity,
};
use super::sea_orm_entity::groups::ActiveModel as GroupActiveModel;
use crate::group::application::ports::outgoing::{
    CreateGroupData, GrantOutcome, GroupRepository, GroupRepositoryError, GroupView,
};
use crate::shared::db::{constraint_violation, ConstraintViolation};

#[derive(Debug, Clone)]
pub struct GroupRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl GroupRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_grant_error(e: DbErr) -> GroupRepositoryError {
        match constraint_violation(&e) {
            // The violated constraint names the column
            Some(ConstraintViolation::ForeignKey) if e.to_string().contains("course_id") => {
                GroupRepositoryError::CourseNotFound
            }
            Some(ConstraintViolation::ForeignKey) => GroupRepositoryError::GroupNotFound,
            _ => GroupRepositoryError::DatabaseError(e.to_string()),
        }
    }
}

#[async_trait]
impl GroupRepository for GroupRepositoryPostgres {
    async fn create_group(&self, data: CreateGroupData) -> Result<GroupView, GroupRepositoryError> {
        let active = GroupActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            code: Set(data.code),
            description: Set(data.description),
            created_at: NotSet,
        };

        let inserted = active.insert(&*self.db).await.map_err(|e| {
            match constraint_violation(&e) {
                Some(ConstraintViolation::Unique) => GroupRepositoryError::CodeAlreadyExists,
                _ => GroupRepositoryError::DatabaseError(e.to_string()),
            }
        })?;

        Ok(inserted.to_view())
    }

    async fn grant_course(
        &self,
        group_id: Uuid,
        course_id: Uuid,
    ) -> Result<GrantOutcome, GroupRepositoryError> {
        let grant = GrantActiveModel {
            group_id: Set(group_id),
            course_id: Set(course_id),
            created_at: NotSet,
        };

        // INSERT ... ON CONFLICT (group_id, course_id) DO NOTHING
        let rows = GrantEntity::insert(grant)
            .on_conflict(
                OnConflict::columns([GrantColumn::GroupId, GrantColumn::CourseId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await
            .map_err(Self::map_grant_error)?;

        Ok(if rows == 0 {
            GrantOutcome::AlreadyGranted
        } else {
            GrantOutcome::Created
        })
    }

    async fn revoke_course(
        &self,
        group_id: Uuid,
        course_id: Uuid,
    ) -> Result<(), GroupRepositoryError> {
        let result = GrantEntity::delete_many()
            .filter(GrantColumn::GroupId.eq(group_id))
            .filter(GrantColumn::CourseId.eq(course_id))
            .exec(&*self.db)
            .await
            .map_err(|e| GroupRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(GroupRepositoryError::GrantNotFound);
        }

        Ok(())
    }
}
