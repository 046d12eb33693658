use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::viewing_logs::{Column as LogColumn, Entity as LogEntity};
use crate::auth::adapter::outgoing::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity, Model as UserModel,
};
use crate::auth::application::domain::entities::UserRole;
use crate::progress::application::domain::{LearnerSummary, ViewingLog};
use crate::progress::application::ports::outgoing::{ProgressQuery, ProgressQueryError};

#[derive(Debug, Clone)]
pub struct ProgressQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProgressQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_summary(model: UserModel) -> Result<LearnerSummary, ProgressQueryError> {
        let role = model
            .role
            .parse::<UserRole>()
            .map_err(|e| ProgressQueryError::CorruptRow(format!("user {}: {}", model.id, e)))?;

        Ok(LearnerSummary {
            id: model.id,
            name: model.name,
            email: model.email,
            role,
            group_id: model.group_id,
        })
    }
}

#[async_trait]
impl ProgressQuery for ProgressQueryPostgres {
    async fn logs_for_users(
        &self,
        user_ids: &[Uuid],
        video_ids: &[Uuid],
    ) -> Result<Vec<ViewingLog>, ProgressQueryError> {
        if user_ids.is_empty() || video_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = LogEntity::find()
            .filter(LogColumn::UserId.is_in(user_ids.iter().copied()))
            .filter(LogColumn::VideoId.is_in(video_ids.iter().copied()))
            .all(&*self.db)
            .await
            .map_err(|e| ProgressQueryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(|m| m.to_log()).collect())
    }

    async fn members_of_group(
        &self,
        group_id: Uuid,
    ) -> Result<Vec<LearnerSummary>, ProgressQueryError> {
        UserEntity::find()
            .filter(UserColumn::GroupId.eq(group_id))
            .order_by_asc(UserColumn::Name)
            .order_by_asc(UserColumn::Id)
            .all(&*self.db)
            .await
            .map_err(|e| ProgressQueryError::DatabaseError(e.to_string()))?
            .into_iter()
            .map(Self::to_summary)
            .collect()
    }

    async fn all_users(&self) -> Result<Vec<LearnerSummary>, ProgressQueryError> {
        UserEntity::find()
            .order_by_asc(UserColumn::Name)
            .order_by_asc(UserColumn::Id)
            .all(&*self.db)
            .await
            .map_err(|e| ProgressQueryError::DatabaseError(e.to_string()))?
            .into_iter()
            .map(Self::to_summary)
            .collect()
    }
}
