use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::groups::{Column as GroupColumn, Entity as GroupEntity};
use crate::group::application::ports::outgoing::{GroupQuery, GroupQueryError, GroupView};

#[derive(Debug, Clone)]
pub struct GroupQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl GroupQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GroupQuery for GroupQueryPostgres {
    async fn find_by_id(&self, group_id: Uuid) -> Result<Option<GroupView>, GroupQueryError> {
        let group = GroupEntity::find_by_id(group_id)
            .one(&*self.db)
            .await
            .map_err(|e| GroupQueryError::DatabaseError(e.to_string()))?;

        Ok(group.map(|m| m.to_view()))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<GroupView>, GroupQueryError> {
        let group = GroupEntity::find()
            .filter(GroupColumn::Code.eq(code))
            .one(&*self.db)
            .await
            .map_err(|e| GroupQueryError::DatabaseError(e.to_string()))?;

        Ok(group.map(|m| m.to_view()))
    }

    async fn list_groups(&self) -> Result<Vec<GroupView>, GroupQueryError> {
        let groups = GroupEntity::find()
            .order_by_asc(GroupColumn::Name)
            .order_by_asc(GroupColumn::Id)
            .all(&*self.db)
            .await
            .map_err(|e| GroupQueryError::DatabaseError(e.to_string()))?;

        Ok(groups.into_iter().map(|m| m.to_view()).collect())
    }
}
