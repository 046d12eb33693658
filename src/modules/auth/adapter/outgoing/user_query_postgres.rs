use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

use super::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity, Model as UserModel,
};
use crate::auth::application::domain::entities::{UserId, UserRole};
use crate::auth::application::ports::outgoing::{UserQuery, UserQueryError, UserQueryResult};

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_query_result(model: UserModel) -> Result<UserQueryResult, UserQueryError> {
        let role: UserRole = model
            .role
            .parse()
            .map_err(|e: crate::auth::application::domain::entities::UnknownRole| {
                UserQueryError::CorruptRow(format!("user {}: {}", model.id, e))
            })?;

        Ok(UserQueryResult {
            id: model.id,
            email: model.email,
            name: model.name,
            password_hash: model.password_hash,
            role,
            group_id: model.group_id,
            is_first_login: model.is_first_login,
            last_login_at: model.last_login_at.map(|t| t.with_timezone(&chrono::Utc)),
            created_at: model.created_at.with_timezone(&chrono::Utc),
        })
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<UserQueryResult>, UserQueryError> {
        let user = UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        user.map(Self::map_to_query_result).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Email.eq(email.trim().to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        user.map(Self::map_to_query_result).transpose()
    }
}
