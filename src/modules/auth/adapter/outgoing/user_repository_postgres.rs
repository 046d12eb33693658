use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity, Model as UserModel,
};
use crate::auth::application::domain::entities::{UserId, UserRole};
use crate::auth::application::ports::outgoing::{
    CreateUserData, UserRepository, UserRepositoryError, UserResult,
};
use crate::shared::db::{constraint_violation, ConstraintViolation};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_user_result(model: UserModel) -> Result<UserResult, UserRepositoryError> {
        let role: UserRole = model
            .role
            .parse()
            .map_err(|e| UserRepositoryError::DatabaseError(format!("user {}: {}", model.id, e)))?;

        Ok(UserResult {
            id: model.id,
            email: model.email,
            name: model.name,
            role,
            group_id: model.group_id,
            is_first_login: model.is_first_login,
        })
    }

    fn map_write_error(e: DbErr) -> UserRepositoryError {
        match constraint_violation(&e) {
            Some(ConstraintViolation::Unique) => UserRepositoryError::EmailAlreadyExists,
            Some(ConstraintViolation::ForeignKey) => UserRepositoryError::GroupNotFound,
            None => UserRepositoryError::DatabaseError(e.to_string()),
        }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(data.email),
            name: Set(data.name),
            password_hash: Set(data.password_hash),
            role: Set(data.role.as_str().to_string()),
            group_id: Set(data.group_id),
            is_first_login: Set(true),
            last_login_at: Set(None),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Self::map_to_user_result(inserted)
    }

    async fn record_login(
        &self,
        user_id: UserId,
        at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError> {
        let result = UserEntity::update_many()
            .col_expr(UserColumn::IsFirstLogin, Expr::value(false))
            .col_expr(UserColumn::LastLoginAt, Expr::value(at.fixed_offset()))
            .filter(UserColumn::Id.eq(user_id.value()))
            .exec(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }

        Ok(())
    }

    async fn assign_group(
        &self,
        user_id: UserId,
        group_id: Option<Uuid>,
    ) -> Result<UserResult, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(user_id.value()),
            group_id: Set(group_id),
            ..Default::default()
        };

        let updated = active_user.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => UserRepositoryError::UserNotFound,
            other => Self::map_write_error(other),
        })?;

        Self::map_to_user_result(updated)
    }
}
