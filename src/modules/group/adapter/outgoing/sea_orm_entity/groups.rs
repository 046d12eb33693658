use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};

use crate::group::application::ports::outgoing::GroupView;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "groups")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    pub name: String,

    #[sea_orm(unique)]
    pub code: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::group_courses::Entity")]
    GroupCourses,
}

impl Related<super::group_courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GroupCourses.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(code) = &self.code {
            self.code = Set(code.trim().to_uppercase());
        }

        if let ActiveValue::Set(name) = &self.name {
            self.name = Set(name.trim().to_string());
        }

        Ok(self)
    }
}

impl Model {
    pub fn to_view(self) -> GroupView {
        GroupView {
            id: self.id,
            name: self.name,
            code: self.code,
            description: self.description,
            created_at: self.created_at.with_timezone(&chrono::Utc),
        }
    }
}
