use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};

use crate::course::application::domain::CourseRecord;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 200)]
    pub title: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub thumbnail_url: Option<String>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::curriculums::Entity")]
    Curriculums,

    #[sea_orm(
        has_many = "crate::group::adapter::outgoing::sea_orm_entity::group_courses::Entity"
    )]
    GroupCourses,
}

impl Related<super::curriculums::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Curriculums.def()
    }
}

impl Related<crate::group::adapter::outgoing::sea_orm_entity::group_courses::Entity> for Entity {
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
        if let ActiveValue::Set(title) = &self.title {
            self.title = Set(title.trim().to_string());
        }

        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;

            let insert = _insert;
            if !insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}

impl Model {
    pub fn to_record(self) -> CourseRecord {
        CourseRecord {
            id: self.id,
            title: self.title,
            description: self.description,
            thumbnail_url: self.thumbnail_url,
            created_at: self.created_at.with_timezone(&chrono::Utc),
        }
    }
}
