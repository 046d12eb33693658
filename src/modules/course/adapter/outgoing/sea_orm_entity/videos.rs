use sea_orm::entity::prelude::*;

use crate::course::application::domain::VideoItem;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "videos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub curriculum_id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 200)]
    pub title: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    #[sea_orm(column_type = "Text")]
    pub video_url: String,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::curriculums::Entity",
        from = "Column::CurriculumId",
        to = "super::curriculums::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Curriculums,
}

impl Related<super::curriculums::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Curriculums.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_item(self) -> VideoItem {
        VideoItem {
            id: self.id,
            curriculum_id: self.curriculum_id,
            title: self.title,
            description: self.description,
            video_url: self.video_url,
        }
    }
}
