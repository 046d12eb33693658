use sea_orm::entity::prelude::*;

use crate::progress::application::domain::ViewingLog;

/// Unique on (user_id, video_id); see the `viewing_logs` migration.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "viewing_logs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub user_id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub video_id: Uuid,

    pub watched_seconds: i32,

    pub is_completed: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub last_watched_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Users,

    #[sea_orm(
        belongs_to = "crate::course::adapter::outgoing::sea_orm_entity::videos::Entity",
        from = "Column::VideoId",
        to = "crate::course::adapter::outgoing::sea_orm_entity::videos::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Videos,
}

impl Related<crate::auth::adapter::outgoing::sea_orm_entity::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<crate::course::adapter::outgoing::sea_orm_entity::videos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Videos.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_log(self) -> ViewingLog {
        ViewingLog {
            id: self.id,
            user_id: self.user_id,
            video_id: self.video_id,
            watched_seconds: self.watched_seconds,
            is_completed: self.is_completed,
            last_watched_at: self.last_watched_at.with_timezone(&chrono::Utc),
        }
    }
}
