use sea_orm::entity::prelude::*;

/// A grant: members of `group_id` may see `course_id`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "group_courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub group_id: Uuid,

    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub course_id: Uuid,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::groups::Entity",
        from = "Column::GroupId",
        to = "super::groups::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    Groups,

    #[sea_orm(
        belongs_to = "crate::course::adapter::outgoing::sea_orm_entity::courses::Entity",
        from = "Column::CourseId",
        to = "crate::course::adapter::outgoing::sea_orm_entity::courses::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    Courses,
}

impl Related<super::groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Groups.def()
    }
}

impl Related<crate::course::adapter::outgoing::sea_orm_entity::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Courses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
