use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(unique)]
    pub email: String,

    pub name: String,

    pub password_hash: String,

    // "USER" | "ADMIN"
    pub role: String,

    #[sea_orm(column_type = "Uuid", nullable)]
    pub group_id: Option<Uuid>,

    pub is_first_login: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone", nullable)]
    pub last_login_at: Option<DateTimeWithTimeZone>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::group::adapter::outgoing::sea_orm_entity::groups::Entity",
        from = "Column::GroupId",
        to = "crate::modules::group::adapter::outgoing::sea_orm_entity::groups::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Groups,
}

impl Related<crate::modules::group::adapter::outgoing::sea_orm_entity::groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Groups.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(email) = &self.email {
            self.email = Set(email.trim().to_lowercase());
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
