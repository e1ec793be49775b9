use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "meetings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub organizer_id: Uuid,

    #[sea_orm(column_type = "String(StringLen::N(200))")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    pub date: Date,
    pub start_time: Time,
    pub end_time: Time,

    // Ordered array of user ids
    #[sea_orm(column_type = "JsonBinary")]
    pub participants: Json,

    #[sea_orm(column_type = "String(StringLen::N(16))")]
    pub status: String,

    pub is_deleted: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "users::Entity",
        from = "Column::OrganizerId",
        to = "users::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Organizer,
}

impl Related<users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organizer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
