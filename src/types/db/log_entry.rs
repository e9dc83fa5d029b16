use sea_orm::entity::prelude::*;

/// SeaORM entity for the stoplists_log table
///
/// Append-only. stoplist_id is a plain reference so log rows remain
/// readable after the entry they describe has been deleted.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "stoplists_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_on: DateTimeUtc,
    pub stoplist_id: i32,
    pub user: String,
    #[sea_orm(column_name = "type")]
    pub r#type: String,
    pub data: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
