use sea_orm::entity::prelude::*;

/// SeaORM entity for the stoplists table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "stoplists")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub code: i32,
    #[sea_orm(unique)]
    pub number: i64,
    pub reason1: bool,
    pub reason2: bool,
    pub reason3: bool,
    pub reason4: bool,
    pub created_on: DateTimeUtc,
    pub updated_on: DateTimeUtc,
    // Denormalized operator identity, not a foreign key to users
    pub user: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
