use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "changelog")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub version: String,

    pub date: String,

    pub added: Option<String>,

    pub changed: Option<String>,

    pub fixed: Option<String>,

    pub removed: Option<String>,

    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
