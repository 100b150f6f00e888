use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "loadout_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub weapon_name: String,

    pub skin_name: String,

    pub category: String,

    /// "T", "CT" or "Both"
    pub side: String,

    pub description: Option<String>,

    pub float_value: Option<String>,

    pub stattrak: bool,

    /// JSON-serialized ordered list of screenshot paths
    pub screenshots: Option<String>,

    pub created_at: String,

    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
