use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub title: String,

    /// URL-safe identifier, distinct from the numeric id
    #[sea_orm(unique)]
    pub slug: String,

    pub description: String,

    #[sea_orm(column_type = "Text")]
    pub content: String,

    /// Relative path under the upload root
    pub thumbnail: Option<String>,

    pub date: String,

    pub published: bool,

    pub created_at: String,

    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
