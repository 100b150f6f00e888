use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use serde::Serialize;

use crate::entities::blog_posts;

#[derive(Debug, Clone, Serialize)]
pub struct BlogPost {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub content: String,
    pub thumbnail: Option<String>,
    pub date: String,
    pub published: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<blog_posts::Model> for BlogPost {
    fn from(model: blog_posts::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            slug: model.slug,
            description: model.description,
            content: model.content,
            thumbnail: model.thumbnail,
            date: model.date,
            published: model.published,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Full record for create/update; partial updates are not supported.
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub content: String,
    pub thumbnail: Option<String>,
    pub date: String,
    pub published: bool,
}

pub struct PostRepository {
    conn: DatabaseConnection,
}

impl PostRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// List posts, newest first. `published_only` hides drafts for the
    /// public routes; `search` matches title, description or content.
    pub async fn list(&self, published_only: bool, search: Option<&str>) -> Result<Vec<BlogPost>> {
        let mut query = blog_posts::Entity::find();

        if published_only {
            query = query.filter(blog_posts::Column::Published.eq(true));
        }

        if let Some(term) = search {
            query = query.filter(
                Condition::any()
                    .add(blog_posts::Column::Title.contains(term))
                    .add(blog_posts::Column::Description.contains(term))
                    .add(blog_posts::Column::Content.contains(term)),
            );
        }

        let rows = query
            .order_by_desc(blog_posts::Column::Date)
            .all(&self.conn)
            .await
            .context("Failed to list blog posts")?;

        Ok(rows.into_iter().map(BlogPost::from).collect())
    }

    pub async fn get_by_slug(&self, slug: &str, published_only: bool) -> Result<Option<BlogPost>> {
        let mut query = blog_posts::Entity::find().filter(blog_posts::Column::Slug.eq(slug));

        if published_only {
            query = query.filter(blog_posts::Column::Published.eq(true));
        }

        let post = query
            .one(&self.conn)
            .await
            .context("Failed to query blog post by slug")?;

        Ok(post.map(BlogPost::from))
    }

    /// Insert a new post and return its generated id. A duplicate slug
    /// surfaces as a unique-constraint violation from the store.
    pub async fn create(&self, draft: &PostDraft) -> Result<i32> {
        let now = chrono::Utc::now().to_rfc3339();

        let active = blog_posts::ActiveModel {
            title: Set(draft.title.clone()),
            slug: Set(draft.slug.clone()),
            description: Set(draft.description.clone()),
            content: Set(draft.content.clone()),
            thumbnail: Set(draft.thumbnail.clone()),
            date: Set(draft.date.clone()),
            published: Set(draft.published),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = blog_posts::Entity::insert(active).exec(&self.conn).await?;

        Ok(result.last_insert_id)
    }

    /// Replace a post wholesale. Returns `false` when the id does not exist.
    pub async fn update(&self, id: i32, draft: &PostDraft) -> Result<bool> {
        let post = blog_posts::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query blog post for update")?;

        let Some(post) = post else {
            return Ok(false);
        };

        let mut active: blog_posts::ActiveModel = post.into();
        active.title = Set(draft.title.clone());
        active.slug = Set(draft.slug.clone());
        active.description = Set(draft.description.clone());
        active.content = Set(draft.content.clone());
        active.thumbnail = Set(draft.thumbnail.clone());
        active.date = Set(draft.date.clone());
        active.published = Set(draft.published);
        active.updated_at = Set(chrono::Utc::now().to_rfc3339());
        active.update(&self.conn).await?;

        Ok(true)
    }

    pub async fn delete(&self, id: i32) -> Result<bool> {
        let result = blog_posts::Entity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("Failed to delete blog post")?;

        Ok(result.rows_affected > 0)
    }
}
