use anyhow::{Context, Result};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use serde::Serialize;

use crate::entities::changelog;

#[derive(Debug, Clone, Serialize)]
pub struct ChangelogEntry {
    pub id: i32,
    pub version: String,
    pub date: String,
    pub added: Option<String>,
    pub changed: Option<String>,
    pub fixed: Option<String>,
    pub removed: Option<String>,
    pub created_at: String,
}

impl From<changelog::Model> for ChangelogEntry {
    fn from(model: changelog::Model) -> Self {
        Self {
            id: model.id,
            version: model.version,
            date: model.date,
            added: model.added,
            changed: model.changed,
            fixed: model.fixed,
            removed: model.removed,
            created_at: model.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChangelogDraft {
    pub version: String,
    pub date: String,
    pub added: Option<String>,
    pub changed: Option<String>,
    pub fixed: Option<String>,
    pub removed: Option<String>,
}

pub struct ChangelogRepository {
    conn: DatabaseConnection,
}

impl ChangelogRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// All entries, newest release date first.
    pub async fn list(&self) -> Result<Vec<ChangelogEntry>> {
        let rows = changelog::Entity::find()
            .order_by_desc(changelog::Column::Date)
            .all(&self.conn)
            .await
            .context("Failed to list changelog entries")?;

        Ok(rows.into_iter().map(ChangelogEntry::from).collect())
    }

    pub async fn create(&self, draft: &ChangelogDraft) -> Result<i32> {
        let active = changelog::ActiveModel {
            version: Set(draft.version.clone()),
            date: Set(draft.date.clone()),
            added: Set(draft.added.clone()),
            changed: Set(draft.changed.clone()),
            fixed: Set(draft.fixed.clone()),
            removed: Set(draft.removed.clone()),
            created_at: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };

        let result = changelog::Entity::insert(active).exec(&self.conn).await?;

        Ok(result.last_insert_id)
    }

    pub async fn update(&self, id: i32, draft: &ChangelogDraft) -> Result<bool> {
        let entry = changelog::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query changelog entry for update")?;

        let Some(entry) = entry else {
            return Ok(false);
        };

        let mut active: changelog::ActiveModel = entry.into();
        active.version = Set(draft.version.clone());
        active.date = Set(draft.date.clone());
        active.added = Set(draft.added.clone());
        active.changed = Set(draft.changed.clone());
        active.fixed = Set(draft.fixed.clone());
        active.removed = Set(draft.removed.clone());
        active.update(&self.conn).await?;

        Ok(true)
    }

    pub async fn delete(&self, id: i32) -> Result<bool> {
        let result = changelog::Entity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("Failed to delete changelog entry")?;

        Ok(result.rows_affected > 0)
    }
}
