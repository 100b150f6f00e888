use anyhow::{Context, Result};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use serde::Serialize;

use crate::entities::loadout_items;

/// Loadout item with screenshots decoded from their stored JSON form.
/// An absent column value becomes an empty list, never null.
#[derive(Debug, Clone, Serialize)]
pub struct LoadoutItem {
    pub id: i32,
    pub weapon_name: String,
    pub skin_name: String,
    pub category: String,
    pub side: String,
    pub description: Option<String>,
    pub float_value: Option<String>,
    pub stattrak: bool,
    pub screenshots: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<loadout_items::Model> for LoadoutItem {
    fn from(model: loadout_items::Model) -> Self {
        let screenshots = model
            .screenshots
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok())
            .unwrap_or_default();

        Self {
            id: model.id,
            weapon_name: model.weapon_name,
            skin_name: model.skin_name,
            category: model.category,
            side: model.side,
            description: model.description,
            float_value: model.float_value,
            stattrak: model.stattrak,
            screenshots,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadoutDraft {
    pub weapon_name: String,
    pub skin_name: String,
    pub category: String,
    pub side: String,
    pub description: Option<String>,
    pub float_value: Option<String>,
    pub stattrak: bool,
    pub screenshots: Vec<String>,
}

pub struct LoadoutRepository {
    conn: DatabaseConnection,
}

impl LoadoutRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// All items ordered by category, then weapon name.
    pub async fn list(&self) -> Result<Vec<LoadoutItem>> {
        let rows = loadout_items::Entity::find()
            .order_by_asc(loadout_items::Column::Category)
            .order_by_asc(loadout_items::Column::WeaponName)
            .all(&self.conn)
            .await
            .context("Failed to list loadout items")?;

        Ok(rows.into_iter().map(LoadoutItem::from).collect())
    }

    pub async fn create(&self, draft: &LoadoutDraft) -> Result<i32> {
        let now = chrono::Utc::now().to_rfc3339();

        let active = loadout_items::ActiveModel {
            weapon_name: Set(draft.weapon_name.clone()),
            skin_name: Set(draft.skin_name.clone()),
            category: Set(draft.category.clone()),
            side: Set(draft.side.clone()),
            description: Set(draft.description.clone()),
            float_value: Set(draft.float_value.clone()),
            stattrak: Set(draft.stattrak),
            screenshots: Set(Some(serde_json::to_string(&draft.screenshots)?)),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = loadout_items::Entity::insert(active).exec(&self.conn).await?;

        Ok(result.last_insert_id)
    }

    pub async fn update(&self, id: i32, draft: &LoadoutDraft) -> Result<bool> {
        let item = loadout_items::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query loadout item for update")?;

        let Some(item) = item else {
            return Ok(false);
        };

        let mut active: loadout_items::ActiveModel = item.into();
        active.weapon_name = Set(draft.weapon_name.clone());
        active.skin_name = Set(draft.skin_name.clone());
        active.category = Set(draft.category.clone());
        active.side = Set(draft.side.clone());
        active.description = Set(draft.description.clone());
        active.float_value = Set(draft.float_value.clone());
        active.stattrak = Set(draft.stattrak);
        active.screenshots = Set(Some(serde_json::to_string(&draft.screenshots)?));
        active.updated_at = Set(chrono::Utc::now().to_rfc3339());
        active.update(&self.conn).await?;

        Ok(true)
    }

    pub async fn delete(&self, id: i32) -> Result<bool> {
        let result = loadout_items::Entity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("Failed to delete loadout item")?;

        Ok(result.rows_affected > 0)
    }
}
