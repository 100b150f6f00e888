use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::api::AppState;
use crate::api::error::ApiError;
use crate::api::posts::MessageResponse;
use crate::api::validation::{require_non_empty, validate_id};
use crate::db::{LoadoutDraft, LoadoutItem};

#[derive(Debug, Serialize)]
pub struct LoadoutResponse {
    pub items: Vec<LoadoutItem>,
}

#[derive(Debug, Deserialize)]
pub struct LoadoutPayload {
    pub weapon_name: String,
    pub skin_name: String,
    pub category: String,
    pub side: String,
    pub description: Option<String>,
    pub float_value: Option<String>,
    #[serde(default)]
    pub stattrak: bool,
    #[serde(default)]
    pub screenshots: Vec<String>,
}

impl LoadoutPayload {
    fn into_draft(self) -> Result<LoadoutDraft, ApiError> {
        require_non_empty(&self.weapon_name, "Weapon name")?;
        require_non_empty(&self.skin_name, "Skin name")?;
        require_non_empty(&self.category, "Category")?;
        require_non_empty(&self.side, "Side")?;

        Ok(LoadoutDraft {
            weapon_name: self.weapon_name,
            skin_name: self.skin_name,
            category: self.category,
            side: self.side,
            description: self.description,
            float_value: self.float_value,
            stattrak: self.stattrak,
            screenshots: self.screenshots,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct LoadoutCreatedResponse {
    pub message: String,
    #[serde(rename = "itemId")]
    pub item_id: i32,
}

/// Serves both the public catalogue and the admin listing; the catalogue
/// has no draft state, so everyone sees the same rows.
pub async fn list(State(state): State<Arc<AppState>>) -> Result<Json<LoadoutResponse>, ApiError> {
    let items = state
        .store()
        .list_loadout_items()
        .await
        .map_err(|err| ApiError::DatabaseError(err.to_string()))?;

    Ok(Json(LoadoutResponse { items }))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoadoutPayload>,
) -> Result<(StatusCode, Json<LoadoutCreatedResponse>), ApiError> {
    let draft = payload.into_draft()?;

    let item_id = state
        .store()
        .create_loadout_item(&draft)
        .await
        .map_err(|err| ApiError::DatabaseError(err.to_string()))?;

    info!(item_id, weapon = %draft.weapon_name, "Created loadout item");

    Ok((
        StatusCode::CREATED,
        Json(LoadoutCreatedResponse {
            message: "Item created successfully".to_string(),
            item_id,
        }),
    ))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<LoadoutPayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    validate_id(id)?;
    let draft = payload.into_draft()?;

    let updated = state
        .store()
        .update_loadout_item(id, &draft)
        .await
        .map_err(|err| ApiError::DatabaseError(err.to_string()))?;

    if !updated {
        return Err(ApiError::not_found("Item"));
    }

    Ok(Json(MessageResponse {
        message: "Item updated successfully".to_string(),
    }))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    validate_id(id)?;

    let deleted = state
        .store()
        .delete_loadout_item(id)
        .await
        .map_err(|err| ApiError::DatabaseError(err.to_string()))?;

    if !deleted {
        return Err(ApiError::not_found("Item"));
    }

    Ok(Json(MessageResponse {
        message: "Item deleted successfully".to_string(),
    }))
}
