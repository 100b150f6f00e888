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
use crate::db::{ChangelogDraft, ChangelogEntry};

#[derive(Debug, Serialize)]
pub struct ChangelogResponse {
    pub entries: Vec<ChangelogEntry>,
}

/// A release entry; the four section bodies are free-form text and any of
/// them may be omitted.
#[derive(Debug, Deserialize)]
pub struct ChangelogPayload {
    pub version: String,
    pub date: String,
    pub added: Option<String>,
    pub changed: Option<String>,
    pub fixed: Option<String>,
    pub removed: Option<String>,
}

impl ChangelogPayload {
    fn into_draft(self) -> Result<ChangelogDraft, ApiError> {
        require_non_empty(&self.version, "Version")?;
        require_non_empty(&self.date, "Date")?;

        Ok(ChangelogDraft {
            version: self.version,
            date: self.date,
            added: self.added,
            changed: self.changed,
            fixed: self.fixed,
            removed: self.removed,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ChangelogCreatedResponse {
    pub message: String,
    #[serde(rename = "entryId")]
    pub entry_id: i32,
}

pub async fn list(State(state): State<Arc<AppState>>) -> Result<Json<ChangelogResponse>, ApiError> {
    let entries = state
        .store()
        .list_changelog()
        .await
        .map_err(|err| ApiError::DatabaseError(err.to_string()))?;

    Ok(Json(ChangelogResponse { entries }))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ChangelogPayload>,
) -> Result<(StatusCode, Json<ChangelogCreatedResponse>), ApiError> {
    let draft = payload.into_draft()?;

    let entry_id = state
        .store()
        .create_changelog_entry(&draft)
        .await
        .map_err(|err| ApiError::DatabaseError(err.to_string()))?;

    info!(entry_id, version = %draft.version, "Created changelog entry");

    Ok((
        StatusCode::CREATED,
        Json(ChangelogCreatedResponse {
            message: "Entry created successfully".to_string(),
            entry_id,
        }),
    ))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<ChangelogPayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    validate_id(id)?;
    let draft = payload.into_draft()?;

    let updated = state
        .store()
        .update_changelog_entry(id, &draft)
        .await
        .map_err(|err| ApiError::DatabaseError(err.to_string()))?;

    if !updated {
        return Err(ApiError::not_found("Entry"));
    }

    Ok(Json(MessageResponse {
        message: "Entry updated successfully".to_string(),
    }))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    validate_id(id)?;

    let deleted = state
        .store()
        .delete_changelog_entry(id)
        .await
        .map_err(|err| ApiError::DatabaseError(err.to_string()))?;

    if !deleted {
        return Err(ApiError::not_found("Entry"));
    }

    Ok(Json(MessageResponse {
        message: "Entry deleted successfully".to_string(),
    }))
}
