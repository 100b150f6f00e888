use axum::{
    Extension, Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::api::AppState;
use crate::api::auth::AuthorizedContext;
use crate::api::error::ApiError;
use crate::api::posts::MessageResponse;
use crate::api::validation::{validate_id, validate_username};
use crate::db::User;

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct BulkDeleteRequest {
    #[serde(rename = "userIds")]
    pub user_ids: Vec<i32>,
}

#[derive(Debug, Serialize)]
pub struct BulkDeleteResponse {
    pub message: String,
    pub count: u64,
}

pub async fn list(State(state): State<Arc<AppState>>) -> Result<Json<UsersResponse>, ApiError> {
    let users = state
        .store()
        .list_users()
        .await
        .map_err(|err| ApiError::DatabaseError(err.to_string()))?;

    Ok(Json(UsersResponse { users }))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    validate_id(id)?;
    validate_username(&payload.username)?;

    let updated = state
        .store()
        .update_username(id, payload.username.trim())
        .await
        .map_err(|err| ApiError::from_store(err, "Username already exists"))?;

    if !updated {
        return Err(ApiError::not_found("User"));
    }

    Ok(Json(MessageResponse {
        message: "User updated successfully".to_string(),
    }))
}

/// Delete one account. The caller cannot remove themselves; losing the
/// session that authorized the request mid-flight is not worth supporting.
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthorizedContext>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    validate_id(id)?;

    if id == ctx.user_id {
        return Err(ApiError::validation("Cannot delete your own account"));
    }

    let deleted = state
        .store()
        .delete_user(id)
        .await
        .map_err(|err| ApiError::DatabaseError(err.to_string()))?;

    if !deleted {
        return Err(ApiError::not_found("User"));
    }

    info!(user_id = id, by = %ctx.username, "Deleted user");

    Ok(Json(MessageResponse {
        message: "User deleted successfully".to_string(),
    }))
}

/// Delete a batch of accounts in one statement. Rejected outright when the
/// list is empty or names the caller.
pub async fn bulk_delete(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthorizedContext>,
    Json(payload): Json<BulkDeleteRequest>,
) -> Result<Json<BulkDeleteResponse>, ApiError> {
    if payload.user_ids.is_empty() {
        return Err(ApiError::validation("No user ids provided"));
    }

    if payload.user_ids.contains(&ctx.user_id) {
        return Err(ApiError::validation("Cannot delete your own account"));
    }

    let count = state
        .store()
        .delete_users(&payload.user_ids)
        .await
        .map_err(|err| ApiError::DatabaseError(err.to_string()))?;

    info!(count, by = %ctx.username, "Bulk deleted users");

    Ok(Json(BulkDeleteResponse {
        message: format!("{} users deleted successfully", count),
        count,
    }))
}
