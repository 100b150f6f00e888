use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::api::AppState;
use crate::api::error::ApiError;
use crate::api::validation::{require_non_empty, validate_id};
use crate::db::{BlogPost, PostDraft};

#[derive(Debug, Deserialize)]
pub struct PostSearchQuery {
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PostsResponse {
    pub posts: Vec<BlogPost>,
}

#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub post: BlogPost,
}

/// Full post record for create and update; there are no partial updates.
#[derive(Debug, Deserialize)]
pub struct PostPayload {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub content: String,
    pub thumbnail: Option<String>,
    pub date: String,
    #[serde(default)]
    pub published: bool,
}

impl PostPayload {
    fn into_draft(self) -> Result<PostDraft, ApiError> {
        require_non_empty(&self.title, "Title")?;
        require_non_empty(&self.slug, "Slug")?;
        require_non_empty(&self.description, "Description")?;
        require_non_empty(&self.content, "Content")?;
        require_non_empty(&self.date, "Date")?;

        Ok(PostDraft {
            title: self.title,
            slug: self.slug,
            description: self.description,
            content: self.content,
            thumbnail: self.thumbnail,
            date: self.date,
            published: self.published,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct PostCreatedResponse {
    pub message: String,
    #[serde(rename = "postId")]
    pub post_id: i32,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Public listing; drafts stay hidden, optional `?search=` term matches
/// title, description or content.
pub async fn list_published(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PostSearchQuery>,
) -> Result<Json<PostsResponse>, ApiError> {
    let search = query.search.as_deref().map(str::trim).filter(|s| !s.is_empty());

    let posts = state
        .store()
        .list_posts(true, search)
        .await
        .map_err(|err| ApiError::DatabaseError(err.to_string()))?;

    Ok(Json(PostsResponse { posts }))
}

pub async fn get_published(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<PostResponse>, ApiError> {
    let post = state
        .store()
        .get_post_by_slug(&slug, true)
        .await
        .map_err(|err| ApiError::DatabaseError(err.to_string()))?
        .ok_or_else(|| ApiError::not_found("Post"))?;

    Ok(Json(PostResponse { post }))
}

/// Admin listing; includes unpublished drafts.
pub async fn list_all(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PostsResponse>, ApiError> {
    let posts = state
        .store()
        .list_posts(false, None)
        .await
        .map_err(|err| ApiError::DatabaseError(err.to_string()))?;

    Ok(Json(PostsResponse { posts }))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<PostPayload>,
) -> Result<(StatusCode, Json<PostCreatedResponse>), ApiError> {
    let draft = payload.into_draft()?;

    let post_id = state
        .store()
        .create_post(&draft)
        .await
        .map_err(|err| ApiError::from_store(err, "A post with this slug already exists"))?;

    info!(post_id, slug = %draft.slug, "Created blog post");

    Ok((
        StatusCode::CREATED,
        Json(PostCreatedResponse {
            message: "Post created successfully".to_string(),
            post_id,
        }),
    ))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<PostPayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    validate_id(id)?;
    let draft = payload.into_draft()?;

    let updated = state
        .store()
        .update_post(id, &draft)
        .await
        .map_err(|err| ApiError::from_store(err, "A post with this slug already exists"))?;

    if !updated {
        return Err(ApiError::not_found("Post"));
    }

    Ok(Json(MessageResponse {
        message: "Post updated successfully".to_string(),
    }))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    validate_id(id)?;

    let deleted = state
        .store()
        .delete_post(id)
        .await
        .map_err(|err| ApiError::DatabaseError(err.to_string()))?;

    if !deleted {
        return Err(ApiError::not_found("Post"));
    }

    Ok(Json(MessageResponse {
        message: "Post deleted successfully".to_string(),
    }))
}
