use axum::{
    Json,
    extract::{Multipart, State},
};
use serde::Serialize;
use std::sync::Arc;

use crate::api::AppState;
use crate::api::error::ApiError;
use crate::services::{UploadError, UploadKind};

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub filename: String,

    /// Path relative to the upload root, ready to store on a post or item.
    pub path: String,
}

struct IncomingFile {
    name: String,
    content_type: Option<String>,
    bytes: Vec<u8>,
}

/// Accept one image from a multipart form. The `image` field carries the
/// file; an optional `uploadType` field routes it to the article or skin
/// directory.
pub async fn upload_image(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut file: Option<IncomingFile> = None;
    let mut kind_tag: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ApiError::validation(err.to_string()))?
    {
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("image") => {
                let name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|err| ApiError::validation(err.to_string()))?;

                file = Some(IncomingFile {
                    name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            Some("uploadType") => {
                let value = field
                    .text()
                    .await
                    .map_err(|err| ApiError::validation(err.to_string()))?;
                kind_tag = Some(value);
            }
            _ => {}
        }
    }

    let file = file.ok_or_else(|| ApiError::validation("No file uploaded"))?;
    let kind = UploadKind::parse(kind_tag.as_deref())
        .ok_or_else(|| ApiError::validation("Invalid upload type"))?;

    let stored = state
        .uploads()
        .save(kind, &file.name, file.content_type.as_deref(), &file.bytes)
        .await
        .map_err(|err| match err {
            UploadError::UnsupportedType | UploadError::TooLarge => {
                ApiError::validation(err.to_string())
            }
            UploadError::Io(io) => ApiError::internal(io.to_string()),
        })?;

    Ok(Json(UploadResponse {
        message: "File uploaded successfully".to_string(),
        filename: stored.filename,
        path: stored.path,
    }))
}
