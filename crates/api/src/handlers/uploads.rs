//! Handler for the `/uploads` resource.
//!
//! A pure relay: the multipart file body is forwarded to the configured
//! object store and the public URL is returned. No resizing, dimension
//! validation, or scanning happens here.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use webblog_storage::article_image_key;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/uploads/image
///
/// Accepts a multipart form with a required `file` field and returns the
/// public URL of the stored object.
pub async fn upload_image(
    auth: AuthUser,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let mut file: Option<(String, String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("image").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                file = Some((filename, content_type, data.to_vec()));
            }
            _ => {} // ignore unknown fields
        }
    }

    let (filename, content_type, data) =
        file.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;

    let key = article_image_key(chrono::Utc::now().timestamp(), &filename);
    let url = state.store.put(&key, data, &content_type).await?;

    tracing::info!(username = %auth.username, key = %key, "Image uploaded");

    Ok((StatusCode::CREATED, Json(json!({ "url": url }))))
}
