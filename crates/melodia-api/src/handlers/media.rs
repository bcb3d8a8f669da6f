use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use bytes::Bytes;
use melodia_core::models::{MediaKind, MediaUploadResponse, StreamUrlResponse};
use melodia_core::AppError;
use std::sync::Arc;
use uuid::Uuid;

struct FilePart {
    data: Bytes,
    filename: String,
    content_type: String,
}

/// Upload a media file.
///
/// Expects a multipart body with a `file` part (the payload) and a `type`
/// part selecting the media kind (`audio` or `image`; `video` is rejected).
#[utoipa::path(
    post,
    path = "/api/v1/media",
    tag = "media",
    responses(
        (status = 201, description = "File ingested", body = MediaUploadResponse),
        (status = 400, description = "Invalid or unsupported input", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn upload_media(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<MediaUploadResponse>), HttpAppError> {
    let mut file: Option<FilePart> = None;
    let mut kind: Option<MediaKind> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("malformed multipart body: {}", e)))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field.bytes().await.map_err(|e| {
                    AppError::InvalidInput(format!("failed to read file part: {}", e))
                })?;
                file = Some(FilePart {
                    data,
                    filename,
                    content_type,
                });
            }
            Some("type") => {
                let text = field.text().await.map_err(|e| {
                    AppError::InvalidInput(format!("failed to read type part: {}", e))
                })?;
                kind = Some(text.trim().parse()?);
            }
            _ => {}
        }
    }

    let part = file.ok_or_else(|| AppError::InvalidInput("missing 'file' part".to_string()))?;
    let kind = kind.ok_or_else(|| AppError::InvalidInput("missing 'type' part".to_string()))?;

    let created = state
        .media
        .upload_file(part.data, &part.filename, &part.content_type, kind)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MediaUploadResponse {
            media_id: created.id,
        }),
    ))
}

/// Resolve a media id to a presigned stream URL (valid for one hour).
#[utoipa::path(
    get,
    path = "/api/v1/media/stream/{id}",
    tag = "media",
    params(
        ("id" = Uuid, Path, description = "Media file identifier")
    ),
    responses(
        (status = 200, description = "Presigned URL", body = StreamUrlResponse),
        (status = 404, description = "Unknown media id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_stream_url(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<StreamUrlResponse>, HttpAppError> {
    let url = state.media.stream_url(id).await?;
    Ok(Json(StreamUrlResponse { url }))
}
