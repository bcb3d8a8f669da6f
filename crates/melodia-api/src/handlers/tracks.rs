use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use melodia_core::models::TrackResponse;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTrackRequest {
    pub title: String,
    pub artist: String,
    pub duration_secs: i32,
    pub audio_media_id: Uuid,
    pub cover_media_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/tracks",
    tag = "catalog",
    request_body = CreateTrackRequest,
    responses(
        (status = 201, description = "Track created", body = TrackResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_track(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateTrackRequest>,
) -> Result<(StatusCode, Json<TrackResponse>), HttpAppError> {
    let track = state
        .catalog
        .create_track(
            req.title,
            req.artist,
            req.duration_secs,
            req.audio_media_id,
            req.cover_media_id,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(TrackResponse::from(track))))
}

#[utoipa::path(
    get,
    path = "/api/v1/tracks/search",
    tag = "catalog",
    params(
        ("q" = Option<String>, Query, description = "Substring matched against title and artist")
    ),
    responses(
        (status = 200, description = "Matching tracks", body = [TrackResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn search_tracks(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<TrackResponse>>, HttpAppError> {
    let tracks = state.catalog.search(&query.q).await?;
    Ok(Json(tracks.into_iter().map(TrackResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/tracks/{id}",
    tag = "catalog",
    params(
        ("id" = Uuid, Path, description = "Track identifier")
    ),
    responses(
        (status = 200, description = "Track", body = TrackResponse),
        (status = 404, description = "Unknown track id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_track(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<TrackResponse>, HttpAppError> {
    let track = state.catalog.get_track(id).await?;
    Ok(Json(TrackResponse::from(track)))
}
