use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::Json;
use melodia_core::constants::DEMO_USER_ID;
use melodia_core::models::PlaylistResponse;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/v1/playlists/me",
    tag = "library",
    responses(
        (status = 200, description = "Playlists of the current user", body = [PlaylistResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn my_playlists(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PlaylistResponse>>, HttpAppError> {
    let playlists = state.library.user_playlists(DEMO_USER_ID).await?;
    Ok(Json(
        playlists.into_iter().map(PlaylistResponse::from).collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/playlists/featured",
    tag = "library",
    responses(
        (status = 200, description = "Editorial playlists", body = [PlaylistResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn featured_playlists(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PlaylistResponse>>, HttpAppError> {
    let playlists = state.library.featured_playlists().await?;
    Ok(Json(
        playlists.into_iter().map(PlaylistResponse::from).collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/playlists/{id}",
    tag = "library",
    params(
        ("id" = Uuid, Path, description = "Playlist identifier")
    ),
    responses(
        (status = 200, description = "Playlist with ordered tracks", body = PlaylistResponse),
        (status = 404, description = "Unknown playlist id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_playlist(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<PlaylistResponse>, HttpAppError> {
    let playlist = state.library.playlist(id).await?;
    Ok(Json(PlaylistResponse::from(playlist)))
}
