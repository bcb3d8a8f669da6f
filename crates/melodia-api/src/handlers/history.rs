use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use melodia_core::constants::DEMO_USER_ID;
use melodia_core::models::{HistoryEntryResponse, PlayerStateResponse};
use melodia_core::AppError;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

const DEFAULT_HISTORY_LIMIT: i64 = 20;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReportStateRequest {
    pub track_id: Uuid,
    pub context_id: Option<Uuid>,
    pub context_type: Option<String>,
    #[serde(default)]
    pub position_secs: i32,
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[utoipa::path(
    post,
    path = "/api/v1/player/state",
    tag = "history",
    request_body = ReportStateRequest,
    responses(
        (status = 204, description = "State recorded"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn report_state(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ReportStateRequest>,
) -> Result<StatusCode, HttpAppError> {
    state
        .history
        .report_state(
            DEMO_USER_ID,
            req.track_id,
            req.context_id,
            req.context_type.unwrap_or_default(),
            req.position_secs,
            req.status,
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Last reported player state; 204 when the user never reported one.
#[utoipa::path(
    get,
    path = "/api/v1/player/state",
    tag = "history",
    responses(
        (status = 200, description = "Current player state", body = PlayerStateResponse),
        (status = 204, description = "No state recorded yet"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_last_state(State(state): State<Arc<AppState>>) -> Result<Response, HttpAppError> {
    match state.history.last_state(DEMO_USER_ID).await {
        Ok(player_state) => Ok(Json(PlayerStateResponse::from(player_state)).into_response()),
        Err(AppError::NotFound(_)) => Ok(StatusCode::NO_CONTENT.into_response()),
        Err(err) => Err(err.into()),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/history",
    tag = "history",
    params(
        ("limit" = Option<i64>, Query, description = "Page size (default 20)"),
        ("offset" = Option<i64>, Query, description = "Page offset (default 0)")
    ),
    responses(
        (status = 200, description = "Playback history, newest first", body = [HistoryEntryResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_history(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<HistoryEntryResponse>>, HttpAppError> {
    let limit = query.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    let offset = query.offset.unwrap_or(0);

    let entries = state.history.history(DEMO_USER_ID, limit, offset).await?;
    Ok(Json(
        entries.into_iter().map(HistoryEntryResponse::from).collect(),
    ))
}
