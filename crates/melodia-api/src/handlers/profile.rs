use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use melodia_core::constants::DEMO_USER_ID;
use melodia_core::models::{UpdateProfile, UserResponse};
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/v1/profile",
    tag = "profile",
    responses(
        (status = 200, description = "Current user profile", body = UserResponse),
        (status = 404, description = "Unknown user", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
) -> Result<Json<UserResponse>, HttpAppError> {
    let user = state.users.get_profile(DEMO_USER_ID).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Partial profile update; absent fields are left unchanged.
#[utoipa::path(
    patch,
    path = "/api/v1/profile",
    tag = "profile",
    request_body = UpdateProfile,
    responses(
        (status = 200, description = "Updated profile", body = UserResponse),
        (status = 400, description = "Validation failure", body = ErrorResponse),
        (status = 404, description = "Unknown user", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    Json(input): Json<UpdateProfile>,
) -> Result<Json<UserResponse>, HttpAppError> {
    let user = state.users.update_profile(DEMO_USER_ID, input).await?;
    Ok(Json(UserResponse::from(user)))
}
