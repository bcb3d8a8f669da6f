//! HTTP mapping for application errors.
//!
//! `AppError` carries its own presentation metadata; this module only turns
//! that metadata into an Axum response and logs at the level the error
//! declares for itself.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use melodia_core::{AppError, ErrorMetadata, LogLevel};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

/// Newtype so `AppError` can implement Axum's `IntoResponse`.
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let err = self.0;

        match err.log_level() {
            LogLevel::Error => {
                tracing::error!(error = %err, code = err.error_code(), "request failed")
            }
            LogLevel::Warn => {
                tracing::warn!(error = %err, code = err.error_code(), "request failed")
            }
            LogLevel::Debug => {
                tracing::debug!(error = %err, code = err.error_code(), "request rejected")
            }
        }

        let status = StatusCode::from_u16(err.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = Json(ErrorResponse {
            code: err.error_code().to_string(),
            message: err.client_message(),
        });

        (status, body).into_response()
    }
}
