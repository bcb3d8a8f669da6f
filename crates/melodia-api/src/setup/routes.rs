//! Router construction.

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::state::AppState;
use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::{Json, Router};
use melodia_core::constants::API_PREFIX;
use melodia_core::Config;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

pub fn build_router(config: &Config, state: Arc<AppState>) -> Result<Router> {
    let api = Router::new()
        .route("/media", post(handlers::media::upload_media))
        .route("/media/stream/{id}", get(handlers::media::get_stream_url))
        .route("/tracks", post(handlers::tracks::create_track))
        .route("/tracks/search", get(handlers::tracks::search_tracks))
        .route("/tracks/{id}", get(handlers::tracks::get_track))
        .route("/playlists/me", get(handlers::playlists::my_playlists))
        .route(
            "/playlists/featured",
            get(handlers::playlists::featured_playlists),
        )
        .route("/playlists/{id}", get(handlers::playlists::get_playlist))
        .route(
            "/player/state",
            post(handlers::history::report_state).get(handlers::history::get_last_state),
        )
        .route("/history", get(handlers::history::get_history))
        .route(
            "/profile",
            get(handlers::profile::get_profile).patch(handlers::profile::update_profile),
        );

    let router = Router::new()
        .nest(API_PREFIX, api)
        .route("/health", get(handlers::health::health_check))
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(DefaultBodyLimit::max(config.max_upload_size_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors(config)?)
        .with_state(state);

    Ok(router)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

fn build_cors(config: &Config) -> Result<CorsLayer> {
    if config.cors_origins.iter().any(|origin| origin == "*") {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    }

    let origins = config
        .cors_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any))
}
