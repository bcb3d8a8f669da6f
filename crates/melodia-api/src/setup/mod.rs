//! Application setup and initialization
//!
//! Startup wiring extracted from main.rs: telemetry, database pool and
//! migrations, object-storage client, service construction, and routes.

pub mod database;
pub mod routes;
pub mod server;
pub mod storage;

use crate::state::AppState;
use anyhow::Result;
use melodia_core::Config;
use melodia_db::{
    HistoryRepository, MediaRepository, PlaylistRepository, TrackRepository, UserRepository,
};
use melodia_services::{
    CatalogService, HistoryService, LibraryService, MediaService, UserService,
};
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    crate::telemetry::init_telemetry();
    tracing::info!(
        environment = %config.environment,
        port = config.server_port,
        "Configuration loaded"
    );

    let pool = database::setup_database(&config).await?;
    let object_storage = storage::setup_storage(&config)?;

    let media = MediaService::new(
        Arc::new(MediaRepository::new(pool.clone())),
        object_storage,
        config.storage.buckets.clone(),
    );
    // Buckets may be pre-provisioned; init failures are logged inside.
    media.init_buckets().await;

    let catalog = CatalogService::new(TrackRepository::new(pool.clone()));
    let library = LibraryService::new(PlaylistRepository::new(pool.clone()));
    library.seed_demo_data().await;
    let history = HistoryService::new(HistoryRepository::new(pool.clone()));
    let users = UserService::new(UserRepository::new(pool.clone()));

    let state = Arc::new(AppState {
        config: config.clone(),
        pool,
        media,
        catalog,
        library,
        history,
        users,
    });

    let router = routes::build_router(&config, state.clone())?;

    Ok((state, router))
}
