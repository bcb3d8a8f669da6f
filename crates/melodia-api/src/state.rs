//! Shared application state.
//!
//! Handlers receive `Arc<AppState>` through Axum's `State` extractor. The
//! services inside are cheap to clone; the pool and the S3 client they wrap
//! are safe for concurrent use across requests.

use melodia_core::Config;
use melodia_services::{CatalogService, HistoryService, LibraryService, MediaService, UserService};
use sqlx::PgPool;

pub struct AppState {
    pub config: Config,
    pub pool: PgPool,
    pub media: MediaService,
    pub catalog: CatalogService,
    pub library: LibraryService,
    pub history: HistoryService,
    pub users: UserService,
}
