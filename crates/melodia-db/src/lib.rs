//! Database repositories for the data access layer
//!
//! One repository per aggregate, each holding a clone of the shared
//! `PgPool`. Queries are dynamic (`sqlx::query`/`query_as`) so builds do not
//! require a live DATABASE_URL; rows land in private `FromRow` structs and
//! convert into the domain models from `melodia-core`.

mod history;
mod media;
mod playlist;
mod track;
mod user;

pub use history::HistoryRepository;
pub use media::MediaRepository;
pub use playlist::PlaylistRepository;
pub use track::TrackRepository;
pub use user::UserRepository;
