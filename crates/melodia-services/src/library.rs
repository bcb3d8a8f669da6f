//! Playlist library use-cases.

use chrono::Utc;
use melodia_core::constants::DEMO_USER_ID;
use melodia_core::models::Playlist;
use melodia_core::AppError;
use melodia_db::PlaylistRepository;
use uuid::Uuid;

#[derive(Clone)]
pub struct LibraryService {
    playlists: PlaylistRepository,
}

impl LibraryService {
    pub fn new(playlists: PlaylistRepository) -> Self {
        Self { playlists }
    }

    pub async fn user_playlists(&self, user_id: Uuid) -> Result<Vec<Playlist>, AppError> {
        self.playlists.list_for_owner(user_id).await
    }

    pub async fn featured_playlists(&self) -> Result<Vec<Playlist>, AppError> {
        self.playlists.list_featured().await
    }

    pub async fn playlist(&self, id: Uuid) -> Result<Playlist, AppError> {
        self.playlists.get(id).await
    }

    /// Create a starter playlist for the demo user when they have none.
    /// Runs at startup; failures are logged and ignored.
    pub async fn seed_demo_data(&self) {
        let existing = match self.playlists.list_for_owner(DEMO_USER_ID).await {
            Ok(playlists) => playlists,
            Err(err) => {
                tracing::warn!(error = %err, "failed to check demo playlists");
                return;
            }
        };

        if !existing.is_empty() {
            return;
        }

        let now = Utc::now();
        let favorites = Playlist {
            id: Uuid::new_v4(),
            name: "Favorites".to_string(),
            description: "My top tracks".to_string(),
            cover_url: String::new(),
            owner_id: DEMO_USER_ID,
            is_user_playlist: true,
            is_public: false,
            created_at: now,
            updated_at: now,
            tracks: Vec::new(),
        };

        if let Err(err) = self.playlists.create(&favorites).await {
            tracing::warn!(error = %err, "failed to seed demo playlist");
        }
    }
}
