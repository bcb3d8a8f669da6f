//! Track catalog use-cases.

use chrono::Utc;
use melodia_core::models::Track;
use melodia_core::AppError;
use melodia_db::TrackRepository;
use uuid::Uuid;

#[derive(Clone)]
pub struct CatalogService {
    tracks: TrackRepository,
}

impl CatalogService {
    pub fn new(tracks: TrackRepository) -> Self {
        Self { tracks }
    }

    /// Substring search over title and artist. An empty query short-circuits
    /// to an empty result without touching the database.
    pub async fn search(&self, query: &str) -> Result<Vec<Track>, AppError> {
        if query.is_empty() {
            return Ok(Vec::new());
        }
        self.tracks.search(query).await
    }

    pub async fn create_track(
        &self,
        title: String,
        artist: String,
        duration_secs: i32,
        audio_media_id: Uuid,
        cover_media_id: Option<Uuid>,
    ) -> Result<Track, AppError> {
        let now = Utc::now();
        let track = Track {
            id: Uuid::new_v4(),
            title,
            artist,
            album: None,
            duration_secs,
            audio_media_id,
            cover_media_id,
            created_at: now,
            updated_at: now,
        };

        self.tracks.create(&track).await?;
        Ok(track)
    }

    pub async fn get_track(&self, id: Uuid) -> Result<Track, AppError> {
        self.tracks.get(id).await
    }
}
