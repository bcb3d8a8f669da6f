use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub cover_url: String,
    pub owner_id: Uuid,
    pub is_user_playlist: bool,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub tracks: Vec<PlaylistTrack>,
}

/// Membership of a track in a playlist. Ordering is a bare position integer.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlaylistTrack {
    pub track_id: Uuid,
    pub position: i32,
    pub added_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PlaylistResponse {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    pub is_user_playlist: bool,
    pub tracks: Vec<PlaylistTrack>,
}

impl From<Playlist> for PlaylistResponse {
    fn from(playlist: Playlist) -> Self {
        PlaylistResponse {
            id: playlist.id,
            name: playlist.name,
            description: if playlist.description.is_empty() {
                None
            } else {
                Some(playlist.description)
            },
            cover_url: if playlist.cover_url.is_empty() {
                None
            } else {
                Some(playlist.cover_url)
            },
            is_user_playlist: playlist.is_user_playlist,
            tracks: playlist.tracks,
        }
    }
}
