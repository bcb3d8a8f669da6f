use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::media::stream_path;

/// Catalog entry for one playable track. Audio and cover artwork are stored
/// as media ids; clients resolve them through the media stream endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: Uuid,
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub duration_secs: i32,
    pub audio_media_id: Uuid,
    pub cover_media_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TrackResponse {
    pub id: Uuid,
    pub title: String,
    pub artist: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    pub duration_secs: i32,
    pub audio_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
}

impl From<Track> for TrackResponse {
    fn from(track: Track) -> Self {
        TrackResponse {
            id: track.id,
            title: track.title,
            artist: track.artist,
            album: track.album,
            duration_secs: track.duration_secs,
            audio_url: stream_path(track.audio_media_id),
            cover_url: track.cover_media_id.map(stream_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_track(cover: Option<Uuid>) -> Track {
        Track {
            id: Uuid::new_v4(),
            title: "Night Drive".to_string(),
            artist: "The Frequencies".to_string(),
            album: None,
            duration_secs: 214,
            audio_media_id: Uuid::new_v4(),
            cover_media_id: cover,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn response_links_audio_through_stream_endpoint() {
        let track = sample_track(None);
        let audio_id = track.audio_media_id;
        let resp = TrackResponse::from(track);
        assert_eq!(resp.audio_url, format!("/api/v1/media/stream/{}", audio_id));
        assert!(resp.cover_url.is_none());
    }

    #[test]
    fn response_carries_cover_url_when_present() {
        let cover_id = Uuid::new_v4();
        let resp = TrackResponse::from(sample_track(Some(cover_id)));
        assert_eq!(
            resp.cover_url.as_deref(),
            Some(format!("/api/v1/media/stream/{}", cover_id).as_str())
        );
    }
}
