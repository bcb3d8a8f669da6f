use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::constants::API_PREFIX;
use crate::error::AppError;

/// Kind of an uploaded asset; determines the destination bucket.
///
/// `Video` exists in the wire contract but has no configured bucket, so the
/// ingestion service rejects it up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Audio,
    Image,
    Video,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Audio => "audio",
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "audio" => Ok(MediaKind::Audio),
            "image" => Ok(MediaKind::Image),
            "video" => Ok(MediaKind::Video),
            other => Err(AppError::InvalidInput(format!(
                "unknown media kind: {}",
                other
            ))),
        }
    }
}

/// Persisted record for one stored blob. Created exactly once at ingestion,
/// never updated or deleted by this workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaFile {
    pub id: Uuid,
    pub filename: String,
    pub bucket_name: String,
    pub object_key: String,
    pub content_type: String,
    pub size_bytes: i64,
    pub created_at: DateTime<Utc>,
}

/// Extension of `filename` including the leading dot, or `""` when the
/// filename carries none. `"song.mp3"` -> `".mp3"`, `"README"` -> `""`.
pub fn file_extension(filename: &str) -> &str {
    filename
        .rfind('.')
        .map(|idx| &filename[idx..])
        .unwrap_or("")
}

/// API path that resolves a media id to its presigned stream URL.
pub fn stream_path(media_id: Uuid) -> String {
    format!("{}/media/stream/{}", API_PREFIX, media_id)
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MediaUploadResponse {
    pub media_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StreamUrlResponse {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_keeps_leading_dot() {
        assert_eq!(file_extension("song.mp3"), ".mp3");
        assert_eq!(file_extension("cover.jpeg"), ".jpeg");
    }

    #[test]
    fn extension_uses_last_dot() {
        assert_eq!(file_extension("archive.tar.gz"), ".gz");
    }

    #[test]
    fn extension_empty_without_dot() {
        assert_eq!(file_extension("README"), "");
        assert_eq!(file_extension(""), "");
    }

    #[test]
    fn media_kind_round_trips_through_str() {
        for kind in [MediaKind::Audio, MediaKind::Image, MediaKind::Video] {
            assert_eq!(kind.as_str().parse::<MediaKind>().unwrap(), kind);
        }
        assert!("document".parse::<MediaKind>().is_err());
    }
}
