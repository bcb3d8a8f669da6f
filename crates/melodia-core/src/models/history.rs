use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Last reported playback position for one user. One row per user, replaced
/// on every report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    pub user_id: Uuid,
    pub track_id: Uuid,
    pub context_id: Option<Uuid>,
    pub context_type: String,
    pub position_secs: i32,
    pub status: String,
    pub updated_at: DateTime<Utc>,
}

/// One scrobbled listen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub track_id: Uuid,
    pub played_at: DateTime<Utc>,
    pub duration_played_secs: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PlayerStateResponse {
    pub track_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_type: Option<String>,
    pub position_secs: i32,
    pub status: String,
    pub updated_at: DateTime<Utc>,
}

impl From<PlayerState> for PlayerStateResponse {
    fn from(state: PlayerState) -> Self {
        PlayerStateResponse {
            track_id: state.track_id,
            context_id: state.context_id,
            context_type: if state.context_type.is_empty() {
                None
            } else {
                Some(state.context_type)
            },
            position_secs: state.position_secs,
            status: state.status,
            updated_at: state.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HistoryEntryResponse {
    pub track_id: Uuid,
    pub played_at: DateTime<Utc>,
    pub duration_played_secs: i32,
}

impl From<HistoryEntry> for HistoryEntryResponse {
    fn from(entry: HistoryEntry) -> Self {
        HistoryEntryResponse {
            track_id: entry.track_id,
            played_at: entry.played_at,
            duration_played_secs: entry.duration_played_secs,
        }
    }
}
