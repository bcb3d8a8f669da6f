//! Playback state and scrobbling use-cases.

use chrono::Utc;
use melodia_core::models::{HistoryEntry, PlayerState};
use melodia_core::AppError;
use melodia_db::HistoryRepository;
use uuid::Uuid;

/// Record a listen once playback stopped or ran past 30 seconds.
fn should_scrobble(status: &str, position_secs: i32) -> bool {
    status == "stopped" || position_secs > 30
}

#[derive(Clone)]
pub struct HistoryService {
    history: HistoryRepository,
}

impl HistoryService {
    pub fn new(history: HistoryRepository) -> Self {
        Self { history }
    }

    /// Upsert the user's player state, then scrobble when the report
    /// qualifies. A failed history insert does not fail the report.
    pub async fn report_state(
        &self,
        user_id: Uuid,
        track_id: Uuid,
        context_id: Option<Uuid>,
        context_type: String,
        position_secs: i32,
        status: String,
    ) -> Result<(), AppError> {
        let state = PlayerState {
            user_id,
            track_id,
            context_id,
            context_type,
            position_secs,
            status,
            updated_at: Utc::now(),
        };

        self.history.upsert_state(&state).await?;

        if should_scrobble(&state.status, state.position_secs) {
            let entry = HistoryEntry {
                id: Uuid::nil(),
                user_id,
                track_id,
                played_at: Utc::now(),
                duration_played_secs: state.position_secs,
            };
            if let Err(err) = self.history.add_entry(entry).await {
                tracing::warn!(error = %err, user_id = %user_id, "failed to record history entry");
            }
        }

        Ok(())
    }

    pub async fn last_state(&self, user_id: Uuid) -> Result<PlayerState, AppError> {
        self.history.last_state(user_id).await
    }

    pub async fn history(
        &self,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<HistoryEntry>, AppError> {
        self.history.list_entries(user_id, limit, offset).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrobbles_on_stop_regardless_of_position() {
        assert!(should_scrobble("stopped", 0));
        assert!(should_scrobble("stopped", 5));
    }

    #[test]
    fn scrobbles_past_thirty_seconds() {
        assert!(should_scrobble("playing", 31));
        assert!(should_scrobble("paused", 120));
    }

    #[test]
    fn skips_short_listens() {
        assert!(!should_scrobble("playing", 30));
        assert!(!should_scrobble("paused", 3));
    }
}
