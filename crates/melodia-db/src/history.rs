use chrono::{DateTime, Utc};
use melodia_core::models::{HistoryEntry, PlayerState};
use melodia_core::AppError;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, sqlx::FromRow)]
struct PlayerStateRow {
    user_id: Uuid,
    track_id: Uuid,
    context_id: Option<Uuid>,
    context_type: String,
    position_secs: i32,
    status: String,
    updated_at: DateTime<Utc>,
}

impl From<PlayerStateRow> for PlayerState {
    fn from(row: PlayerStateRow) -> Self {
        PlayerState {
            user_id: row.user_id,
            track_id: row.track_id,
            context_id: row.context_id,
            context_type: row.context_type,
            position_secs: row.position_secs,
            status: row.status,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct HistoryEntryRow {
    id: Uuid,
    user_id: Uuid,
    track_id: Uuid,
    played_at: DateTime<Utc>,
    duration_played_secs: i32,
}

impl From<HistoryEntryRow> for HistoryEntry {
    fn from(row: HistoryEntryRow) -> Self {
        HistoryEntry {
            id: row.id,
            user_id: row.user_id,
            track_id: row.track_id,
            played_at: row.played_at,
            duration_played_secs: row.duration_played_secs,
        }
    }
}

#[derive(Clone)]
pub struct HistoryRepository {
    pool: PgPool,
}

impl HistoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Replace the user's current player state (one row per user).
    pub async fn upsert_state(&self, state: &PlayerState) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO player_states (user_id, track_id, context_id, context_type, position_secs, status, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (user_id) DO UPDATE SET
                track_id = EXCLUDED.track_id,
                context_id = EXCLUDED.context_id,
                context_type = EXCLUDED.context_type,
                position_secs = EXCLUDED.position_secs,
                status = EXCLUDED.status,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(state.user_id)
        .bind(state.track_id)
        .bind(state.context_id)
        .bind(&state.context_type)
        .bind(state.position_secs)
        .bind(&state.status)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn last_state(&self, user_id: Uuid) -> Result<PlayerState, AppError> {
        let row = sqlx::query_as::<_, PlayerStateRow>(
            r#"
            SELECT user_id, track_id, context_id, context_type, position_secs, status, updated_at
            FROM player_states
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(PlayerState::from)
            .ok_or_else(|| AppError::NotFound("Player state not found".to_string()))
    }

    pub async fn add_entry(&self, mut entry: HistoryEntry) -> Result<(), AppError> {
        if entry.id.is_nil() {
            entry.id = Uuid::new_v4();
        }

        sqlx::query(
            r#"
            INSERT INTO history_log (id, user_id, track_id, played_at, duration_played_secs)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(entry.id)
        .bind(entry.user_id)
        .bind(entry.track_id)
        .bind(Utc::now())
        .bind(entry.duration_played_secs)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn list_entries(
        &self,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<HistoryEntry>, AppError> {
        let rows = sqlx::query_as::<_, HistoryEntryRow>(
            r#"
            SELECT id, user_id, track_id, played_at, duration_played_secs
            FROM history_log
            WHERE user_id = $1
            ORDER BY played_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(HistoryEntry::from).collect())
    }
}
