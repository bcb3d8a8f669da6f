use chrono::{DateTime, Utc};
use melodia_core::models::Track;
use melodia_core::AppError;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, sqlx::FromRow)]
struct TrackRow {
    id: Uuid,
    title: String,
    artist: String,
    album: Option<String>,
    duration_secs: i32,
    audio_media_id: Uuid,
    cover_media_id: Option<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<TrackRow> for Track {
    fn from(row: TrackRow) -> Self {
        Track {
            id: row.id,
            title: row.title,
            artist: row.artist,
            album: row.album,
            duration_secs: row.duration_secs,
            audio_media_id: row.audio_media_id,
            cover_media_id: row.cover_media_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Clone)]
pub struct TrackRepository {
    pool: PgPool,
}

impl TrackRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, track: &Track) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO tracks (id, title, artist, album, duration_secs, audio_media_id, cover_media_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(track.id)
        .bind(&track.title)
        .bind(&track.artist)
        .bind(&track.album)
        .bind(track.duration_secs)
        .bind(track.audio_media_id)
        .bind(track.cover_media_id)
        .bind(track.created_at)
        .bind(track.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn get(&self, id: Uuid) -> Result<Track, AppError> {
        let row = sqlx::query_as::<_, TrackRow>(
            r#"
            SELECT id, title, artist, album, duration_secs, audio_media_id, cover_media_id, created_at, updated_at
            FROM tracks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Track::from)
            .ok_or_else(|| AppError::NotFound("Track not found".to_string()))
    }

    /// Case-insensitive substring match on title or artist.
    pub async fn search(&self, query: &str) -> Result<Vec<Track>, AppError> {
        let rows = sqlx::query_as::<_, TrackRow>(
            r#"
            SELECT id, title, artist, album, duration_secs, audio_media_id, cover_media_id, created_at, updated_at
            FROM tracks
            WHERE title ILIKE '%' || $1 || '%' OR artist ILIKE '%' || $1 || '%'
            LIMIT 50
            "#,
        )
        .bind(query)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Track::from).collect())
    }
}
