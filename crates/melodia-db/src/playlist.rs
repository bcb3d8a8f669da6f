use chrono::{DateTime, Utc};
use melodia_core::models::{Playlist, PlaylistTrack};
use melodia_core::AppError;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, sqlx::FromRow)]
struct PlaylistRow {
    id: Uuid,
    name: String,
    description: Option<String>,
    cover_url: Option<String>,
    owner_id: Uuid,
    is_user_playlist: bool,
    is_public: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<PlaylistRow> for Playlist {
    fn from(row: PlaylistRow) -> Self {
        Playlist {
            id: row.id,
            name: row.name,
            description: row.description.unwrap_or_default(),
            cover_url: row.cover_url.unwrap_or_default(),
            owner_id: row.owner_id,
            is_user_playlist: row.is_user_playlist,
            is_public: row.is_public,
            created_at: row.created_at,
            updated_at: row.updated_at,
            tracks: Vec::new(),
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PlaylistTrackRow {
    track_id: Uuid,
    position: i32,
    added_at: DateTime<Utc>,
}

impl From<PlaylistTrackRow> for PlaylistTrack {
    fn from(row: PlaylistTrackRow) -> Self {
        PlaylistTrack {
            track_id: row.track_id,
            position: row.position,
            added_at: row.added_at,
        }
    }
}

#[derive(Clone)]
pub struct PlaylistRepository {
    pool: PgPool,
}

impl PlaylistRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Playlists owned by `owner_id`, newest first. Track lists are not
    /// loaded here; `get` returns them for a single playlist.
    pub async fn list_for_owner(&self, owner_id: Uuid) -> Result<Vec<Playlist>, AppError> {
        let rows = sqlx::query_as::<_, PlaylistRow>(
            r#"
            SELECT id, name, description, cover_url, owner_id, is_user_playlist, is_public, created_at, updated_at
            FROM playlists
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Playlist::from).collect())
    }

    /// Editorial playlists (not owned by a user).
    pub async fn list_featured(&self) -> Result<Vec<Playlist>, AppError> {
        let rows = sqlx::query_as::<_, PlaylistRow>(
            r#"
            SELECT id, name, description, cover_url, owner_id, is_user_playlist, is_public, created_at, updated_at
            FROM playlists
            WHERE is_user_playlist = false
            LIMIT 20
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Playlist::from).collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<Playlist, AppError> {
        let row = sqlx::query_as::<_, PlaylistRow>(
            r#"
            SELECT id, name, description, cover_url, owner_id, is_user_playlist, is_public, created_at, updated_at
            FROM playlists
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let mut playlist = row
            .map(Playlist::from)
            .ok_or_else(|| AppError::NotFound("Playlist not found".to_string()))?;

        let tracks = sqlx::query_as::<_, PlaylistTrackRow>(
            r#"
            SELECT track_id, position, added_at
            FROM playlist_tracks
            WHERE playlist_id = $1
            ORDER BY position ASC
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        playlist.tracks = tracks.into_iter().map(PlaylistTrack::from).collect();
        Ok(playlist)
    }

    pub async fn create(&self, playlist: &Playlist) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO playlists (id, name, description, owner_id, is_user_playlist, is_public)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(playlist.id)
        .bind(&playlist.name)
        .bind(&playlist.description)
        .bind(playlist.owner_id)
        .bind(playlist.is_user_playlist)
        .bind(playlist.is_public)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
