use chrono::{DateTime, Utc};
use melodia_core::models::MediaFile;
use melodia_core::AppError;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, sqlx::FromRow)]
struct MediaFileRow {
    id: Uuid,
    filename: String,
    bucket_name: String,
    object_key: String,
    content_type: String,
    size_bytes: i64,
    created_at: DateTime<Utc>,
}

impl From<MediaFileRow> for MediaFile {
    fn from(row: MediaFileRow) -> Self {
        MediaFile {
            id: row.id,
            filename: row.filename,
            bucket_name: row.bucket_name,
            object_key: row.object_key,
            content_type: row.content_type,
            size_bytes: row.size_bytes,
            created_at: row.created_at,
        }
    }
}

/// Durable mapping from asset id to storage location.
///
/// Append-only: media rows are inserted once and never updated or deleted
/// through this repository.
#[derive(Clone)]
pub struct MediaRepository {
    pool: PgPool,
}

impl MediaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new media record. The orchestrator is expected to set the id;
    /// a nil id gets a fresh one here as a defensive default.
    pub async fn save(&self, mut file: MediaFile) -> Result<MediaFile, AppError> {
        if file.id.is_nil() {
            file.id = Uuid::new_v4();
        }

        sqlx::query(
            r#"
            INSERT INTO media_files (id, filename, bucket_name, object_key, content_type, size_bytes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(file.id)
        .bind(&file.filename)
        .bind(&file.bucket_name)
        .bind(&file.object_key)
        .bind(&file.content_type)
        .bind(file.size_bytes)
        .bind(file.created_at)
        .execute(&self.pool)
        .await?;

        Ok(file)
    }

    pub async fn get(&self, id: Uuid) -> Result<MediaFile, AppError> {
        let row = sqlx::query_as::<_, MediaFileRow>(
            r#"
            SELECT id, filename, bucket_name, object_key, content_type, size_bytes, created_at
            FROM media_files
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(MediaFile::from)
            .ok_or_else(|| AppError::NotFound("Media file not found".to_string()))
    }
}
