//! Media ingestion and retrieval.
//!
//! Upload order is fixed: blob first, metadata second. A failed upload
//! leaves no metadata row behind; a failed metadata save after a successful
//! upload leaves the blob orphaned in the bucket with no compensating
//! delete. Orphan cleanup is an out-of-band concern.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use melodia_core::constants::STREAM_URL_TTL;
use melodia_core::models::{file_extension, MediaFile, MediaKind};
use melodia_core::{AppError, BucketConfig};
use melodia_db::MediaRepository;
use melodia_storage::ObjectStorage;
use uuid::Uuid;

/// Persistence capability the media service needs from the metadata store.
#[async_trait]
pub trait MediaStore: Send + Sync {
    async fn save(&self, file: MediaFile) -> Result<MediaFile, AppError>;
    async fn get(&self, id: Uuid) -> Result<MediaFile, AppError>;
}

#[async_trait]
impl MediaStore for MediaRepository {
    async fn save(&self, file: MediaFile) -> Result<MediaFile, AppError> {
        MediaRepository::save(self, file).await
    }

    async fn get(&self, id: Uuid) -> Result<MediaFile, AppError> {
        MediaRepository::get(self, id).await
    }
}

#[derive(Clone)]
pub struct MediaService {
    store: Arc<dyn MediaStore>,
    storage: Arc<dyn ObjectStorage>,
    buckets: BucketConfig,
}

impl MediaService {
    pub fn new(
        store: Arc<dyn MediaStore>,
        storage: Arc<dyn ObjectStorage>,
        buckets: BucketConfig,
    ) -> Self {
        Self {
            store,
            storage,
            buckets,
        }
    }

    /// Ensure both configured buckets exist. Called once at startup; errors
    /// are logged and swallowed since buckets may be provisioned externally
    /// under credentials that are not allowed to create them.
    pub async fn init_buckets(&self) {
        for bucket in [&self.buckets.audio, &self.buckets.image] {
            if let Err(err) = self.storage.ensure_bucket(bucket).await {
                tracing::warn!(
                    error = %err,
                    bucket = %bucket,
                    "bucket init failed, assuming it is provisioned externally"
                );
            }
        }
    }

    /// Store an uploaded payload and persist its metadata record.
    ///
    /// Rejects kinds without a configured bucket before any side effect.
    pub async fn upload_file(
        &self,
        data: Bytes,
        filename: &str,
        content_type: &str,
        kind: MediaKind,
    ) -> Result<MediaFile, AppError> {
        let bucket = self.bucket_for(kind)?;

        let id = Uuid::new_v4();
        let object_key = format!("{}{}", id, file_extension(filename));
        let size_bytes = data.len() as i64;

        self.storage
            .put_file(&bucket, &object_key, content_type, size_bytes, data)
            .await?;

        let file = MediaFile {
            id,
            filename: filename.to_string(),
            bucket_name: bucket,
            object_key,
            content_type: content_type.to_string(),
            size_bytes,
            created_at: Utc::now(),
        };

        // If this save fails the blob above stays behind as an orphan.
        let file = self.store.save(file).await?;

        tracing::info!(
            media_id = %file.id,
            bucket = %file.bucket_name,
            key = %file.object_key,
            size_bytes = file.size_bytes,
            "media file ingested"
        );

        Ok(file)
    }

    /// Resolve a media id to a presigned URL valid for one hour.
    ///
    /// The object store is never consulted for existence: a metadata row
    /// whose blob was deleted out-of-band still yields a URL, and the read
    /// failure surfaces at the client when it dereferences it.
    pub async fn stream_url(&self, id: Uuid) -> Result<String, AppError> {
        let file = self.store.get(id).await?;

        let url = self
            .storage
            .presigned_get_url(&file.bucket_name, &file.object_key, STREAM_URL_TTL)
            .await?;

        Ok(url)
    }

    fn bucket_for(&self, kind: MediaKind) -> Result<String, AppError> {
        match kind {
            MediaKind::Audio => Ok(self.buckets.audio.clone()),
            MediaKind::Image => Ok(self.buckets.image.clone()),
            other => Err(AppError::UnsupportedMediaKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use melodia_storage::{StorageError, StorageResult};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Default)]
    struct MockStore {
        saved: Mutex<Vec<MediaFile>>,
        save_calls: AtomicUsize,
        get_calls: AtomicUsize,
        fail_save: bool,
    }

    #[async_trait]
    impl MediaStore for MockStore {
        async fn save(&self, file: MediaFile) -> Result<MediaFile, AppError> {
            self.save_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_save {
                return Err(AppError::Internal("mock save failure".to_string()));
            }
            self.saved.lock().unwrap().push(file.clone());
            Ok(file)
        }

        async fn get(&self, id: Uuid) -> Result<MediaFile, AppError> {
            self.get_calls.fetch_add(1, Ordering::SeqCst);
            self.saved
                .lock()
                .unwrap()
                .iter()
                .find(|f| f.id == id)
                .cloned()
                .ok_or_else(|| AppError::NotFound("Media file not found".to_string()))
        }
    }

    #[derive(Default)]
    struct MockStorage {
        uploaded: Mutex<Vec<(String, String, i64)>>,
        ensure_calls: AtomicUsize,
        put_calls: AtomicUsize,
        sign_calls: AtomicUsize,
        fail_ensure: bool,
        fail_put: bool,
        fail_sign: bool,
    }

    #[async_trait]
    impl ObjectStorage for MockStorage {
        async fn ensure_bucket(&self, _bucket: &str) -> StorageResult<()> {
            self.ensure_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_ensure {
                return Err(StorageError::BucketFailed("mock bucket failure".to_string()));
            }
            Ok(())
        }

        async fn put_file(
            &self,
            bucket: &str,
            object_key: &str,
            _content_type: &str,
            size_bytes: i64,
            _data: Bytes,
        ) -> StorageResult<()> {
            self.put_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_put {
                return Err(StorageError::WriteFailed("mock upload failure".to_string()));
            }
            self.uploaded.lock().unwrap().push((
                bucket.to_string(),
                object_key.to_string(),
                size_bytes,
            ));
            Ok(())
        }

        async fn presigned_get_url(
            &self,
            bucket: &str,
            object_key: &str,
            expires_in: Duration,
        ) -> StorageResult<String> {
            self.sign_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_sign {
                return Err(StorageError::SignFailed("mock signing failure".to_string()));
            }
            Ok(format!(
                "http://localhost:9000/{}/{}?X-Amz-Expires={}",
                bucket,
                object_key,
                expires_in.as_secs()
            ))
        }
    }

    fn service(store: Arc<MockStore>, storage: Arc<MockStorage>) -> MediaService {
        MediaService::new(
            store,
            storage,
            BucketConfig {
                audio: "audio-bucket".to_string(),
                image: "image-bucket".to_string(),
            },
        )
    }

    #[tokio::test]
    async fn upload_then_stream_url_succeeds_for_supported_kinds() {
        for kind in [MediaKind::Audio, MediaKind::Image] {
            let store = Arc::new(MockStore::default());
            let storage = Arc::new(MockStorage::default());
            let svc = service(store.clone(), storage.clone());

            let file = svc
                .upload_file(Bytes::from_static(b"payload"), "file.bin", "application/octet-stream", kind)
                .await
                .unwrap();

            let url = svc.stream_url(file.id).await.unwrap();
            assert!(url.contains(&file.object_key));
            assert!(url.contains("X-Amz-Expires=3600"));
        }
    }

    #[tokio::test]
    async fn upload_routes_audio_to_audio_bucket() {
        let store = Arc::new(MockStore::default());
        let storage = Arc::new(MockStorage::default());
        let svc = service(store.clone(), storage.clone());

        let file = svc
            .upload_file(
                Bytes::from(vec![0u8; 1024]),
                "song.mp3",
                "audio/mpeg",
                MediaKind::Audio,
            )
            .await
            .unwrap();

        assert_eq!(file.bucket_name, "audio-bucket");
        assert_eq!(file.object_key, format!("{}.mp3", file.id));
        assert_eq!(file.size_bytes, 1024);
        assert_eq!(file.filename, "song.mp3");

        let uploaded = storage.uploaded.lock().unwrap();
        assert_eq!(uploaded.len(), 1);
        assert_eq!(
            uploaded[0],
            ("audio-bucket".to_string(), file.object_key.clone(), 1024)
        );
    }

    #[tokio::test]
    async fn object_key_equals_id_without_extension() {
        let store = Arc::new(MockStore::default());
        let storage = Arc::new(MockStorage::default());
        let svc = service(store, storage);

        let file = svc
            .upload_file(
                Bytes::from_static(b"data"),
                "noextension",
                "application/octet-stream",
                MediaKind::Image,
            )
            .await
            .unwrap();

        assert_eq!(file.object_key, file.id.to_string());
    }

    #[tokio::test]
    async fn video_is_rejected_before_any_side_effect() {
        let store = Arc::new(MockStore::default());
        let storage = Arc::new(MockStorage::default());
        let svc = service(store.clone(), storage.clone());

        let err = svc
            .upload_file(
                Bytes::from_static(b"clip"),
                "clip.mp4",
                "video/mp4",
                MediaKind::Video,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::UnsupportedMediaKind(_)));
        assert_eq!(storage.put_calls.load(Ordering::SeqCst), 0);
        assert_eq!(store.save_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn stream_url_for_unknown_id_never_calls_storage() {
        let store = Arc::new(MockStore::default());
        let storage = Arc::new(MockStorage::default());
        let svc = service(store, storage.clone());

        let err = svc.stream_url(Uuid::new_v4()).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(storage.sign_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn upload_failure_writes_no_metadata() {
        let store = Arc::new(MockStore::default());
        let storage = Arc::new(MockStorage {
            fail_put: true,
            ..Default::default()
        });
        let svc = service(store.clone(), storage.clone());

        let err = svc
            .upload_file(
                Bytes::from_static(b"data"),
                "song.mp3",
                "audio/mpeg",
                MediaKind::Audio,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::StorageWrite(_)));
        assert_eq!(store.save_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn save_failure_leaves_uploaded_object_behind() {
        let store = Arc::new(MockStore {
            fail_save: true,
            ..Default::default()
        });
        let storage = Arc::new(MockStorage::default());
        let svc = service(store.clone(), storage.clone());

        let result = svc
            .upload_file(
                Bytes::from_static(b"data"),
                "song.mp3",
                "audio/mpeg",
                MediaKind::Audio,
            )
            .await;

        assert!(result.is_err());
        // The blob made it to the bucket and stays there: the documented
        // orphan-object window, with no compensating delete.
        assert_eq!(storage.uploaded.lock().unwrap().len(), 1);
        assert_eq!(store.save_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn signing_failure_surfaces_as_retrieval_error() {
        let store = Arc::new(MockStore::default());
        let storage = Arc::new(MockStorage::default());
        let svc = service(store.clone(), storage.clone());

        let file = svc
            .upload_file(
                Bytes::from_static(b"data"),
                "cover.png",
                "image/png",
                MediaKind::Image,
            )
            .await
            .unwrap();

        let failing = Arc::new(MockStorage {
            fail_sign: true,
            ..Default::default()
        });
        let svc = service(store, failing);

        let err = svc.stream_url(file.id).await.unwrap_err();
        assert!(matches!(err, AppError::StorageRead(_)));
    }

    #[tokio::test]
    async fn init_buckets_swallows_provisioning_failures() {
        let store = Arc::new(MockStore::default());
        let storage = Arc::new(MockStorage {
            fail_ensure: true,
            ..Default::default()
        });
        let svc = service(store, storage.clone());

        svc.init_buckets().await;

        assert_eq!(storage.ensure_calls.load(Ordering::SeqCst), 2);
    }
}
