//! Storage abstraction trait
//!
//! This module defines the ObjectStorage trait that storage backends
//! implement, and the error type they surface.

use async_trait::async_trait;
use bytes::Bytes;
use melodia_core::AppError;
use std::time::Duration;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    WriteFailed(String),

    #[error("Presigning failed: {0}")]
    SignFailed(String),

    #[error("Bucket provisioning failed: {0}")]
    BucketFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::WriteFailed(msg) => AppError::StorageWrite(msg),
            StorageError::SignFailed(msg) => AppError::StorageRead(msg),
            StorageError::BucketFailed(msg) | StorageError::ConfigError(msg) => {
                AppError::Internal(msg)
            }
        }
    }
}

/// Object-store abstraction.
///
/// The sole point of contact with the blob backend. Buckets are passed per
/// call; the implementation holds only the connection, not a bucket binding.
/// None of the operations retry: partial failures surface to the caller,
/// which owns any retry policy.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Check that `bucket` exists, creating it when absent. Idempotent and
    /// safe to call repeatedly at process start.
    async fn ensure_bucket(&self, bucket: &str) -> StorageResult<()>;

    /// Upload exactly `size_bytes` bytes under `object_key` in `bucket`,
    /// tagging the stored object with `content_type`.
    async fn put_file(
        &self,
        bucket: &str,
        object_key: &str,
        content_type: &str,
        size_bytes: i64,
        data: Bytes,
    ) -> StorageResult<()>;

    /// Produce a time-limited, pre-authenticated GET URL for the object.
    ///
    /// The object's existence is NOT verified; a URL for a missing object is
    /// returned and fails only when the client dereferences it.
    async fn presigned_get_url(
        &self,
        bucket: &str,
        object_key: &str,
        expires_in: Duration,
    ) -> StorageResult<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_errors_map_to_app_error_kinds() {
        let write: AppError = StorageError::WriteFailed("boom".to_string()).into();
        assert!(matches!(write, AppError::StorageWrite(_)));

        let sign: AppError = StorageError::SignFailed("boom".to_string()).into();
        assert!(matches!(sign, AppError::StorageRead(_)));

        let bucket: AppError = StorageError::BucketFailed("boom".to_string()).into();
        assert!(matches!(bucket, AppError::Internal(_)));
    }
}
