use crate::traits::{ObjectStorage, StorageError, StorageResult};
use async_trait::async_trait;
use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::operation::head_bucket::HeadBucketError;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use bytes::Bytes;
use melodia_core::StorageConfig;
use std::time::Duration;

/// S3 storage implementation
///
/// Works against MinIO or any other S3-compatible backend. Path-style
/// addressing is forced because virtual-hosted buckets are not routable on
/// a bare `host:port` endpoint.
#[derive(Clone)]
pub struct S3Storage {
    client: Client,
}

impl S3Storage {
    /// Create a new S3Storage instance from the storage section of the
    /// application config (endpoint, static credentials, TLS flag).
    pub fn new(config: &StorageConfig) -> StorageResult<Self> {
        if config.access_key.is_empty() || config.secret_key.is_empty() {
            return Err(StorageError::ConfigError(
                "S3 access key and secret key must be set".to_string(),
            ));
        }

        let credentials = Credentials::new(
            config.access_key.clone(),
            config.secret_key.clone(),
            None,
            None,
            "melodia-config",
        );

        let s3_config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .endpoint_url(config.endpoint_url())
            .credentials_provider(credentials)
            .force_path_style(true)
            .build();

        Ok(S3Storage {
            client: Client::from_conf(s3_config),
        })
    }
}

#[async_trait]
impl ObjectStorage for S3Storage {
    async fn ensure_bucket(&self, bucket: &str) -> StorageResult<()> {
        let exists = match self.client.head_bucket().bucket(bucket).send().await {
            Ok(_) => true,
            Err(err) => match &err {
                SdkError::ServiceError(service_err)
                    if matches!(service_err.err(), HeadBucketError::NotFound(_)) =>
                {
                    false
                }
                _ => return Err(StorageError::BucketFailed(err.to_string())),
            },
        };

        if !exists {
            self.client
                .create_bucket()
                .bucket(bucket)
                .send()
                .await
                .map_err(|e| StorageError::BucketFailed(e.to_string()))?;

            tracing::info!(bucket = %bucket, "S3 bucket created");
        }

        Ok(())
    }

    async fn put_file(
        &self,
        bucket: &str,
        object_key: &str,
        content_type: &str,
        size_bytes: i64,
        data: Bytes,
    ) -> StorageResult<()> {
        let start = std::time::Instant::now();
        let body = ByteStream::from(data);

        self.client
            .put_object()
            .bucket(bucket)
            .key(object_key)
            .body(body)
            .content_type(content_type)
            .content_length(size_bytes)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %bucket,
                    key = %object_key,
                    size_bytes = size_bytes,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "S3 upload failed"
                );
                StorageError::WriteFailed(e.to_string())
            })?;

        tracing::info!(
            bucket = %bucket,
            key = %object_key,
            size_bytes = size_bytes,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 upload successful"
        );

        Ok(())
    }

    async fn presigned_get_url(
        &self,
        bucket: &str,
        object_key: &str,
        expires_in: Duration,
    ) -> StorageResult<String> {
        let presigning_config = aws_sdk_s3::presigning::PresigningConfig::builder()
            .expires_in(expires_in)
            .build()
            .map_err(|e| StorageError::SignFailed(e.to_string()))?;

        let presigned_request = self
            .client
            .get_object()
            .bucket(bucket)
            .key(object_key)
            .presigned(presigning_config)
            .await
            .map_err(|e| StorageError::SignFailed(e.to_string()))?;

        Ok(presigned_request.uri().to_string())
    }
}
