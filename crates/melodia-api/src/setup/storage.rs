//! Object-storage client setup

use anyhow::Result;
use melodia_core::Config;
use melodia_storage::{ObjectStorage, S3Storage};
use std::sync::Arc;

/// Build the S3 client from config. Bucket provisioning happens later via
/// `MediaService::init_buckets`, which tolerates failure.
pub fn setup_storage(config: &Config) -> Result<Arc<dyn ObjectStorage>> {
    tracing::info!(
        endpoint = %config.storage.endpoint_url(),
        region = %config.storage.region,
        audio_bucket = %config.storage.buckets.audio,
        image_bucket = %config.storage.buckets.image,
        "Initializing object storage client"
    );

    let storage = S3Storage::new(&config.storage)?;
    Ok(Arc::new(storage))
}
