//! Melodia Storage Library
//!
//! Object-store abstraction and its S3 implementation. The `ObjectStorage`
//! trait is the only surface the rest of the application sees; `S3Storage`
//! speaks to MinIO or any S3-compatible backend with path-style addressing.
//!
//! Buckets are partitioned per media kind (one bucket for audio, one for
//! images). Object keys are flat: `{media_id}{extension}`.

pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use s3::S3Storage;
pub use traits::{ObjectStorage, StorageError, StorageResult};
