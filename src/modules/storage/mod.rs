//! Storage module for report images
//!
//! Provides a MinIO/S3-compatible client used to persist uploaded
//! images before their metadata row is committed.

mod minio_client;

pub use minio_client::MinIOClient;

use async_trait::async_trait;

use crate::core::error::AppError;

/// Object storage abstraction for report images.
///
/// Implementations must be safe for concurrent use by in-flight requests.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Ensure the target bucket exists, creating it if missing.
    async fn ensure_bucket_exists(&self) -> Result<(), AppError>;

    /// Store a file under the given key with the validated content type.
    async fn upload(&self, key: &str, data: &[u8], content_type: &str) -> Result<(), AppError>;

    /// Public URL for a stored object.
    fn public_url(&self, key: &str) -> String;
}
