//! MinIO/S3-compatible storage client
//!
//! Uses rust-s3 crate for lightweight S3 operations. Objects are written
//! once under generated keys and never updated or deleted by this service.

use async_trait::async_trait;
use s3::creds::Credentials;
use s3::{Bucket, BucketConfiguration, Region};
use tracing::{debug, info};

use crate::core::config::StorageConfig;
use crate::core::error::AppError;

use super::ObjectStorage;

pub struct MinIOClient {
    bucket: Box<Bucket>,
    region: Region,
    credentials: Credentials,
    public_endpoint: String,
}

impl MinIOClient {
    /// Create a new MinIO client from configuration.
    ///
    /// Does not touch the network; call `ensure_bucket_exists` before the
    /// first upload.
    pub fn new(config: StorageConfig) -> Result<Self, AppError> {
        let credentials = Credentials::new(
            Some(&config.access_key),
            Some(&config.secret_key),
            None,
            None,
            None,
        )
        .map_err(|e| AppError::Storage(format!("Failed to create storage credentials: {}", e)))?;

        let region = Region::Custom {
            region: config.region.clone(),
            endpoint: config.endpoint.clone(),
        };

        let mut bucket = Bucket::new(&config.bucket, region.clone(), credentials.clone())
            .map_err(|e| AppError::Storage(format!("Failed to create bucket handle: {}", e)))?;

        // Use path-style URLs for MinIO (http://endpoint/bucket instead of http://bucket.endpoint)
        bucket.set_path_style();

        Ok(Self {
            bucket,
            region,
            credentials,
            public_endpoint: config.public_endpoint,
        })
    }

    pub fn bucket_name(&self) -> String {
        self.bucket.name()
    }
}

#[async_trait]
impl ObjectStorage for MinIOClient {
    /// Ensure the bucket exists, create if not.
    ///
    /// An "already exists" response from the server is treated as success;
    /// any other failure is a storage error.
    async fn ensure_bucket_exists(&self) -> Result<(), AppError> {
        let bucket_config = BucketConfiguration::default();

        match Bucket::create_with_path_style(
            &self.bucket.name(),
            self.region.clone(),
            self.credentials.clone(),
            bucket_config,
        )
        .await
        {
            Ok(_) => {
                info!("Bucket '{}' created", self.bucket.name());
                Ok(())
            }
            Err(e) => {
                let error_str = e.to_string();
                if error_str.contains("BucketAlreadyOwnedByYou")
                    || error_str.contains("BucketAlreadyExists")
                    || error_str.contains("already own it")
                {
                    debug!("Bucket '{}' already exists", self.bucket.name());
                    Ok(())
                } else {
                    Err(AppError::Storage(format!(
                        "Failed to create bucket '{}': {}",
                        self.bucket.name(),
                        e
                    )))
                }
            }
        }
    }

    async fn upload(&self, key: &str, data: &[u8], content_type: &str) -> Result<(), AppError> {
        self.bucket
            .put_object_with_content_type(key, data, content_type)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to upload object '{}': {}", key, e)))?;

        debug!("Uploaded object '{}' to bucket '{}'", key, self.bucket.name());
        Ok(())
    }

    /// Public URL for a stored object (public endpoint + bucket + key).
    fn public_url(&self, key: &str) -> String {
        format!("{}/{}/{}", self.public_endpoint, self.bucket.name(), key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> MinIOClient {
        MinIOClient::new(StorageConfig {
            endpoint: "http://localhost:9000".to_string(),
            public_endpoint: "https://images.example.com".to_string(),
            access_key: "test-access".to_string(),
            secret_key: "test-secret".to_string(),
            bucket: "hazard-reports".to_string(),
            region: "us-east-1".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_public_url_uses_public_endpoint() {
        let client = test_client();
        assert_eq!(
            client.public_url("reports/abc.png"),
            "https://images.example.com/hazard-reports/reports/abc.png"
        );
    }

    #[test]
    fn test_bucket_name() {
        let client = test_client();
        assert_eq!(client.bucket_name(), "hazard-reports");
    }
}
