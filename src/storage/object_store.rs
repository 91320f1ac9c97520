use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObjectStoreError {
    #[error("failed to upload {key}: {message}")]
    Upload { key: String, message: String },
    #[error("failed to presign {key}: {message}")]
    Presign { key: String, message: String },
}

#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn put_object(&self, key: &str, data: Bytes, content_type: &str) -> Result<(), ObjectStoreError>;

    async fn presign_get(&self, key: &str, expires_in: Duration) -> Result<String, ObjectStoreError>;
}
