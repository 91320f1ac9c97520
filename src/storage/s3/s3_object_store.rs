use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::{
    config::{BehaviorVersion, Credentials, Region},
    presigning::PresigningConfig,
    primitives::ByteStream,
    Client,
};
use bytes::Bytes;

use crate::{
    app::env::Envy,
    storage::{
        keys::resolve_region,
        object_store::{ObjectStore, ObjectStoreError},
    },
};

const CREDENTIALS_PROVIDER_NAME: &str = "runpod-storage";

pub struct S3ObjectStore {
    client: Client,
    bucket: String,
}

impl S3ObjectStore {
    /// Returns `None` unless endpoint, bucket, access key and secret are all set.
    pub fn from_envy(envy: &Envy) -> Option<Self> {
        let (Some(endpoint), Some(bucket), Some(access_key), Some(secret_key)) = (
            &envy.runpod_storage_endpoint,
            &envy.runpod_storage_bucket,
            &envy.runpod_storage_access_key,
            &envy.runpod_storage_secret_key,
        ) else {
            return None;
        };

        let region = resolve_region(envy.runpod_storage_region.as_deref(), endpoint);
        let credentials = Credentials::new(
            access_key,
            secret_key,
            None,
            None,
            CREDENTIALS_PROVIDER_NAME,
        );

        let config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(region))
            .endpoint_url(endpoint)
            .credentials_provider(credentials)
            .force_path_style(envy.storage_force_path_style())
            .build();

        Some(Self {
            client: Client::from_conf(config),
            bucket: bucket.to_string(),
        })
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put_object(&self, key: &str, data: Bytes, content_type: &str) -> Result<(), ObjectStoreError> {
        let result = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(data.to_vec()))
            .send()
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) => Err(ObjectStoreError::Upload {
                key: key.to_string(),
                message: e.to_string(),
            }),
        }
    }

    async fn presign_get(&self, key: &str, expires_in: Duration) -> Result<String, ObjectStoreError> {
        let presigning_config = match PresigningConfig::expires_in(expires_in) {
            Ok(config) => config,
            Err(e) => {
                return Err(ObjectStoreError::Presign {
                    key: key.to_string(),
                    message: e.to_string(),
                })
            }
        };

        let result = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presigning_config)
            .await;

        match result {
            Ok(presigned) => Ok(presigned.uri().to_string()),
            Err(e) => Err(ObjectStoreError::Presign {
                key: key.to_string(),
                message: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn requires_complete_configuration() {
        let mut envy = Envy {
            runpod_storage_endpoint: Some("https://s3api-eu-ro-1.runpod.io".to_string()),
            runpod_storage_bucket: Some("bucket".to_string()),
            runpod_storage_access_key: Some("key".to_string()),
            ..Envy::default()
        };
        assert!(S3ObjectStore::from_envy(&envy).is_none());

        envy.runpod_storage_secret_key = Some("secret".to_string());
        assert!(S3ObjectStore::from_envy(&envy).is_some());
    }
}
