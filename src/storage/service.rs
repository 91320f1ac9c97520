use std::time::Duration;

use crate::app::{
    models::api_error::ApiError,
    util::multipart::models::form_data::FormData,
};

use super::{
    errors::StorageApiError,
    keys,
    models::{
        download_url_response::{DownloadUrlResponse, DOWNLOAD_URL_TTL_SECONDS},
        upload_response::UploadResponse,
    },
    object_store::ObjectStore,
};

pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

pub async fn upload_file(mut form_data: FormData, store: &dyn ObjectStore) -> Result<UploadResponse, ApiError> {
    let Some(file) = form_data.take_file("file") else {
        return Err(StorageApiError::MissingFile.value());
    };

    let content_type = match form_data.field("contentType") {
        Some(content_type) => content_type.to_string(),
        None if !file.mime_type.is_empty() => file.mime_type.to_string(),
        None => DEFAULT_CONTENT_TYPE.to_string(),
    };

    let object_key = keys::new_upload_key(&content_type);

    match store.put_object(&object_key, file.data, &content_type).await {
        Ok(_) => {
            tracing::debug!("uploaded {}", object_key);
            Ok(UploadResponse { object_key })
        }
        Err(e) => {
            tracing::error!(%e);
            Err(StorageApiError::UploadFailed.value())
        }
    }
}

pub async fn get_download_url(key: &str, store: &dyn ObjectStore) -> Result<DownloadUrlResponse, ApiError> {
    let expires_in = Duration::from_secs(DOWNLOAD_URL_TTL_SECONDS);

    match store.presign_get(key, expires_in).await {
        Ok(url) => Ok(DownloadUrlResponse {
            url,
            expires_in: DOWNLOAD_URL_TTL_SECONDS,
        }),
        Err(e) => {
            tracing::error!(%e);
            Err(StorageApiError::DownloadUrlFailed.value())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use axum::http::StatusCode;
    use bytes::Bytes;

    use super::*;
    use crate::{
        app::util::multipart::models::file_properties::FileProperties,
        storage::object_store::ObjectStoreError,
    };

    #[derive(Default)]
    struct MemoryStore {
        puts: Mutex<Vec<(String, String, usize)>>,
        fail: bool,
    }

    #[async_trait]
    impl ObjectStore for MemoryStore {
        async fn put_object(&self, key: &str, data: Bytes, content_type: &str) -> Result<(), ObjectStoreError> {
            if self.fail {
                return Err(ObjectStoreError::Upload {
                    key: key.to_string(),
                    message: "boom".to_string(),
                });
            }
            self.puts
                .lock()
                .unwrap()
                .push((key.to_string(), content_type.to_string(), data.len()));
            Ok(())
        }

        async fn presign_get(&self, key: &str, expires_in: Duration) -> Result<String, ObjectStoreError> {
            Ok(format!("https://bucket.local/{}?ttl={}", key, expires_in.as_secs()))
        }
    }

    fn form_with_file(mime_type: &str) -> FormData {
        let mut form_data = FormData::default();
        form_data.files.push(FileProperties {
            field_name: "file".to_string(),
            file_name: "ref.png".to_string(),
            mime_type: mime_type.to_string(),
            data: Bytes::from_static(b"png-bytes"),
        });
        form_data
    }

    #[tokio::test]
    async fn content_type_field_overrides_part_type() {
        let store = MemoryStore::default();
        let mut form_data = form_with_file("application/octet-stream");
        form_data
            .fields
            .insert("contentType".to_string(), "image/jpeg".to_string());

        let response = upload_file(form_data, &store).await.unwrap();

        assert!(response.object_key.starts_with("uploads/"));
        assert!(response.object_key.ends_with(".jpg"));
        let puts = store.puts.lock().unwrap();
        assert_eq!(puts[0].0, response.object_key);
        assert_eq!(puts[0].1, "image/jpeg");
        assert_eq!(puts[0].2, 9);
    }

    #[tokio::test]
    async fn missing_file_is_rejected() {
        let store = MemoryStore::default();

        let e = upload_file(FormData::default(), &store).await.unwrap_err();

        assert_eq!(e.code, StatusCode::BAD_REQUEST);
        assert_eq!(e.message, "Missing file upload.");
    }

    #[tokio::test]
    async fn store_failures_become_500() {
        let store = MemoryStore {
            fail: true,
            ..MemoryStore::default()
        };

        let e = upload_file(form_with_file("image/png"), &store).await.unwrap_err();

        assert_eq!(e.code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.message, "Failed to upload file to storage.");
    }

    #[tokio::test]
    async fn download_urls_expire_after_two_minutes() {
        let store = MemoryStore::default();

        let response = get_download_url("uploads/a.png", &store).await.unwrap();

        assert_eq!(response.expires_in, 120);
        assert_eq!(response.url, "https://bucket.local/uploads/a.png?ttl=120");
    }
}
