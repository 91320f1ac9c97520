use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum StorageApiError {
    NotConfigured,
    MissingFile,
    MissingKey,
    UploadFailed,
    DownloadUrlFailed,
}

impl StorageApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::NotConfigured => ApiError::new(
                StatusCode::SERVICE_UNAVAILABLE,
                "RunPod storage is not configured.",
            ),
            Self::MissingFile => ApiError::new(StatusCode::BAD_REQUEST, "Missing file upload."),
            Self::MissingKey => ApiError::new(StatusCode::BAD_REQUEST, "Missing 'key' query parameter."),
            Self::UploadFailed => ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to upload file to storage.",
            ),
            Self::DownloadUrlFailed => ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create download URL.",
            ),
        }
    }
}
