use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum NormalizerApiError {
    InvalidImage,
    MissingFile,
    FileTooLarge,
}

impl NormalizerApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::InvalidImage => {
                ApiError::new(StatusCode::BAD_REQUEST, "Please select a valid image file.")
            }
            Self::MissingFile => ApiError::new(StatusCode::BAD_REQUEST, "Missing file upload."),
            Self::FileTooLarge => ApiError::new(
                StatusCode::PAYLOAD_TOO_LARGE,
                "Reference images must be 8MB or smaller.",
            ),
        }
    }
}
