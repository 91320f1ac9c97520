use axum::http::StatusCode;
use serde_json::Value;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum RunpodApiError {
    JobIdRequired,
    InvalidJobId,
    ApiKeyNotConfigured,
    RequestFailed {
        status: StatusCode,
        details: Value,
    },
    StatusRequestFailed {
        status: StatusCode,
        details: Value,
    },
    Unreachable,
    StatusUnreachable,
}

impl RunpodApiError {
    pub fn value(self) -> ApiError {
        match self {
            Self::JobIdRequired => ApiError::new(
                StatusCode::BAD_REQUEST,
                "Job id is required via the 'id' query parameter.",
            ),
            Self::InvalidJobId => ApiError::new(StatusCode::BAD_REQUEST, "Job id is invalid."),
            Self::ApiKeyNotConfigured => ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "RUNPOD_API_KEY is not configured on the server.",
            ),
            Self::RequestFailed { status, details } => ApiError {
                code: status,
                message: "Runpod request failed.".to_string(),
                details: Some(details),
            },
            Self::StatusRequestFailed { status, details } => ApiError {
                code: status,
                message: "Runpod status request failed.".to_string(),
                details: Some(details),
            },
            Self::Unreachable => ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Unexpected error communicating with Runpod.",
            ),
            Self::StatusUnreachable => ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Unexpected error fetching Runpod job status.",
            ),
        }
    }
}
