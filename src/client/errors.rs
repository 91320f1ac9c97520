use serde_json::Value;
use thiserror::Error;

use crate::{app::models::api_error::ApiError, poller::errors::PollError};

#[derive(Debug, Error)]
pub enum ClientError {
    /// Error body returned by the proxy, or a request rejected before sending.
    #[error("{message} ({status})")]
    Api {
        status: u16,
        message: String,
        details: Option<Value>,
    },
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error(transparent)]
    Poll(Box<PollError>),
}

impl From<ApiError> for ClientError {
    fn from(e: ApiError) -> Self {
        Self::Api {
            status: e.code.as_u16(),
            message: e.message,
            details: e.details,
        }
    }
}

impl From<PollError> for ClientError {
    fn from(e: PollError) -> Self {
        Self::Poll(Box::new(e))
    }
}
