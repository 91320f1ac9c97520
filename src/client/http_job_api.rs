use async_trait::async_trait;
use reqwest::Response;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    generation::dtos::generation_request_dto::GenerationRequestDto,
    runpod::structs::runpod_job_response::RunpodJobResponse,
    storage::models::download_url_response::DownloadUrlResponse,
};

use super::{errors::ClientError, job_api::JobApi};

/// Talks to this service's own routes.
#[derive(Debug, Clone)]
pub struct HttpJobApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpJobApi {
    pub fn new(base_url: &str, http: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }
}

#[async_trait]
impl JobApi for HttpJobApi {
    async fn submit(&self, dto: &GenerationRequestDto) -> Result<RunpodJobResponse, ClientError> {
        let url = format!("{}/api/runpod", self.base_url);
        let res = self.http.post(url).json(dto).send().await?;

        parse_response(res).await
    }

    async fn status(&self, job_id: &str) -> Result<RunpodJobResponse, ClientError> {
        let url = format!("{}/api/runpod", self.base_url);
        let res = self.http.get(url).query(&[("id", job_id)]).send().await?;

        parse_response(res).await
    }

    async fn download_url(&self, object_key: &str) -> Result<String, ClientError> {
        let url = format!("{}/api/storage/download", self.base_url);
        let res = self.http.get(url).query(&[("key", object_key)]).send().await?;

        let response: DownloadUrlResponse = parse_response(res).await?;
        Ok(response.url)
    }
}

async fn parse_response<T: DeserializeOwned>(res: Response) -> Result<T, ClientError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res.json::<T>().await?);
    }

    let body = res.json::<Value>().await.unwrap_or(Value::Null);
    let message = match body.get("error") {
        Some(Value::String(message)) => message.to_string(),
        _ => format!("Request failed with status {}.", status.as_u16()),
    };

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
        details: body.get("details").cloned(),
    })
}
