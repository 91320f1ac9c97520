use async_trait::async_trait;

use crate::{
    generation::dtos::generation_request_dto::GenerationRequestDto,
    runpod::structs::runpod_job_response::RunpodJobResponse,
};

use super::errors::ClientError;

#[async_trait]
pub trait JobApi: Send + Sync {
    async fn submit(&self, dto: &GenerationRequestDto) -> Result<RunpodJobResponse, ClientError>;

    async fn status(&self, job_id: &str) -> Result<RunpodJobResponse, ClientError>;

    /// Exchanges an object key for a signed download url.
    async fn download_url(&self, object_key: &str) -> Result<String, ClientError>;
}
