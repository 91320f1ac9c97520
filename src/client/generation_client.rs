use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use tokio_util::sync::CancellationToken;

use crate::{
    app::env::Envy,
    generation::{
        dtos::generation_request_dto::GenerationRequestDto, models::build_options::BuildOptions,
        service::build_generation_request,
    },
    poller::{enums::poll_state::PollState, models::poll_config::PollConfig, service::poll_job},
    runpod::structs::{job_preview::JobPreview, runpod_job_response::RunpodJobResponse},
};

use super::{errors::ClientError, job_api::JobApi};

#[derive(Debug)]
pub struct GenerationOutcome {
    pub job: RunpodJobResponse,
    pub preview: Option<JobPreview>,
    pub elapsed: Duration,
}

/// Build, size check, submit, poll and resolve the preview of one job.
pub struct GenerationClient {
    api: Arc<dyn JobApi>,
    options: BuildOptions,
    poll_config: PollConfig,
}

impl GenerationClient {
    pub fn new(api: Arc<dyn JobApi>, envy: &Envy) -> Self {
        Self {
            api,
            options: BuildOptions::for_client(envy),
            poll_config: PollConfig::default(),
        }
    }

    pub fn with_poll_config(mut self, poll_config: PollConfig) -> Self {
        self.poll_config = poll_config;
        self
    }

    pub async fn generate<F>(
        &self,
        dto: &GenerationRequestDto,
        cancel: &CancellationToken,
        on_update: F,
    ) -> Result<GenerationOutcome, ClientError>
    where
        F: FnMut(&RunpodJobResponse, PollState) + Send,
    {
        // Rejects oversized references before anything goes over the wire.
        build_generation_request(dto, &self.options)?;

        let started = Instant::now();
        let submission = self.api.submit(dto).await?;
        let job = poll_job(self.api.as_ref(), submission, &self.poll_config, cancel, on_update).await?;

        let preview = match job.preview() {
            Some(JobPreview::ObjectKey(key)) => Some(JobPreview::Url(self.api.download_url(&key).await?)),
            preview => preview,
        };

        Ok(GenerationOutcome {
            job,
            preview,
            elapsed: started.elapsed(),
        })
    }
}
