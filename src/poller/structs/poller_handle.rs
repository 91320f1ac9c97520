use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::{
    client::job_api::JobApi,
    poller::{
        enums::poll_state::PollState, errors::PollError, models::poll_config::PollConfig,
        service::poll_job,
    },
    runpod::structs::runpod_job_response::RunpodJobResponse,
};

/// Owns at most one polling chain. Starting a new one cancels the previous.
#[derive(Debug, Default)]
pub struct PollerHandle {
    token: Option<CancellationToken>,
}

impl PollerHandle {
    pub fn start<F>(
        &mut self,
        api: Arc<dyn JobApi>,
        submission: RunpodJobResponse,
        config: PollConfig,
        on_update: F,
    ) -> JoinHandle<Result<RunpodJobResponse, PollError>>
    where
        F: FnMut(&RunpodJobResponse, PollState) + Send + 'static,
    {
        self.cancel();

        let token = CancellationToken::new();
        self.token = Some(token.clone());

        tokio::spawn(async move { poll_job(api.as_ref(), submission, &config, &token, on_update).await })
    }

    pub fn cancel(&mut self) {
        if let Some(token) = self.token.take() {
            token.cancel();
        }
    }

    pub fn is_active(&self) -> bool {
        match &self.token {
            Some(token) => !token.is_cancelled(),
            None => false,
        }
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::atomic::{AtomicUsize, Ordering},
        time::Duration,
    };

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::{
        client::errors::ClientError,
        generation::dtos::generation_request_dto::GenerationRequestDto,
    };

    #[derive(Default)]
    struct PendingApi {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl JobApi for PendingApi {
        async fn submit(&self, _dto: &GenerationRequestDto) -> Result<RunpodJobResponse, ClientError> {
            Ok(pending())
        }

        async fn status(&self, _job_id: &str) -> Result<RunpodJobResponse, ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(pending())
        }

        async fn download_url(&self, object_key: &str) -> Result<String, ClientError> {
            Ok(object_key.to_string())
        }
    }

    fn pending() -> RunpodJobResponse {
        serde_json::from_value(json!({ "id": "job-1", "status": "IN_PROGRESS" })).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn starting_a_new_job_cancels_the_previous_chain() {
        let api: Arc<dyn JobApi> = Arc::new(PendingApi::default());
        let config = PollConfig {
            interval: Duration::from_secs(2),
            timeout: Duration::from_secs(60),
        };
        let mut handle = PollerHandle::default();

        let first = handle.start(api.clone(), pending(), config, |_, _| {});
        tokio::time::sleep(Duration::from_secs(3)).await;
        let second = handle.start(api.clone(), pending(), config, |_, _| {});

        assert!(matches!(first.await.unwrap(), Err(PollError::Cancelled)));
        assert!(handle.is_active());

        handle.cancel();
        assert!(!handle.is_active());
        assert!(matches!(second.await.unwrap(), Err(PollError::Cancelled)));
    }
}
