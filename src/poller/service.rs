use tokio::time::{sleep, Instant};
use tokio_util::sync::CancellationToken;

use crate::{client::job_api::JobApi, runpod::structs::runpod_job_response::RunpodJobResponse};

use super::{
    enums::poll_state::{transition, PollEvent, PollState},
    errors::PollError,
    models::poll_config::PollConfig,
};

/// Polls until the job reaches a terminal status. `on_update` sees the
/// submission response and every poll response.
pub async fn poll_job<F>(
    api: &dyn JobApi,
    submission: RunpodJobResponse,
    config: &PollConfig,
    cancel: &CancellationToken,
    mut on_update: F,
) -> Result<RunpodJobResponse, PollError>
where
    F: FnMut(&RunpodJobResponse, PollState) + Send,
{
    let started = Instant::now();
    let mut state = transition(PollState::Submitted, PollEvent::Status(submission.phase()));
    on_update(&submission, state);

    if state.is_terminal() {
        return finish(state, submission, "", config);
    }

    let Some(job_id) = submission.job_id().map(|id| id.to_string()) else {
        return Err(PollError::MissingJobId);
    };
    let mut latest = submission;

    loop {
        if started.elapsed() > config.timeout {
            return finish(transition(state, PollEvent::DeadlinePassed), latest, &job_id, config);
        }

        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                return finish(transition(state, PollEvent::Cancelled), latest, &job_id, config);
            }
            result = api.status(&job_id) => result?,
        };

        state = transition(state, PollEvent::Status(response.phase()));
        tracing::debug!(
            "job {} is {} ({})",
            job_id,
            response.status.as_deref().unwrap_or("UNKNOWN"),
            state.value()
        );
        on_update(&response, state);
        latest = response;

        if state.is_terminal() {
            return finish(state, latest, &job_id, config);
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                return finish(transition(state, PollEvent::Cancelled), latest, &job_id, config);
            }
            _ = sleep(config.interval) => {}
        }
    }
}

fn finish(
    state: PollState,
    response: RunpodJobResponse,
    job_id: &str,
    config: &PollConfig,
) -> Result<RunpodJobResponse, PollError> {
    match state {
        PollState::Succeeded => Ok(response),
        PollState::Failed => Err(PollError::JobFailed {
            status: response.status.clone().unwrap_or_default(),
            response: Box::new(response),
        }),
        PollState::TimedOut => Err(PollError::Timeout {
            job_id: job_id.to_string(),
            timeout_secs: config.timeout.as_secs(),
        }),
        PollState::Cancelled => Err(PollError::Cancelled),
        PollState::Submitted | PollState::Polling { .. } => Ok(response),
    }
}
