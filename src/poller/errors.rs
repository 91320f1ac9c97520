use thiserror::Error;

use crate::{client::errors::ClientError, runpod::structs::runpod_job_response::RunpodJobResponse};

#[derive(Debug, Error)]
pub enum PollError {
    #[error("Runpod did not return a job id to poll.")]
    MissingJobId,
    #[error("Timed out waiting for Runpod job {job_id} after {timeout_secs}s.")]
    Timeout { job_id: String, timeout_secs: u64 },
    #[error("Runpod job finished with status {status}.")]
    JobFailed {
        status: String,
        response: Box<RunpodJobResponse>,
    },
    #[error("Polling was cancelled.")]
    Cancelled,
    #[error(transparent)]
    Request(#[from] ClientError),
}
