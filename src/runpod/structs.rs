pub mod job_preview;
pub mod runpod_job_response;
