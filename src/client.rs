pub mod errors;
pub mod generation_client;
pub mod http_job_api;
pub mod job_api;
