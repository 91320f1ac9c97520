pub mod job_status_phase;
pub mod transport;
