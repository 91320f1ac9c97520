pub mod get_job_status_dto;
