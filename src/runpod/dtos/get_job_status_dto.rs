use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GetJobStatusDto {
    pub id: Option<String>,
}

impl GetJobStatusDto {
    pub fn job_id(&self) -> Option<&str> {
        self.id
            .as_deref()
            .map(|id| id.trim())
            .filter(|id| !id.is_empty())
    }
}
