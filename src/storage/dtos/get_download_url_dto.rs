use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GetDownloadUrlDto {
    pub key: Option<String>,
}

impl GetDownloadUrlDto {
    pub fn object_key(&self) -> Option<&str> {
        self.key
            .as_deref()
            .map(|key| key.trim())
            .filter(|key| !key.is_empty())
    }
}
