use serde::{Deserialize, Serialize};

pub const DOWNLOAD_URL_TTL_SECONDS: u64 = 120;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadUrlResponse {
    pub url: String,
    pub expires_in: u64,
}
