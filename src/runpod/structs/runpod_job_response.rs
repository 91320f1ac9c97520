use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    app::util::json_tree::{find_base64_image, find_string_field},
    runpod::enums::{job_status_phase::JobStatusPhase, transport::Transport},
};

use super::job_preview::JobPreview;

const OBJECT_KEY_FIELDS: [&str; 2] = ["image_object_key", "objectKey"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunpodJobResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(rename = "image_url", skip_serializing_if = "Option::is_none")]
    pub image_url_snake: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport: Option<Transport>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RunpodJobResponse {
    pub fn phase(&self) -> JobStatusPhase {
        JobStatusPhase::from_status(self.status.as_deref())
    }

    pub fn is_terminal(&self) -> bool {
        self.phase().is_terminal()
    }

    pub fn job_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.trim().is_empty())
    }

    pub fn preview(&self) -> Option<JobPreview> {
        let url = self
            .image_url
            .as_deref()
            .or(self.image_url_snake.as_deref())
            .map(|url| url.trim())
            .filter(|url| !url.is_empty());
        if let Some(url) = url {
            return Some(JobPreview::Url(url.to_string()));
        }

        let output = self.output.as_ref()?;
        if let Some(base64) = find_base64_image(output) {
            return Some(JobPreview::InlineImage(format!("data:image/png;base64,{}", base64)));
        }

        find_string_field(output, &OBJECT_KEY_FIELDS).map(JobPreview::ObjectKey)
    }
}
