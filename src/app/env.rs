use serde::Deserialize;

pub const DEFAULT_ENDPOINT_ID: &str = "ul5kke5ddlrzhi";
pub const DEFAULT_PROXY_BASE_URL: &str = "http://a2ccc7a37a37df10c.awsglobalaccelerator.com";
pub const DEFAULT_DIRECT_BASE_URL: &str = "https://api.runpod.ai";

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub port: Option<u16>,
    pub cors_origin: Option<String>,

    pub runpod_api_key: Option<String>,
    #[serde(default = "default_endpoint_id")]
    pub runpod_endpoint_id: String,
    #[serde(default = "default_proxy_base_url")]
    pub runpod_proxy_base_url: String,
    #[serde(default = "default_direct_base_url")]
    pub runpod_direct_base_url: String,
    #[serde(default = "default_output_width")]
    pub runpod_output_width: u32,
    #[serde(default = "default_output_height")]
    pub runpod_output_height: u32,
    #[serde(default = "default_accelerator_max_image_bytes")]
    pub runpod_accelerator_max_image_bytes: usize,
    #[serde(default = "default_max_inline_image_bytes")]
    pub runpod_max_inline_image_bytes: usize,

    pub runpod_storage_endpoint: Option<String>,
    pub runpod_storage_bucket: Option<String>,
    pub runpod_storage_access_key: Option<String>,
    pub runpod_storage_secret_key: Option<String>,
    pub runpod_storage_region: Option<String>,
    #[serde(default = "default_force_path_style")]
    pub runpod_storage_force_path_style: String,

    #[serde(default = "default_request_body_limit_bytes")]
    pub request_body_limit_bytes: usize,
    #[serde(default = "default_rate_limit_per_second")]
    pub rate_limit_per_second: u64,
}

impl Envy {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env::<Envy>().map(Self::normalized)
    }

    /// Trims trailing slashes from base urls and blank optionals to `None`.
    pub fn normalized(mut self) -> Self {
        self.runpod_proxy_base_url = self.runpod_proxy_base_url.trim_end_matches('/').to_string();
        self.runpod_direct_base_url = self.runpod_direct_base_url.trim_end_matches('/').to_string();
        self.runpod_api_key = non_blank(self.runpod_api_key);
        self.runpod_storage_endpoint = non_blank(self.runpod_storage_endpoint);
        self.runpod_storage_bucket = non_blank(self.runpod_storage_bucket);
        self.runpod_storage_access_key = non_blank(self.runpod_storage_access_key);
        self.runpod_storage_secret_key = non_blank(self.runpod_storage_secret_key);
        self.runpod_storage_region = non_blank(self.runpod_storage_region);
        self
    }

    pub fn storage_enabled(&self) -> bool {
        self.runpod_storage_endpoint.is_some()
            && self.runpod_storage_bucket.is_some()
            && self.runpod_storage_access_key.is_some()
            && self.runpod_storage_secret_key.is_some()
    }

    pub fn storage_force_path_style(&self) -> bool {
        self.runpod_storage_force_path_style.to_lowercase() != "0"
    }
}

impl Default for Envy {
    fn default() -> Self {
        Self {
            app_env: default_app_env(),
            port: None,
            cors_origin: None,
            runpod_api_key: None,
            runpod_endpoint_id: default_endpoint_id(),
            runpod_proxy_base_url: default_proxy_base_url(),
            runpod_direct_base_url: default_direct_base_url(),
            runpod_output_width: default_output_width(),
            runpod_output_height: default_output_height(),
            runpod_accelerator_max_image_bytes: default_accelerator_max_image_bytes(),
            runpod_max_inline_image_bytes: default_max_inline_image_bytes(),
            runpod_storage_endpoint: None,
            runpod_storage_bucket: None,
            runpod_storage_access_key: None,
            runpod_storage_secret_key: None,
            runpod_storage_region: None,
            runpod_storage_force_path_style: default_force_path_style(),
            request_body_limit_bytes: default_request_body_limit_bytes(),
            rate_limit_per_second: default_rate_limit_per_second(),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn default_app_env() -> String {
    "development".to_string()
}

fn default_endpoint_id() -> String {
    DEFAULT_ENDPOINT_ID.to_string()
}

fn default_proxy_base_url() -> String {
    DEFAULT_PROXY_BASE_URL.to_string()
}

fn default_direct_base_url() -> String {
    DEFAULT_DIRECT_BASE_URL.to_string()
}

fn default_output_width() -> u32 {
    1664
}

fn default_output_height() -> u32 {
    928
}

fn default_accelerator_max_image_bytes() -> usize {
    700_000
}

fn default_max_inline_image_bytes() -> usize {
    12_000_000
}

fn default_force_path_style() -> String {
    "1".to_string()
}

fn default_request_body_limit_bytes() -> usize {
    20 * 1024 * 1024
}

fn default_rate_limit_per_second() -> u64 {
    50
}
