use crate::app::env::Envy;

use super::enums::transport::Transport;

pub fn base_url(envy: &Envy, transport: Transport) -> String {
    let host = match transport {
        Transport::Accelerator => &envy.runpod_proxy_base_url,
        Transport::Direct => &envy.runpod_direct_base_url,
    };

    format!("{}/v2/{}", host, envy.runpod_endpoint_id)
}

pub fn run_url(envy: &Envy, transport: Transport) -> String {
    format!("{}/run", base_url(envy, transport))
}

/// Status lookups always go through the accelerator proxy.
pub fn status_url(envy: &Envy, id: &str) -> String {
    format!("{}/status/{}", base_url(envy, Transport::Accelerator), id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_provider_urls() {
        let envy = Envy {
            runpod_endpoint_id: "abc123".to_string(),
            runpod_proxy_base_url: "http://proxy.local".to_string(),
            runpod_direct_base_url: "https://api.runpod.ai".to_string(),
            ..Envy::default()
        };

        assert_eq!(run_url(&envy, Transport::Accelerator), "http://proxy.local/v2/abc123/run");
        assert_eq!(run_url(&envy, Transport::Direct), "https://api.runpod.ai/v2/abc123/run");
        assert_eq!(status_url(&envy, "job-1"), "http://proxy.local/v2/abc123/status/job-1");
    }
}
