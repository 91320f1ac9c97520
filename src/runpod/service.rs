use std::sync::Arc;

use regex::Regex;
use reqwest::Response;
use serde_json::{json, Value};

use crate::{
    app::{models::api_error::ApiError, util::json_tree::redact_large_strings},
    generation::{
        self, dtos::generation_request_dto::GenerationRequestDto,
        models::build_options::BuildOptions,
    },
    AppState,
};

use super::{
    config, enums::transport::Transport, errors::RunpodApiError, models::input_spec::InputSpec,
};

lazy_static! {
    static ref JOB_ID_REGEX: Regex = Regex::new(r"^[A-Za-z0-9_-]+$").unwrap();
}

pub async fn submit_job(dto: &GenerationRequestDto, state: &Arc<AppState>) -> Result<Value, ApiError> {
    let envy = &state.envy;
    let request = generation::service::build_generation_request(dto, &BuildOptions::for_server(envy))?;

    let inline_bytes = request.inline_image_bytes();
    let transport = Transport::for_inline_bytes(inline_bytes, envy.runpod_accelerator_max_image_bytes);
    tracing::debug!(
        "submitting {} job at {} over {} ({} inline bytes)",
        request.mode.value(),
        request.dimensions.label(),
        transport.value(),
        inline_bytes
    );

    let url = config::run_url(envy, transport);
    let mut builder = state.http.post(url).json(&InputSpec::from_request(&request));

    if transport == Transport::Direct {
        let Some(api_key) = &envy.runpod_api_key else {
            tracing::error!("direct transport required but RUNPOD_API_KEY is missing");
            return Err(RunpodApiError::ApiKeyNotConfigured.value());
        };
        builder = builder.bearer_auth(api_key);
    }

    let res = match builder.send().await {
        Ok(res) => res,
        Err(e) => {
            tracing::error!(%e);
            return Err(RunpodApiError::Unreachable.value());
        }
    };

    let status = res.status();
    let Ok(body) = read_body(res).await else {
        return Err(RunpodApiError::Unreachable.value());
    };

    if !status.is_success() {
        tracing::error!(
            "runpod {} run failed with {}: {}",
            transport.value(),
            status,
            redact_large_strings(&body)
        );
        return Err(RunpodApiError::RequestFailed {
            status,
            details: body,
        }
        .value());
    }

    match body {
        Value::Object(mut map) => {
            map.insert("transport".to_string(), json!(transport.value()));
            Ok(Value::Object(map))
        }
        other => {
            tracing::error!("unexpected runpod run response: {}", redact_large_strings(&other));
            Err(RunpodApiError::Unreachable.value())
        }
    }
}

pub async fn get_job_status(id: &str, state: &Arc<AppState>) -> Result<Value, ApiError> {
    if !JOB_ID_REGEX.is_match(id) {
        return Err(RunpodApiError::InvalidJobId.value());
    }

    let url = config::status_url(&state.envy, id);

    let res = match state.http.get(url).send().await {
        Ok(res) => res,
        Err(e) => {
            tracing::error!(%e);
            return Err(RunpodApiError::StatusUnreachable.value());
        }
    };

    let status = res.status();
    let Ok(body) = read_body(res).await else {
        return Err(RunpodApiError::StatusUnreachable.value());
    };

    if !status.is_success() {
        tracing::error!("runpod status {} failed with {}", id, status);
        return Err(RunpodApiError::StatusRequestFailed {
            status,
            details: body,
        }
        .value());
    }

    if !body.is_object() {
        tracing::error!("unexpected runpod status response: {}", redact_large_strings(&body));
        return Err(RunpodApiError::StatusUnreachable.value());
    }

    tracing::debug!("runpod status {}: {}", id, redact_large_strings(&body));
    Ok(body)
}

/// Parses the body as json, keeping non-json text as a string value.
async fn read_body(res: Response) -> Result<Value, ()> {
    match res.text().await {
        Ok(text) => match serde_json::from_str::<Value>(&text) {
            Ok(value) => Ok(value),
            Err(_) => Ok(Value::String(text)),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_ids_are_restricted_to_url_safe_characters() {
        assert!(JOB_ID_REGEX.is_match("a1b2-c3_d4"));
        assert!(!JOB_ID_REGEX.is_match("../status"));
        assert!(!JOB_ID_REGEX.is_match("id?x=1"));
        assert!(!JOB_ID_REGEX.is_match(""));
    }
}
