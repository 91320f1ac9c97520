mod common;

use std::{sync::Arc, time::Duration};

use axum::http::StatusCode;
use serde_json::json;
use tokio_util::sync::CancellationToken;

use blackwell_api::{
    client::{
        errors::ClientError, generation_client::GenerationClient, http_job_api::HttpJobApi,
        job_api::JobApi,
    },
    generation::dtos::generation_request_dto::GenerationRequestDto,
    poller::{enums::poll_state::PollState, errors::PollError, models::poll_config::PollConfig},
    runpod::structs::job_preview::JobPreview,
};

use common::{build_test_app, serve, MockProvider};

fn fast_polling() -> PollConfig {
    PollConfig {
        interval: Duration::from_millis(20),
        timeout: Duration::from_secs(5),
    }
}

fn prompt_dto() -> GenerationRequestDto {
    GenerationRequestDto {
        prompt: Some("a lighthouse at dusk".to_string()),
        ..GenerationRequestDto::default()
    }
}

#[tokio::test]
async fn generates_through_the_proxy_and_renders_inline_output() {
    let provider = MockProvider::spawn().await;
    let image = "QUJD".repeat(50);
    provider.reply_to_status(
        StatusCode::OK,
        json!({ "id": "job-1", "status": "COMPLETED", "output": { "images": [{ "data": image }] } }),
    );
    let envy = provider.envy();
    let addr = serve(build_test_app(envy.clone()));

    let api: Arc<dyn JobApi> = Arc::new(HttpJobApi::new(&format!("http://{}", addr), reqwest::Client::new()));
    let client = GenerationClient::new(api, &envy).with_poll_config(fast_polling());
    let mut states = Vec::new();

    let outcome = client
        .generate(&prompt_dto(), &CancellationToken::new(), |_, state| states.push(state))
        .await
        .unwrap();

    assert_eq!(outcome.job.status.as_deref(), Some("COMPLETED"));
    assert_eq!(
        outcome.preview,
        Some(JobPreview::InlineImage(format!("data:image/png;base64,{}", image)))
    );
    assert_eq!(states, vec![PollState::Polling { polls: 0 }, PollState::Succeeded]);

    let paths: Vec<String> = provider.requests().into_iter().map(|request| request.path).collect();
    assert_eq!(
        paths,
        vec![
            "/proxy/v2/test-endpoint/run".to_string(),
            "/proxy/v2/test-endpoint/status/job-1".to_string(),
        ]
    );
}

#[tokio::test]
async fn failed_jobs_surface_as_poll_errors() {
    let provider = MockProvider::spawn().await;
    provider.reply_to_status(StatusCode::OK, json!({ "id": "job-1", "status": "FAILED", "error": "oom" }));
    let envy = provider.envy();
    let addr = serve(build_test_app(envy.clone()));

    let api: Arc<dyn JobApi> = Arc::new(HttpJobApi::new(&format!("http://{}", addr), reqwest::Client::new()));
    let client = GenerationClient::new(api, &envy).with_poll_config(fast_polling());

    let e = client
        .generate(&prompt_dto(), &CancellationToken::new(), |_, _| {})
        .await
        .unwrap_err();

    match e {
        ClientError::Poll(poll_error) => match *poll_error {
            PollError::JobFailed { status, response } => {
                assert_eq!(status, "FAILED");
                assert_eq!(response.extra["error"], "oom");
            }
            other => panic!("unexpected poll error: {other}"),
        },
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn proxy_errors_carry_status_and_message() {
    let provider = MockProvider::spawn().await;
    provider.reply_to_run(StatusCode::BAD_GATEWAY, json!({ "error": "worker offline" }));
    let envy = provider.envy();
    let addr = serve(build_test_app(envy.clone()));

    let api = HttpJobApi::new(&format!("http://{}/", addr), reqwest::Client::new());

    let e = api.submit(&prompt_dto()).await.unwrap_err();

    match e {
        ClientError::Api { status, message, details } => {
            assert_eq!(status, 502);
            assert_eq!(message, "Runpod request failed.");
            assert_eq!(details.unwrap()["error"], "worker offline");
        }
        other => panic!("unexpected error: {other}"),
    }
}
