use std::{sync::Arc, time::Duration};

use axum::{
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::{get, post},
    BoxError, Router,
};
use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{generation, normalizer, runpod, storage, AppState};

use super::{controller, env::Envy, errors::DefaultApiError, models::api_error::ApiError};

pub fn build_router(state: AppState) -> Router {
    let envy = state.envy.clone();

    Router::new()
        .route("/", get(controller::get_root))
        // runpod
        .route(
            "/api/runpod",
            post(runpod::controller::submit_job).get(runpod::controller::get_job_status),
        )
        // storage
        .route("/api/storage/upload", post(storage::controller::upload_file))
        .route("/api/storage/download", get(storage::controller::get_download_url))
        // images
        .route("/api/images/normalize", post(normalizer::controller::normalize_image))
        // generation
        .route("/api/generation/options", get(generation::controller::get_form_options))
        // layers
        .layer(DefaultBodyLimit::max(envy.request_body_limit_bytes))
        .layer(cors(&envy))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .layer(BufferLayer::new(1024))
                .layer(RateLimitLayer::new(envy.rate_limit_per_second, Duration::from_secs(1))),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

fn cors(envy: &Envy) -> CorsLayer {
    let origin = match &envy.cors_origin {
        Some(origin) => match origin.parse::<HeaderValue>() {
            Ok(origin) => AllowOrigin::exact(origin),
            Err(e) => {
                tracing::warn!("ignoring invalid CORS_ORIGIN: {}", e);
                AllowOrigin::from(Any)
            }
        },
        None => AllowOrigin::from(Any),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_methods([Method::POST, Method::GET])
}

async fn handle_middleware_error(err: BoxError) -> ApiError {
    tracing::error!(%err);
    DefaultApiError::ServiceOverloaded.value()
}
