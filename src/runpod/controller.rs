use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use validator::Validate;

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    generation::dtos::generation_request_dto::GenerationRequestDto,
    AppState,
};

use super::{dtos::get_job_status_dto::GetJobStatusDto, errors::RunpodApiError, service};

pub async fn submit_job(
    State(state): State<Arc<AppState>>,
    JsonFromRequest(dto): JsonFromRequest<GenerationRequestDto>,
) -> Result<Json<Value>, ApiError> {
    if let Err(e) = dto.validate() {
        return Err(ApiError::new(StatusCode::BAD_REQUEST, &e.to_string()));
    }

    match service::submit_job(&dto, &state).await {
        Ok(job) => Ok(Json(job)),
        Err(e) => Err(e),
    }
}

pub async fn get_job_status(
    State(state): State<Arc<AppState>>,
    Query(dto): Query<GetJobStatusDto>,
) -> Result<Json<Value>, ApiError> {
    let Some(id) = dto.job_id() else {
        return Err(RunpodApiError::JobIdRequired.value());
    };

    match service::get_job_status(id, &state).await {
        Ok(job) => Ok(Json(job)),
        Err(e) => Err(e),
    }
}
