use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartRejection, Multipart, Query, State},
    Json,
};

use crate::{
    app::{
        models::api_error::ApiError,
        util::multipart::multipart::{get_form_data, malformed_upload},
    },
    AppState,
};

use super::{
    dtos::get_download_url_dto::GetDownloadUrlDto,
    errors::StorageApiError,
    models::{download_url_response::DownloadUrlResponse, upload_response::UploadResponse},
    service,
};

pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, ApiError> {
    let Some(store) = &state.storage else {
        return Err(StorageApiError::NotConfigured.value());
    };

    let Ok(multipart) = multipart else {
        return Err(malformed_upload());
    };
    let form_data = get_form_data(multipart).await?;

    match service::upload_file(form_data, store.as_ref()).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => Err(e),
    }
}

pub async fn get_download_url(
    State(state): State<Arc<AppState>>,
    Query(dto): Query<GetDownloadUrlDto>,
) -> Result<Json<DownloadUrlResponse>, ApiError> {
    let Some(store) = &state.storage else {
        return Err(StorageApiError::NotConfigured.value());
    };

    let Some(key) = dto.object_key() else {
        return Err(StorageApiError::MissingKey.value());
    };

    match service::get_download_url(key, store.as_ref()).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => Err(e),
    }
}
