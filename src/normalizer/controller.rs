use axum::{
    extract::{multipart::MultipartRejection, Multipart},
    Json,
};

use crate::app::{
    errors::DefaultApiError,
    models::api_error::ApiError,
    util::multipart::multipart::{get_form_data, malformed_upload},
};

use super::{
    errors::NormalizerApiError,
    models::{normalize_options::NormalizeOptions, normalized_image::NormalizedImage},
    service,
};

pub async fn normalize_image(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<NormalizedImage>, ApiError> {
    let Ok(multipart) = multipart else {
        return Err(malformed_upload());
    };
    let mut form_data = get_form_data(multipart).await?;

    let Some(file) = form_data.take_file("file") else {
        return Err(NormalizerApiError::MissingFile.value());
    };
    if !file.is_image() {
        return Err(NormalizerApiError::InvalidImage.value());
    }

    let preserve_original = !matches!(form_data.field("preserveOriginal"), Some("false"));

    let result = tokio::task::spawn_blocking(move || {
        service::normalize_image(
            &file.data,
            &file.mime_type,
            preserve_original,
            &NormalizeOptions::default(),
        )
    })
    .await;

    match result {
        Ok(Ok(image)) => Ok(Json(image)),
        Ok(Err(e)) => Err(e),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}
