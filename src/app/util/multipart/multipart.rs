use axum::{extract::Multipart, http::StatusCode};

use crate::app::models::api_error::ApiError;

use super::models::{file_properties::FileProperties, form_data::FormData};

/// Splits a multipart body into file parts and plain text fields. A part is a
/// file when it carries a file name.
pub async fn get_form_data(mut multipart: Multipart) -> Result<FormData, ApiError> {
    let mut form_data = FormData::default();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(%e);
                return Err(malformed_upload());
            }
        };

        let field_name = field.name().unwrap_or("file").to_string();

        let Some(file_name) = field.file_name().map(|name| name.to_string()) else {
            match field.text().await {
                Ok(text) => {
                    form_data.fields.insert(field_name, text);
                }
                Err(e) => {
                    tracing::warn!(%e);
                    return Err(malformed_upload());
                }
            }
            continue;
        };

        let mime_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        let data = match field.bytes().await {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(%e);
                return Err(malformed_upload());
            }
        };

        form_data.files.push(FileProperties {
            field_name,
            file_name,
            mime_type,
            data,
        });
    }

    Ok(form_data)
}

pub fn malformed_upload() -> ApiError {
    ApiError {
        code: StatusCode::BAD_REQUEST,
        message: "Failed to parse upload payload.".to_string(),
        details: None,
    }
}
