use axum::http::StatusCode;
use serde_json::json;

use crate::app::models::api_error::ApiError;

use super::enums::inline_ceiling::InlineCeiling;

#[derive(Debug)]
pub enum GenerationApiError {
    PromptRequired,
    CharacterConceptRequired,
    LocationRequired,
    ComboCharacterRequired,
    ComboBackgroundRequired,
    CharacterReferenceRequired,
    BackgroundReferenceRequired,
    InvalidSeed,
    PayloadTooLarge {
        total_bytes: usize,
        limit_bytes: usize,
        ceiling: InlineCeiling,
    },
}

impl GenerationApiError {
    pub fn value(&self) -> ApiError {
        match self {
            Self::PromptRequired => bad_request("Prompt is required."),
            Self::CharacterConceptRequired => {
                bad_request("Describe the character you want to generate.")
            }
            Self::LocationRequired => bad_request("Describe the environment you want to generate."),
            Self::ComboCharacterRequired => bad_request("Describe the character for the combo frame."),
            Self::ComboBackgroundRequired => {
                bad_request("Describe the background for the combo frame.")
            }
            Self::CharacterReferenceRequired => {
                bad_request("Upload a character reference before running the combo mode.")
            }
            Self::BackgroundReferenceRequired => {
                bad_request("Upload a background reference before running the combo mode.")
            }
            Self::InvalidSeed => bad_request("Seed must be a whole number."),
            Self::PayloadTooLarge {
                total_bytes,
                limit_bytes,
                ceiling,
            } => ApiError {
                code: StatusCode::PAYLOAD_TOO_LARGE,
                message: format!(
                    "Your references total ~{}, which exceeds the {} (~{}). {}",
                    format_bytes(*total_bytes),
                    ceiling.label(),
                    format_bytes(*limit_bytes),
                    ceiling.remedy()
                ),
                details: Some(json!({
                    "totalBytes": total_bytes,
                    "limitBytes": limit_bytes,
                })),
            },
        }
    }
}

fn bad_request(message: &str) -> ApiError {
    ApiError {
        code: StatusCode::BAD_REQUEST,
        message: message.to_string(),
        details: None,
    }
}

pub fn format_bytes(bytes: usize) -> String {
    format!("{:.1} KB", bytes as f64 / 1024.0)
}
