use crate::app::{models::api_error::ApiError, util::encoding::sanitize_base64_image};

use super::{
    dtos::generation_request_dto::GenerationRequestDto,
    enums::generation_mode::GenerationMode,
    errors::GenerationApiError,
    models::{
        build_options::{BuildOptions, DEFAULT_CFG, DEFAULT_STEPS},
        dimensions::Dimensions,
        generation_request::GenerationRequest,
        reference_image::ReferenceImage,
    },
    prompts, seed,
};

pub fn build_generation_request(
    dto: &GenerationRequestDto,
    options: &BuildOptions,
) -> Result<GenerationRequest, ApiError> {
    build(dto, options).map_err(|e| e.value())
}

fn build(
    dto: &GenerationRequestDto,
    options: &BuildOptions,
) -> Result<GenerationRequest, GenerationApiError> {
    let mode = dto.mode();
    let (width, height) = dto.requested_dimensions();
    let dimensions = Dimensions::clamp(width, height, options.default_dimensions);
    let (prompt, composed_negative) = compose_prompts(dto, mode, &dimensions)?;
    let seed = seed::resolve_seed(dto.seed.as_ref(), dto.form_seed())?;

    let negative_prompt = match dto.negative_prompt.as_deref().map(|n| n.trim()) {
        Some(negative) if !negative.is_empty() => negative.to_string(),
        _ => composed_negative.unwrap_or_default(),
    };

    let image_object_key = non_blank(dto.image_object_key.as_deref());
    let image_url = non_blank(dto.image_url.as_deref());

    let character_inline = dto
        .image_base64
        .as_deref()
        .and_then(sanitize_base64_image)
        .map(ReferenceImage::Inline);
    let background_inline = dto
        .background_image_base64
        .as_deref()
        .and_then(sanitize_base64_image)
        .map(ReferenceImage::Inline);

    if mode == GenerationMode::Combo {
        let has_character = character_inline.is_some() || image_object_key.is_some() || image_url.is_some();
        if !has_character {
            return Err(GenerationApiError::CharacterReferenceRequired);
        }
        if background_inline.is_none() {
            return Err(GenerationApiError::BackgroundReferenceRequired);
        }
    }

    let request = GenerationRequest {
        mode,
        prompt,
        negative_prompt,
        dimensions,
        steps: dto.steps.unwrap_or(DEFAULT_STEPS),
        cfg: dto.cfg.unwrap_or(DEFAULT_CFG),
        seed,
        character_reference: character_inline.unwrap_or(ReferenceImage::Placeholder),
        background_reference: background_inline.unwrap_or(ReferenceImage::Placeholder),
        image_object_key,
        image_url,
        metadata: dto.metadata.clone(),
    };

    let total_bytes = request.inline_image_bytes();
    if total_bytes > options.max_inline_image_bytes {
        return Err(GenerationApiError::PayloadTooLarge {
            total_bytes,
            limit_bytes: options.max_inline_image_bytes,
            ceiling: options.ceiling,
        });
    }

    Ok(request)
}

/// Returns the prompt and, when it was composed from a form, the matching
/// negative prompt.
fn compose_prompts(
    dto: &GenerationRequestDto,
    mode: GenerationMode,
    dimensions: &Dimensions,
) -> Result<(String, Option<String>), GenerationApiError> {
    let direct = dto.direct_prompt().map(|prompt| prompt.to_string());

    match mode {
        GenerationMode::Character => {
            let Some(form) = &dto.character else {
                return direct.map(|p| (p, None)).ok_or(GenerationApiError::PromptRequired);
            };
            let negative = Some(prompts::build_character_negative_prompt(form));
            if let Some(prompt) = direct {
                return Ok((prompt, negative));
            }
            if form.concept.trim().is_empty() {
                return Err(GenerationApiError::CharacterConceptRequired);
            }
            Ok((prompts::build_character_prompt(form, dimensions), negative))
        }
        GenerationMode::Background => {
            let Some(form) = &dto.background else {
                return direct.map(|p| (p, None)).ok_or(GenerationApiError::PromptRequired);
            };
            let negative = Some(prompts::build_background_negative_prompt(form));
            if let Some(prompt) = direct {
                return Ok((prompt, negative));
            }
            if form.location.trim().is_empty() {
                return Err(GenerationApiError::LocationRequired);
            }
            Ok((prompts::build_background_prompt(form, dimensions), negative))
        }
        GenerationMode::Combo => {
            let Some(form) = &dto.combo else {
                return direct.map(|p| (p, None)).ok_or(GenerationApiError::PromptRequired);
            };
            let negative = Some(prompts::build_combo_negative_prompt(form));
            if let Some(prompt) = direct {
                return Ok((prompt, negative));
            }
            if form.character_description.trim().is_empty() {
                return Err(GenerationApiError::ComboCharacterRequired);
            }
            if form.background_description.trim().is_empty() {
                return Err(GenerationApiError::ComboBackgroundRequired);
            }
            Ok((prompts::build_combo_prompt(form, dimensions), negative))
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
}
