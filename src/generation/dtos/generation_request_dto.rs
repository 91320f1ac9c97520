use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::generation::enums::generation_mode::GenerationMode;

use super::{
    background_form_dto::BackgroundFormDto, character_form_dto::CharacterFormDto,
    combo_form_dto::ComboFormDto,
};

/// A seed arrives either as a JSON number or as the raw text of a form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeedInput {
    Number(u64),
    Text(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequestDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<GenerationMode>,
    #[validate(length(max = 4000, message = "prompt must be at most 4000 characters."))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[validate(length(max = 4000, message = "negativePrompt must be at most 4000 characters."))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<SeedInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cfg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_object_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image_base64: Option<String>,
    #[validate]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character: Option<CharacterFormDto>,
    #[validate]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<BackgroundFormDto>,
    #[validate]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combo: Option<ComboFormDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl GenerationRequestDto {
    pub fn mode(&self) -> GenerationMode {
        self.mode.unwrap_or_default()
    }

    /// The direct prompt, when one was supplied with any content.
    pub fn direct_prompt(&self) -> Option<&str> {
        self.prompt
            .as_deref()
            .map(|prompt| prompt.trim())
            .filter(|prompt| !prompt.is_empty())
    }

    /// Requested sides as whole pixel counts. Values that are not positive
    /// integers are dropped so the configured default applies.
    pub fn requested_dimensions(&self) -> (Option<u32>, Option<u32>) {
        (whole_pixels(self.width), whole_pixels(self.height))
    }

    /// Seed text typed into the form of the active mode.
    pub fn form_seed(&self) -> Option<&str> {
        match self.mode() {
            GenerationMode::Character => self.character.as_ref().map(|form| form.seed.as_str()),
            GenerationMode::Background => self.background.as_ref().map(|form| form.seed.as_str()),
            GenerationMode::Combo => self.combo.as_ref().map(|form| form.seed.as_str()),
        }
    }
}

fn whole_pixels(value: Option<f64>) -> Option<u32> {
    let value = value?;
    if !value.is_finite() || value <= 0.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
        return None;
    }

    Some(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requested_dimensions_drop_invalid_sides() {
        let dto = GenerationRequestDto {
            width: Some(-1.0),
            height: Some(1328.5),
            ..GenerationRequestDto::default()
        };
        assert_eq!(dto.requested_dimensions(), (None, None));

        let dto = GenerationRequestDto {
            width: Some(1328.0),
            height: Some(1e12),
            ..GenerationRequestDto::default()
        };
        assert_eq!(dto.requested_dimensions(), (Some(1328), None));
    }
}
