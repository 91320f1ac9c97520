use serde::Serialize;
use serde_json::Value;

use crate::generation::{
    enums::generation_mode::GenerationMode,
    models::{generation_request::GenerationRequest, reference_image::PLACEHOLDER_IMAGE_BASE64},
};

pub const DEFAULT_MODEL_NAME: &str = "svdq-fp4_r128-qwen-image-edit-2509-lightningv2.0-4steps.safetensors";
pub const DEFAULT_LORA_NAME: &str = "Qwen-Anime-V1.safetensors";
pub const DEFAULT_CLIP_NAME: &str = "clip/qwen_2.5_vl_7b_fp8_scaled.1.safetensors";
pub const DEFAULT_VAE_NAME: &str = "qwen_image_vae.1.safetensors";

#[derive(Debug, Serialize)]
pub struct InputSpec {
    pub input: RunpodInput,
}

#[derive(Debug, Serialize)]
pub struct RunpodInput {
    pub image_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image_name: Option<String>,
    pub model_name: String,
    pub lora_name: String,
    pub clip_name: String,
    pub vae_name: String,
    pub prompt: String,
    pub negative_prompt: String,
    pub width: u32,
    pub height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub steps: u32,
    pub cfg: f64,
    pub sampler_name: String,
    pub scheduler: String,
    pub denoise: f64,
    pub shift: f64,
    pub batch_size: u32,
    pub cpu_offload: String,
    pub num_blocks_on_gpu: u32,
    pub use_pin_memory: String,
    pub timeout: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_object_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<GenerationMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl Default for RunpodInput {
    fn default() -> Self {
        Self {
            image_name: PLACEHOLDER_IMAGE_BASE64.to_string(),
            background_image_name: None,
            model_name: DEFAULT_MODEL_NAME.to_string(),
            lora_name: DEFAULT_LORA_NAME.to_string(),
            clip_name: DEFAULT_CLIP_NAME.to_string(),
            vae_name: DEFAULT_VAE_NAME.to_string(),
            prompt: String::new(),
            negative_prompt: String::new(),
            width: 1664,
            height: 928,
            seed: None,
            steps: 2,
            cfg: 1.0,
            sampler_name: "euler".to_string(),
            scheduler: "simple".to_string(),
            denoise: 1.0,
            shift: 3.0,
            batch_size: 1,
            cpu_offload: "disable".to_string(),
            num_blocks_on_gpu: 40,
            use_pin_memory: "enable".to_string(),
            timeout: 180,
            image_object_key: None,
            image_url: None,
            mode: None,
            metadata: None,
        }
    }
}

impl InputSpec {
    pub fn from_request(request: &GenerationRequest) -> Self {
        Self {
            input: RunpodInput {
                image_name: request.character_reference.base64().to_string(),
                background_image_name: Some(request.background_reference.base64().to_string()),
                prompt: request.prompt.to_string(),
                negative_prompt: request.negative_prompt.to_string(),
                width: request.dimensions.width,
                height: request.dimensions.height,
                seed: Some(request.seed),
                steps: request.steps,
                cfg: request.cfg,
                image_object_key: request.image_object_key.clone(),
                image_url: request.image_url.clone(),
                mode: Some(request.mode),
                metadata: request.metadata.clone(),
                ..RunpodInput::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::generation::models::{dimensions::Dimensions, reference_image::ReferenceImage};

    fn request(mode: GenerationMode) -> GenerationRequest {
        GenerationRequest {
            mode,
            prompt: "a lighthouse".to_string(),
            negative_prompt: "blurry".to_string(),
            dimensions: Dimensions::new(1328, 1328),
            steps: 4,
            cfg: 1.5,
            seed: 42,
            character_reference: ReferenceImage::Inline("QUJD".to_string()),
            background_reference: ReferenceImage::Placeholder,
            image_object_key: None,
            image_url: None,
            metadata: Some(json!({ "source": "test" })),
        }
    }

    #[test]
    fn request_fields_overwrite_defaults() {
        let value = serde_json::to_value(InputSpec::from_request(&request(GenerationMode::Character))).unwrap();
        let input = &value["input"];

        assert_eq!(input["image_name"], "QUJD");
        assert_eq!(input["prompt"], "a lighthouse");
        assert_eq!(input["negative_prompt"], "blurry");
        assert_eq!(input["width"], 1328);
        assert_eq!(input["seed"], 42);
        assert_eq!(input["steps"], 4);
        assert_eq!(input["cfg"], 1.5);
        assert_eq!(input["mode"], "character");
        assert_eq!(input["metadata"]["source"], "test");
        assert_eq!(input["model_name"], DEFAULT_MODEL_NAME);
        assert_eq!(input["sampler_name"], "euler");
        assert_eq!(input["num_blocks_on_gpu"], 40);
        assert_eq!(input["timeout"], 180);
        assert_eq!(input["background_image_name"], PLACEHOLDER_IMAGE_BASE64);
        assert!(input.get("image_object_key").is_none());
    }

    #[test]
    fn combo_requests_carry_background_slot() {
        let mut combo = request(GenerationMode::Combo);
        combo.background_reference = ReferenceImage::Inline("REVG".to_string());
        combo.image_object_key = Some("uploads/2024-01-01/a.png".to_string());

        let value = serde_json::to_value(InputSpec::from_request(&combo)).unwrap();

        assert_eq!(value["input"]["background_image_name"], "REVG");
        assert_eq!(value["input"]["image_object_key"], "uploads/2024-01-01/a.png");
    }
}
