use serde_json::Value;

use crate::generation::enums::generation_mode::GenerationMode;

use super::{dimensions::Dimensions, reference_image::ReferenceImage};

#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub mode: GenerationMode,
    pub prompt: String,
    pub negative_prompt: String,
    pub dimensions: Dimensions,
    pub steps: u32,
    pub cfg: f64,
    pub seed: u64,
    pub character_reference: ReferenceImage,
    pub background_reference: ReferenceImage,
    pub image_object_key: Option<String>,
    pub image_url: Option<String>,
    pub metadata: Option<Value>,
}

impl GenerationRequest {
    pub fn inline_image_bytes(&self) -> usize {
        self.character_reference.estimated_bytes() + self.background_reference.estimated_bytes()
    }
}
