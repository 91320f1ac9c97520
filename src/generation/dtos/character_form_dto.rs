use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterFormDto {
    #[validate(length(max = 1000, message = "concept must be at most 1000 characters."))]
    pub concept: String,
    pub hair_style: String,
    pub hair_color: String,
    pub eye_color: String,
    pub expression: String,
    #[validate(length(max = 500, message = "wardrobe must be at most 500 characters."))]
    pub wardrobe: String,
    #[validate(length(max = 500, message = "props must be at most 500 characters."))]
    pub props: String,
    pub pose: String,
    pub lighting: String,
    pub style: String,
    #[validate(length(max = 1000, message = "negative must be at most 1000 characters."))]
    pub negative: String,
    pub seed: String,
}
