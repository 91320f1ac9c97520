use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ComboFormDto {
    #[validate(length(max = 1000, message = "characterDescription must be at most 1000 characters."))]
    pub character_description: String,
    #[validate(length(max = 1000, message = "backgroundDescription must be at most 1000 characters."))]
    pub background_description: String,
    #[validate(length(max = 1000, message = "interaction must be at most 1000 characters."))]
    pub interaction: String,
    #[validate(length(max = 1000, message = "negative must be at most 1000 characters."))]
    pub negative: String,
    pub seed: String,
}
