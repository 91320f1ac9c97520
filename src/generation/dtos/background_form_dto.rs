use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct BackgroundFormDto {
    #[validate(length(max = 1000, message = "location must be at most 1000 characters."))]
    pub location: String,
    pub environment_type: String,
    pub palette: String,
    pub focal_element: String,
    pub time_of_day: String,
    pub atmosphere: String,
    pub style: String,
    #[validate(length(max = 1000, message = "negative must be at most 1000 characters."))]
    pub negative: String,
    pub seed: String,
}
