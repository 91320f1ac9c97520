use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

use super::enums::{form_options::*, resolution_preset::ResolutionPreset};

pub async fn get_form_options(State(state): State<Arc<AppState>>) -> Json<Value> {
    let resolutions: Vec<Value> = ResolutionPreset::ALL
        .iter()
        .map(|preset| {
            let dimensions = preset.dimensions();
            json!({
                "key": preset.key(),
                "label": preset.label(),
                "width": dimensions.width,
                "height": dimensions.height,
            })
        })
        .collect();

    Json(json!({
        "resolutions": resolutions,
        "defaultResolution": {
            "width": state.envy.runpod_output_width,
            "height": state.envy.runpod_output_height,
        },
        "acceleratorMaxImageBytes": state.envy.runpod_accelerator_max_image_bytes,
        "character": {
            "hairStyle": HAIR_STYLE_OPTIONS,
            "hairColor": HAIR_COLOR_OPTIONS,
            "eyeColor": EYE_COLOR_OPTIONS,
            "expression": EXPRESSION_OPTIONS,
            "pose": POSE_OPTIONS,
            "lighting": LIGHTING_OPTIONS,
            "style": CHARACTER_STYLE_OPTIONS,
        },
        "background": {
            "environmentType": ENVIRONMENT_TYPE_OPTIONS,
            "focalElement": FOCAL_ELEMENT_OPTIONS,
            "palette": PALETTE_OPTIONS,
            "timeOfDay": TIME_OF_DAY_OPTIONS,
            "atmosphere": ATMOSPHERE_OPTIONS,
            "style": BACKGROUND_STYLE_OPTIONS,
        },
    }))
}
