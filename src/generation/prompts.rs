use super::{
    dtos::{
        background_form_dto::BackgroundFormDto, character_form_dto::CharacterFormDto,
        combo_form_dto::ComboFormDto,
    },
    models::dimensions::Dimensions,
};

pub const NONE_OPTION: &str = "None";

pub const CHARACTER_NEGATIVE_BASE: &str =
    "duplicate limbs, extra hands, cropped head, muddy textures, low detail, lowres, watermark, text artifacts";
pub const BACKGROUND_NEGATIVE_BASE: &str =
    "figures, person, character, humanoid silhouettes, blurry shapes, messy perspective, blown highlights";
pub const COMBO_NEGATIVE_BASE: &str =
    "mismatched lighting, double exposure, floating feet, duplicated limbs, messy compositing, grainy noise";

fn is_active(value: &str) -> bool {
    !value.is_empty() && value != NONE_OPTION
}

fn filled(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    Some(trimmed)
}

pub fn merge_negatives(base: &str, extra: &str) -> String {
    match filled(extra) {
        Some(extra) => format!("{}, {}", base, extra),
        None => base.to_string(),
    }
}

pub fn build_character_prompt(form: &CharacterFormDto, dimensions: &Dimensions) -> String {
    let mut parts = vec![
        "ultra-detailed character concept, production-ready illustration".to_string(),
        format!("concept: {}", form.concept.trim()),
    ];

    if is_active(&form.style) {
        parts.push(format!("style: {}", form.style));
    }
    if is_active(&form.hair_style) || is_active(&form.hair_color) {
        let style = match is_active(&form.hair_style) {
            true => form.hair_style.as_str(),
            false => "styled",
        };
        let color = match is_active(&form.hair_color) {
            true => format!(", color {}", form.hair_color),
            false => String::new(),
        };
        parts.push(format!("hair: {}{}", style, color));
    }

    let mut face = Vec::new();
    if is_active(&form.eye_color) {
        face.push(format!("eyes {}", form.eye_color));
    }
    if is_active(&form.expression) {
        face.push(form.expression.to_string());
    }
    if !face.is_empty() {
        parts.push(format!("face: {}", face.join(", ")));
    }

    if let Some(wardrobe) = filled(&form.wardrobe) {
        parts.push(format!("wardrobe: {}", wardrobe));
    }
    if let Some(props) = filled(&form.props) {
        parts.push(format!("props: {}", props));
    }
    if is_active(&form.pose) {
        parts.push(format!("pose: {}", form.pose));
    }
    if is_active(&form.lighting) {
        parts.push(format!("lighting: {}", form.lighting));
    }

    parts.push(format!(
        "final render {}x{}, clean linework, cinematic depth of field",
        dimensions.width, dimensions.height
    ));

    parts.join(", ")
}

pub fn build_character_negative_prompt(form: &CharacterFormDto) -> String {
    merge_negatives(CHARACTER_NEGATIVE_BASE, &form.negative)
}

pub fn build_background_prompt(form: &BackgroundFormDto, dimensions: &Dimensions) -> String {
    let mut parts = vec![
        "cinematic environment matte painting".to_string(),
        format!("location: {}", form.location.trim()),
    ];

    let labelled = [
        ("environment type", &form.environment_type),
        ("time of day", &form.time_of_day),
        ("color palette", &form.palette),
        ("atmosphere", &form.atmosphere),
        ("focal element", &form.focal_element),
        ("style", &form.style),
    ];
    for (label, value) in labelled {
        if is_active(value) {
            parts.push(format!("{}: {}", label, value));
        }
    }

    parts.push(format!(
        "rendered at {}x{}, depth cues, no characters",
        dimensions.width, dimensions.height
    ));

    parts.join(", ")
}

pub fn build_background_negative_prompt(form: &BackgroundFormDto) -> String {
    merge_negatives(BACKGROUND_NEGATIVE_BASE, &form.negative)
}

pub fn build_combo_prompt(form: &ComboFormDto, dimensions: &Dimensions) -> String {
    let mut parts = vec![
        "hero shot blending character and background seamlessly".to_string(),
        format!("character: {}", form.character_description.trim()),
        format!("environment: {}", form.background_description.trim()),
    ];

    if let Some(interaction) = filled(&form.interaction) {
        parts.push(format!("interaction: {}", interaction));
    }

    parts.push("matched lighting, shared color grade, grounded shadows".to_string());
    parts.push(format!("final frame {}x{}", dimensions.width, dimensions.height));

    parts.join(", ")
}

pub fn build_combo_negative_prompt(form: &ComboFormDto) -> String {
    merge_negatives(COMBO_NEGATIVE_BASE, &form.negative)
}
