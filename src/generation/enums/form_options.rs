//! Choices offered by the structured generation forms. The first entry of
//! every list is the `None` sentinel, which is left out of composed prompts.

use crate::generation::prompts::NONE_OPTION;

pub const HAIR_STYLE_OPTIONS: &[&str] = &[
    NONE_OPTION, "Short", "Medium length", "Long", "Curly", "Ponytail", "Undercut",
];
pub const HAIR_COLOR_OPTIONS: &[&str] = &[
    NONE_OPTION, "Black", "Dark brown", "Light brown", "Blonde", "Red", "Silver", "Pastel blue",
];
pub const EYE_COLOR_OPTIONS: &[&str] = &[
    NONE_OPTION, "Brown", "Hazel", "Blue", "Green", "Gray", "Amber",
];
pub const EXPRESSION_OPTIONS: &[&str] = &[
    NONE_OPTION, "Neutral", "Soft smile", "Focused", "Serious", "Playful", "Surprised",
];
pub const POSE_OPTIONS: &[&str] = &[
    NONE_OPTION,
    "Neutral standing",
    "Three-quarter turn",
    "Hero stance",
    "Action pose",
    "Over-the-shoulder",
    "Close-up portrait",
];
pub const LIGHTING_OPTIONS: &[&str] = &[
    NONE_OPTION,
    "Soft daylight",
    "Golden hour",
    "Backlit rim light",
    "Studio softbox",
    "Neon mix",
    "Hard spotlight",
];
pub const CHARACTER_STYLE_OPTIONS: &[&str] = &[
    NONE_OPTION,
    "Anime cel shading",
    "Painterly concept art",
    "Comic ink",
    "Semi-realistic",
    "Chibi",
];

pub const ENVIRONMENT_TYPE_OPTIONS: &[&str] = &[
    NONE_OPTION,
    "City rooftop",
    "Urban alley",
    "Forest trail",
    "Mountain cliff",
    "Desert ruins",
    "Sci-fi lab",
    "Classroom interior",
];
pub const FOCAL_ELEMENT_OPTIONS: &[&str] = &[
    NONE_OPTION, "Bridge", "Tower", "Ancient tree", "Vehicle", "Statue", "Water feature",
];
pub const PALETTE_OPTIONS: &[&str] = &[
    NONE_OPTION,
    "Warm sunset",
    "Cool dusk",
    "Pastel morning",
    "Monochrome",
    "Neon accents",
    "Earth tones",
];
pub const TIME_OF_DAY_OPTIONS: &[&str] = &[
    NONE_OPTION, "Sunrise", "Daytime", "Golden hour", "Blue hour", "Night",
];
pub const ATMOSPHERE_OPTIONS: &[&str] = &[
    NONE_OPTION, "Clear air", "Light fog", "Rainy", "Snowfall", "Dusty haze", "Stormy",
];
pub const BACKGROUND_STYLE_OPTIONS: &[&str] = &[
    NONE_OPTION,
    "Matte painting",
    "Studio Ghibli inspired",
    "Low-poly stylized",
    "Photo-realistic",
    "Watercolor wash",
];
