use crate::generation::models::dimensions::Dimensions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionPreset {
    Square,
    Wide,
}

impl ResolutionPreset {
    pub const ALL: [ResolutionPreset; 2] = [Self::Square, Self::Wide];

    pub fn key(&self) -> &str {
        match *self {
            Self::Square => "square",
            Self::Wide => "wide",
        }
    }

    pub fn label(&self) -> &str {
        match *self {
            Self::Square => "Square 1328 × 1328",
            Self::Wide => "Cinematic 1664 × 928",
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        match *self {
            Self::Square => Dimensions::new(1328, 1328),
            Self::Wide => Dimensions::new(1664, 928),
        }
    }

    pub fn from_dimensions(width: u32, height: u32) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.dimensions() == Dimensions::new(width, height))
    }
}
