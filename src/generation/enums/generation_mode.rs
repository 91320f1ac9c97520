use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    #[default]
    Character,
    Background,
    Combo,
}

impl GenerationMode {
    pub fn value(&self) -> &str {
        match *self {
            Self::Character => "character",
            Self::Background => "background",
            Self::Combo => "combo",
        }
    }
}
