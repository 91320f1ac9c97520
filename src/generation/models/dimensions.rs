use serde::{Deserialize, Serialize};

use crate::generation::enums::resolution_preset::ResolutionPreset;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Keeps an allowed resolution pair, otherwise falls back to `default`.
    /// A half-specified pair is completed from `default` before the check.
    pub fn clamp(width: Option<u32>, height: Option<u32>, default: Dimensions) -> Self {
        let requested = Dimensions::new(
            width.unwrap_or(default.width),
            height.unwrap_or(default.height),
        );

        if requested == default {
            return default;
        }

        match ResolutionPreset::from_dimensions(requested.width, requested.height) {
            Some(preset) => preset.dimensions(),
            None => default,
        }
    }

    pub fn label(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}
