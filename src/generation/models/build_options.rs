use crate::{
    app::env::Envy,
    generation::{enums::inline_ceiling::InlineCeiling, models::dimensions::Dimensions},
};

pub const DEFAULT_STEPS: u32 = 2;
pub const DEFAULT_CFG: f64 = 1.0;

#[derive(Debug, Clone, Copy)]
pub struct BuildOptions {
    pub default_dimensions: Dimensions,
    /// Inline image budget; a request above it is rejected as too large.
    pub max_inline_image_bytes: usize,
    pub ceiling: InlineCeiling,
}

impl BuildOptions {
    /// Server-side re-check, bounded by the hard inline ceiling.
    pub fn for_server(envy: &Envy) -> Self {
        Self {
            default_dimensions: Dimensions::new(envy.runpod_output_width, envy.runpod_output_height),
            max_inline_image_bytes: envy.runpod_max_inline_image_bytes,
            ceiling: InlineCeiling::Server,
        }
    }

    /// Client-side check, bounded by the accelerator ceiling.
    pub fn for_client(envy: &Envy) -> Self {
        Self {
            default_dimensions: Dimensions::new(envy.runpod_output_width, envy.runpod_output_height),
            max_inline_image_bytes: envy.runpod_accelerator_max_image_bytes,
            ceiling: InlineCeiling::Accelerator,
        }
    }
}
