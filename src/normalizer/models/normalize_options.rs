pub const REFERENCE_MAX_DIMENSION: u32 = 1536;
pub const MAX_INLINE_IMAGE_BYTES: usize = 320_000;
pub const MAX_UPLOAD_BYTES: usize = 8 * 1024 * 1024;

#[derive(Debug, Clone, Copy)]
pub struct NormalizeOptions {
    /// Longest side after the initial downscale.
    pub max_dimension: u32,
    /// Encoded size the quality/shrink loop aims for.
    pub target_bytes: usize,
    pub max_upload_bytes: usize,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            max_dimension: REFERENCE_MAX_DIMENSION,
            target_bytes: MAX_INLINE_IMAGE_BYTES,
            max_upload_bytes: MAX_UPLOAD_BYTES,
        }
    }
}
