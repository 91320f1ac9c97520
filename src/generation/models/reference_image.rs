use crate::app::util::encoding::estimate_base64_bytes;

/// 1×1 PNG sent in a slot the current mode does not use.
pub const PLACEHOLDER_IMAGE_BASE64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNk+A8AAn0B9lqQ+wAAAABJRU5ErkJggg==";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceImage {
    Inline(String),
    Placeholder,
}

impl ReferenceImage {
    pub fn base64(&self) -> &str {
        match self {
            Self::Inline(base64) => base64,
            Self::Placeholder => PLACEHOLDER_IMAGE_BASE64,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }

    pub fn estimated_bytes(&self) -> usize {
        estimate_base64_bytes(self.base64())
    }
}
