use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    Accelerator,
    Direct,
}

impl Transport {
    /// Payloads above the accelerator ceiling skip the proxy and go direct.
    pub fn for_inline_bytes(inline_bytes: usize, accelerator_max_image_bytes: usize) -> Self {
        if inline_bytes > accelerator_max_image_bytes {
            return Self::Direct;
        }

        Self::Accelerator
    }

    pub fn value(&self) -> &str {
        match *self {
            Self::Accelerator => "accelerator",
            Self::Direct => "direct",
        }
    }
}
