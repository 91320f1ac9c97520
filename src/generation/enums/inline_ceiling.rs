/// Which budget a request's inline images were checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineCeiling {
    Accelerator,
    Server,
}

impl InlineCeiling {
    pub fn label(&self) -> &str {
        match *self {
            Self::Accelerator => "accelerator limit",
            Self::Server => "server limit",
        }
    }

    pub fn remedy(&self) -> &str {
        match *self {
            Self::Accelerator => {
                "Disable \"Preserve original resolution\", pick the square preset, or upload smaller files."
            }
            Self::Server => "Upload smaller reference images.",
        }
    }
}
