#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobPreview {
    /// Provider-hosted image.
    Url(String),
    /// `data:image/png;base64,...`
    InlineImage(String),
    /// Bucket key still to be exchanged for a signed url.
    ObjectKey(String),
}
