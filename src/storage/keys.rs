use regex::Regex;

use crate::app::util::time::current_date;

pub const UPLOAD_KEY_PREFIX: &str = "uploads";
pub const DEFAULT_REGION: &str = "us-east-1";

lazy_static! {
    static ref S3API_HOST_REGEX: Regex = Regex::new(r"s3api-([^.]+)\.").unwrap();
}

pub fn extension_from_mime(mime_type: &str) -> Option<&'static str> {
    let lowered = mime_type.to_lowercase();

    if lowered.contains("png") {
        return Some("png");
    }
    if lowered.contains("jpeg") || lowered.contains("jpg") {
        return Some("jpg");
    }
    if lowered.contains("webp") {
        return Some("webp");
    }

    None
}

pub fn sanitize_key_prefix(prefix: &str) -> String {
    prefix.trim().trim_matches('/').to_string()
}

/// `<prefix>/<YYYY-MM-DD>/<uuid>[.ext]`
pub fn build_object_key(prefix: &str, date: &str, id: &str, mime_type: &str) -> String {
    let file_name = match extension_from_mime(mime_type) {
        Some(extension) => format!("{}.{}", id, extension),
        None => id.to_string(),
    };

    let prefix = sanitize_key_prefix(prefix);
    if prefix.is_empty() {
        return format!("{}/{}", date, file_name);
    }

    format!("{}/{}/{}", prefix, date, file_name)
}

pub fn new_upload_key(mime_type: &str) -> String {
    let id = uuid::Uuid::new_v4().to_string();
    build_object_key(UPLOAD_KEY_PREFIX, &current_date(), &id, mime_type)
}

pub fn infer_region_from_endpoint(endpoint: &str) -> Option<String> {
    S3API_HOST_REGEX
        .captures(endpoint)
        .and_then(|captures| captures.get(1))
        .map(|region| region.as_str().to_string())
}

pub fn resolve_region(configured: Option<&str>, endpoint: &str) -> String {
    if let Some(region) = configured {
        return region.to_string();
    }

    infer_region_from_endpoint(endpoint).unwrap_or_else(|| DEFAULT_REGION.to_string())
}
