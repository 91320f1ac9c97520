use regex::Regex;

lazy_static! {
    static ref BASE64_REGEX: Regex = Regex::new(r"^[A-Za-z0-9+/=]+$").unwrap();
}

pub fn is_base64_text(value: &str) -> bool {
    BASE64_REGEX.is_match(value)
}

/// Byte size of the decoded payload, `floor(len * 3 / 4)`.
pub fn estimate_base64_bytes(base64: &str) -> usize {
    base64.len() * 3 / 4
}

/// Returns the payload after the comma of a data url, or the input itself.
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    let encoded = match data_url.split_once(',') {
        Some((_, encoded)) => encoded,
        None => data_url,
    };

    let trimmed = encoded.trim();
    if trimmed.is_empty() {
        return None;
    }

    Some(trimmed)
}

pub fn estimate_data_url_bytes(data_url: &str) -> usize {
    match extract_base64_from_data_url(data_url) {
        Some(base64) => estimate_base64_bytes(base64),
        None => 0,
    }
}

/// Strips a data url prefix and whitespace, then rejects anything that is not
/// base64 text.
pub fn sanitize_base64_image(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    let sanitized: String = if trimmed.starts_with("data:") {
        trimmed
            .split_once(',')
            .map(|(_, encoded)| encoded.to_string())
            .unwrap_or_default()
    } else {
        trimmed.chars().filter(|c| !c.is_whitespace()).collect()
    };

    if sanitized.is_empty() || !is_base64_text(&sanitized) {
        return None;
    }

    Some(sanitized)
}

pub fn to_data_url(mime_type: &str, data: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, base64::encode(data))
}
