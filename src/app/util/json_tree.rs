use serde_json::{Map, Value};

use super::encoding::is_base64_text;

/// Deepest nesting level visited by the walks below.
pub const MAX_WALK_DEPTH: usize = 5;

pub const REDACTED_STRING: &str = "[omitted large string]";

const MIN_INLINE_IMAGE_LEN: usize = 100;
const MIN_REDACTED_LEN: usize = 200;

/// Depth-first search returning the first value `f` accepts. Nodes nested
/// deeper than `max_depth` are never visited.
pub fn find_map_bounded<T, F>(value: &Value, max_depth: usize, f: &F) -> Option<T>
where
    F: Fn(&Value) -> Option<T>,
{
    find_map_at(value, 0, max_depth, f)
}

fn find_map_at<T, F>(value: &Value, depth: usize, max_depth: usize, f: &F) -> Option<T>
where
    F: Fn(&Value) -> Option<T>,
{
    if depth > max_depth {
        return None;
    }

    if let Some(found) = f(value) {
        return Some(found);
    }

    match value {
        Value::Array(items) => items
            .iter()
            .find_map(|item| find_map_at(item, depth + 1, max_depth, f)),
        Value::Object(map) => map
            .values()
            .find_map(|item| find_map_at(item, depth + 1, max_depth, f)),
        _ => None,
    }
}

/// Rebuilds the tree, replacing strings for which `f` returns a substitute.
/// Subtrees deeper than `max_depth` are copied untouched.
pub fn map_strings_bounded<F>(value: &Value, max_depth: usize, f: &F) -> Value
where
    F: Fn(&str) -> Option<String>,
{
    map_strings_at(value, 0, max_depth, f)
}

fn map_strings_at<F>(value: &Value, depth: usize, max_depth: usize, f: &F) -> Value
where
    F: Fn(&str) -> Option<String>,
{
    if depth > max_depth {
        return value.clone();
    }

    match value {
        Value::String(s) => match f(s) {
            Some(replacement) => Value::String(replacement),
            None => value.clone(),
        },
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| map_strings_at(item, depth + 1, max_depth, f))
                .collect(),
        ),
        Value::Object(map) => {
            let mut mapped = Map::with_capacity(map.len());
            for (key, item) in map {
                mapped.insert(key.to_string(), map_strings_at(item, depth + 1, max_depth, f));
            }
            Value::Object(mapped)
        }
        _ => value.clone(),
    }
}

/// First string anywhere in `output` that looks like an inline base64 image.
pub fn find_base64_image(output: &Value) -> Option<String> {
    find_map_bounded(output, MAX_WALK_DEPTH, &|value: &Value| match value {
        Value::String(s) => inline_image_payload(s),
        _ => None,
    })
}

fn inline_image_payload(value: &str) -> Option<String> {
    let sanitized: String = if value.starts_with("data:") {
        value.split_once(',').map(|(_, b)| b.to_string()).unwrap_or_default()
    } else {
        value.chars().filter(|c| !c.is_whitespace()).collect()
    };

    if sanitized.len() > MIN_INLINE_IMAGE_LEN
        && sanitized.len() % 4 == 0
        && is_base64_text(&sanitized)
    {
        return Some(sanitized);
    }

    None
}

/// First non-empty string stored under one of `keys` in any nested object.
pub fn find_string_field(value: &Value, keys: &[&str]) -> Option<String> {
    find_map_bounded(value, MAX_WALK_DEPTH, &|node: &Value| {
        let Value::Object(map) = node else { return None };

        keys.iter().find_map(|key| match map.get(*key) {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
            _ => None,
        })
    })
}

/// Copy of `value` safe to log or display: long base64 runs are replaced.
pub fn redact_large_strings(value: &Value) -> Value {
    map_strings_bounded(value, MAX_WALK_DEPTH, &|s: &str| {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.len() > MIN_REDACTED_LEN && is_base64_text(&compact) {
            return Some(REDACTED_STRING.to_string());
        }

        None
    })
}
