//! Field probing helpers
//!
//! The same "try a fixed list of field names in priority order" pattern
//! shows up in query extraction, group aggregation, and image resolution,
//! each with its own coercion. [`first_match`] is that pattern once.

use serde_json::Value;

/// Probe `fields` on `value` in order, returning the first candidate the
/// coercion accepts. Returns `None` when `value` is not an object or no
/// field yields anything.
pub fn first_match<T>(
    value: &Value,
    fields: &[&str],
    coerce: impl Fn(&Value) -> Option<T>,
) -> Option<T> {
    let map = value.as_object()?;
    fields.iter().find_map(|name| map.get(*name).and_then(&coerce))
}

/// Coerce a value to a single string: a string as-is, or the first string
/// element of an array.
pub fn first_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => items
            .iter()
            .find_map(|item| item.as_str())
            .map(str::to_string),
        _ => None,
    }
}

/// Coerce a value to a list of trimmed, non-empty strings: a scalar string
/// becomes a one-element list, an array keeps its string elements. `None`
/// when nothing non-empty survives.
pub fn string_list(value: &Value) -> Option<Vec<String>> {
    let raw: Vec<&str> = match value {
        Value::String(s) => vec![s.as_str()],
        Value::Array(items) => items.iter().filter_map(|item| item.as_str()).collect(),
        _ => return None,
    };

    let cleaned: Vec<String> = raw
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// Coerce a value to an absolute URL string (anything starting with "http").
pub fn absolute_url(value: &Value) -> Option<String> {
    first_string(value).filter(|s| s.starts_with("http"))
}
