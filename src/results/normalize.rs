//! Result-list discovery in untyped upstream payloads
//!
//! The exercise API (and the tool plumbing between it and the widgets)
//! returns results as a bare array, an object with a `results` field, a
//! typed content-parts wrapper, or any of those JSON-encoded inside a
//! string. [`find_result_list`] hunts through all of them.

use serde_json::Value;

/// Recursion cap for JSON-encoded-inside-JSON unwrapping. Nested payloads
/// deeper than this are treated as not found.
const MAX_DEPTH: usize = 4;

/// Search `value` for the first list of result records.
///
/// `Some(vec![])` means a result list was found and it is empty; `None`
/// means no list was found at all. Callers that only render results may
/// collapse the two, but the distinction keeps "upstream said nothing
/// matched" separate from "upstream said something unrecognizable".
///
/// Malformed JSON at any speculative parse step is swallowed and treated
/// as no match on that branch.
pub fn find_result_list(value: &Value) -> Option<Vec<Value>> {
    find_at_depth(value, 0)
}

fn find_at_depth(value: &Value, depth: usize) -> Option<Vec<Value>> {
    if depth > MAX_DEPTH {
        return None;
    }

    match value {
        // A bare array of records is already the answer. An array of
        // scalars is somebody else's data, not a result list.
        Value::Array(items) => {
            if items.is_empty() {
                return Some(Vec::new());
            }
            if items[0].is_object() {
                return Some(items.clone());
            }
            None
        }
        Value::Object(map) => {
            if let Some(results) = map.get("results").and_then(Value::as_array) {
                return Some(results.clone());
            }
            if let Some(results) = map
                .get("structuredContent")
                .and_then(|sc| sc.get("results"))
                .and_then(Value::as_array)
            {
                return Some(results.clone());
            }
            // Content-parts wrapper: text parts may hold a JSON-encoded
            // payload of any of the shapes above.
            if let Some(parts) = map.get("content").and_then(Value::as_array) {
                for part in parts {
                    if part.get("type").and_then(Value::as_str) != Some("text") {
                        continue;
                    }
                    let Some(text) = part.get("text").and_then(Value::as_str) else {
                        continue;
                    };
                    if let Ok(parsed) = serde_json::from_str::<Value>(text) {
                        if let Some(found) = find_at_depth(&parsed, depth + 1) {
                            return Some(found);
                        }
                    }
                }
            }
            None
        }
        Value::String(s) if s.trim_start().starts_with('{') => serde_json::from_str::<Value>(s)
            .ok()
            .and_then(|parsed| find_at_depth(&parsed, depth + 1)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_direct_array_of_records() {
        let value = json!([{"name": "Squat"}, {"name": "Lunge"}]);
        let found = find_result_list(&value).unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0]["name"], "Squat");
    }

    #[test]
    fn test_empty_array_is_found_but_empty() {
        assert_eq!(find_result_list(&json!([])), Some(vec![]));
    }

    #[test]
    fn test_array_of_scalars_is_not_a_result_list() {
        assert_eq!(find_result_list(&json!(["a", "b"])), None);
    }

    #[test]
    fn test_results_field() {
        let value = json!({"results": [{"id": 1}]});
        assert_eq!(find_result_list(&value).unwrap().len(), 1);
    }

    #[test]
    fn test_structured_content_results() {
        let value = json!({"structuredContent": {"results": [{"id": 1}, {"id": 2}]}});
        assert_eq!(find_result_list(&value).unwrap().len(), 2);
    }

    #[test]
    fn test_content_text_part_with_encoded_results() {
        let value = json!({
            "content": [{"type": "text", "text": "{\"results\":[{\"a\":1}]}"}]
        });
        let found = find_result_list(&value).unwrap();
        assert_eq!(found, vec![json!({"a": 1})]);
    }

    #[test]
    fn test_content_skips_non_text_and_bad_json() {
        let value = json!({
            "content": [
                {"type": "image", "data": "ignored"},
                {"type": "text", "text": "not json at all"},
                {"type": "text", "text": "{\"results\":[{\"b\":2}]}"}
            ]
        });
        let found = find_result_list(&value).unwrap();
        assert_eq!(found, vec![json!({"b": 2})]);
    }

    #[test]
    fn test_json_encoded_string_payload() {
        let value = json!("  {\"results\": [{\"c\": 3}]}");
        assert_eq!(find_result_list(&value).unwrap().len(), 1);
    }

    #[test]
    fn test_non_object_string_is_not_parsed() {
        assert_eq!(find_result_list(&json!("[1,2,3]")), None);
    }

    #[test]
    fn test_not_found() {
        assert_eq!(find_result_list(&json!({"message": "hi"})), None);
        assert_eq!(find_result_list(&Value::Null), None);
        assert_eq!(find_result_list(&json!(12)), None);
    }

    #[test]
    fn test_recursion_cap_on_deep_nesting() {
        // Five layers of string-encoded wrappers is past the cap.
        let mut payload = "{\"results\":[{\"x\":1}]}".to_string();
        for _ in 0..5 {
            payload = serde_json::to_string(&json!({ "content": [{"type": "text", "text": payload}] }))
                .unwrap();
        }
        let value: Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(find_result_list(&value), None);
    }

    #[test]
    fn test_shallow_nesting_within_cap() {
        let inner = "{\"results\":[{\"x\":1}]}".to_string();
        let value = json!({ "content": [{"type": "text", "text": inner}] });
        assert_eq!(find_result_list(&value).unwrap().len(), 1);
    }

    #[test]
    fn test_idempotent_on_rewrapped_output() {
        let value = json!({"results": [{"a": 1}, {"b": 2}]});
        let first = find_result_list(&value).unwrap();
        let rewrapped = json!({ "results": first.clone() });
        assert_eq!(find_result_list(&rewrapped).unwrap(), first);
    }
}
