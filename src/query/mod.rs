//! Query extraction from loosely-typed tool arguments
//!
//! Tool callers send arguments in a range of shapes: a bare string, an
//! object with any of several recognized field names, or an object whose
//! intent has to be guessed. Extraction never fails; an unusable input
//! yields an empty string, which callers treat as "no query".

use crate::results::fields;
use serde_json::Value;

/// Argument fields checked for the search query, in priority order.
pub const QUERY_FIELDS: [&str; 5] = ["query", "exercise", "exercise_name", "term", "q"];

/// Derive a search query string from an arbitrary argument value.
///
/// Trimming and the emptiness check are the caller's job; the raw value is
/// returned so a whitespace-only query short-circuits there, not here.
pub fn extract_query(input: &Value) -> String {
    if let Value::String(s) = input {
        return s.clone();
    }

    let Value::Object(map) = input else {
        return String::new();
    };

    if let Some(query) = fields::first_match(input, &QUERY_FIELDS, |v| {
        v.as_str().filter(|s| !s.is_empty()).map(str::to_string)
    }) {
        return query;
    }

    // Last resort: a single string-valued property is unambiguous enough
    // to treat as the query. Zero or several means we cannot guess.
    let mut strings = map.values().filter_map(Value::as_str);
    match (strings.next(), strings.next()) {
        (Some(only), None) => only.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_string_passes_through() {
        assert_eq!(extract_query(&json!("  squat ")), "  squat ");
    }

    #[test]
    fn test_named_field_precedence() {
        let input = json!({"q": "late", "query": "early"});
        assert_eq!(extract_query(&input), "early");

        let input = json!({"exercise_name": "curl", "term": "press"});
        assert_eq!(extract_query(&input), "curl");
    }

    #[test]
    fn test_empty_named_field_skipped() {
        let input = json!({"query": "", "term": "deadlift"});
        assert_eq!(extract_query(&input), "deadlift");
    }

    #[test]
    fn test_single_string_property_heuristic() {
        let input = json!({"limit": 5, "keyword": "bench press"});
        assert_eq!(extract_query(&input), "bench press");
    }

    #[test]
    fn test_ambiguous_string_properties_yield_nothing() {
        let input = json!({"first": "a", "second": "b"});
        assert_eq!(extract_query(&input), "");
    }

    #[test]
    fn test_no_string_properties_yield_nothing() {
        assert_eq!(extract_query(&json!({"limit": 5})), "");
        assert_eq!(extract_query(&json!(42)), "");
        assert_eq!(extract_query(&Value::Null), "");
        assert_eq!(extract_query(&json!(["squat"])), "");
    }
}
