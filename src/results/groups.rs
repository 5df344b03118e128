//! Muscle-group aggregation over heterogeneous listing entries

use super::fields;
use serde_json::Value;
use std::collections::BTreeSet;

/// Entry fields checked for a group name, in priority order.
pub const GROUP_FIELDS: [&str; 4] = ["name", "group", "muscle_group", "category"];

/// Flatten a raw muscle-group listing into a deduplicated, sorted list of
/// names. Anything other than an array yields an empty list; entries that
/// are neither strings nor objects are skipped.
pub fn aggregate_groups(payload: &Value) -> Vec<String> {
    let Some(entries) = payload.as_array() else {
        return Vec::new();
    };

    let mut groups = BTreeSet::new();
    for entry in entries {
        match entry {
            Value::String(s) => {
                let trimmed = s.trim();
                if !trimmed.is_empty() {
                    groups.insert(trimmed.to_string());
                }
            }
            Value::Object(_) => {
                if let Some(names) = fields::first_match(entry, &GROUP_FIELDS, fields::string_list)
                {
                    groups.extend(names);
                }
            }
            _ => {}
        }
    }

    groups.into_iter().collect()
}
