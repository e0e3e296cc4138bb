//! Flattens typed filter structs into query-string pairs.
//!
//! Rules: `null` is dropped, scalars are stringified, nested objects become
//! `parent[child]` and arrays repeat the key as `key[]`.

use serde::Serialize;
use serde_json::Value;
use tutoradmin_core::error::{AdminError, Result};

/// Serializes `value` and flattens it into ordered `(key, value)` pairs.
///
/// `value` must serialize to a JSON object (or `null`, which yields nothing).
pub fn to_query_pairs<T: Serialize + ?Sized>(value: &T) -> Result<Vec<(String, String)>> {
    let json = serde_json::to_value(value)?;
    let mut pairs = Vec::new();
    match json {
        Value::Null => {}
        Value::Object(map) => {
            for (key, value) in map {
                flatten_into(&mut pairs, key, value);
            }
        }
        other => {
            return Err(AdminError::config(format!(
                "Query parameters must be an object, got {}",
                kind_name(&other)
            )));
        }
    }
    Ok(pairs)
}

fn flatten_into(pairs: &mut Vec<(String, String)>, key: String, value: Value) {
    match value {
        Value::Null => {}
        Value::Bool(b) => pairs.push((key, b.to_string())),
        Value::Number(n) => pairs.push((key, n.to_string())),
        Value::String(s) => pairs.push((key, s)),
        Value::Array(items) => {
            let array_key = format!("{}[]", key);
            for item in items {
                flatten_into(pairs, array_key.clone(), item);
            }
        }
        Value::Object(map) => {
            for (child, value) in map {
                flatten_into(pairs, format!("{}[{}]", key, child), value);
            }
        }
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    #[test]
    fn test_scalars_and_nulls() {
        let pairs = to_query_pairs(&json!({
            "search": "ada",
            "page": 2,
            "verified": true,
            "status": null
        }))
        .unwrap();

        assert_eq!(pairs.len(), 3);
        assert!(pairs.contains(&pair("search", "ada")));
        assert!(pairs.contains(&pair("page", "2")));
        assert!(pairs.contains(&pair("verified", "true")));
    }

    #[test]
    fn test_nested_objects_and_arrays() {
        let pairs = to_query_pairs(&json!({
            "dateRange": { "from": "2024-01-01", "to": "2024-02-01" },
            "ids": ["a", "b"]
        }))
        .unwrap();

        assert!(pairs.contains(&pair("dateRange[from]", "2024-01-01")));
        assert!(pairs.contains(&pair("dateRange[to]", "2024-02-01")));
        assert!(pairs.contains(&pair("ids[]", "a")));
        assert!(pairs.contains(&pair("ids[]", "b")));
    }

    #[test]
    fn test_none_yields_no_pairs() {
        let filter: Option<u32> = None;
        assert!(to_query_pairs(&filter).unwrap().is_empty());
    }

    #[test]
    fn test_non_object_is_rejected() {
        let err = to_query_pairs(&json!(["a"])).unwrap_err();
        assert!(matches!(err, AdminError::Config(_)));
    }
}
