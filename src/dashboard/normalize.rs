//! Payload normalization
//!
//! The API answers either with a bare array or with a paginated object whose
//! `results` field holds the page. Anything else is treated as an empty list.

use serde_json::Value;

/// Turn a raw API payload into a plain collection
pub fn normalize(payload: Value) -> Vec<Value> {
    let collection = match payload {
        Value::Object(mut map) => match map.remove("results") {
            Some(results) => results,
            None => Value::Object(map),
        },
        other => other,
    };

    match collection {
        Value::Array(items) => items,
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paginated_results() {
        let payload = json!({
            "count": 2,
            "next": null,
            "previous": null,
            "results": [{"id": 1}, {"id": 2}]
        });
        assert_eq!(normalize(payload), vec![json!({"id": 1}), json!({"id": 2})]);
    }

    #[test]
    fn test_bare_array() {
        let payload = json!([{"id": 1}, {"id": 2}]);
        assert_eq!(normalize(payload), vec![json!({"id": 1}), json!({"id": 2})]);
    }

    #[test]
    fn test_non_array_payloads_become_empty() {
        assert!(normalize(json!({"detail": "nothing here"})).is_empty());
        assert!(normalize(json!("users")).is_empty());
        assert!(normalize(json!(42)).is_empty());
        assert!(normalize(Value::Null).is_empty());
    }

    #[test]
    fn test_results_that_is_not_an_array() {
        assert!(normalize(json!({"results": null})).is_empty());
        assert!(normalize(json!({"results": {"id": 1}})).is_empty());
    }

    #[test]
    fn test_empty_results() {
        assert!(normalize(json!({"results": []})).is_empty());
        assert!(normalize(json!([])).is_empty());
    }
}
