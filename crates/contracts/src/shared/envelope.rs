//! Response envelopes.
//!
//! List endpoints answer either with a bare array or with `{"data": [...]}`.
//! Anything else is treated as an empty list and logged, never as an error.

use serde::de::DeserializeOwned;
use serde_json::Value;

pub fn unwrap_list<T: DeserializeOwned>(body: Value) -> Result<Vec<T>, serde_json::Error> {
    let rows = match body {
        Value::Array(rows) => rows,
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(rows)) => rows,
            _ => {
                log::warn!("list response without a data array, using an empty list");
                return Ok(Vec::new());
            }
        },
        other => {
            log::warn!("unexpected list response shape: {}", shape_name(&other));
            return Ok(Vec::new());
        }
    };
    serde_json::from_value(Value::Array(rows))
}

/// Single-entity responses: `{"data": {...}}` or the bare object.
pub fn unwrap_item<T: DeserializeOwned>(body: Value) -> Result<T, serde_json::Error> {
    if let Value::Object(map) = &body {
        if let Some(inner @ Value::Object(_)) = map.get("data") {
            return serde_json::from_value(inner.clone());
        }
    }
    serde_json::from_value(body)
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: i64,
    }

    #[test]
    fn bare_array_and_envelope_decode_the_same() {
        let bare: Vec<Row> = unwrap_list(json!([{"id": 1}, {"id": 2}])).unwrap();
        let wrapped: Vec<Row> = unwrap_list(json!({"data": [{"id": 1}, {"id": 2}]})).unwrap();
        assert_eq!(bare, vec![Row { id: 1 }, Row { id: 2 }]);
        assert_eq!(bare, wrapped);
    }

    #[test]
    fn unknown_shapes_fall_back_to_empty() {
        for body in [json!({"items": []}), json!({"data": {"id": 1}}), json!(null), json!("x")] {
            let rows: Vec<Row> = unwrap_list(body).unwrap();
            assert!(rows.is_empty());
        }
    }

    #[test]
    fn malformed_rows_are_an_error() {
        let result: Result<Vec<Row>, _> = unwrap_list(json!([{"id": "uno"}]));
        assert!(result.is_err());
    }

    #[test]
    fn item_envelope_is_optional() {
        let wrapped: Row = unwrap_item(json!({"data": {"id": 4}, "message": "ok"})).unwrap();
        let bare: Row = unwrap_item(json!({"id": 4})).unwrap();
        assert_eq!(wrapped, bare);
    }
}
