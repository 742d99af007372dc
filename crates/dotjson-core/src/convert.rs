//! Conversions between the document tree and `serde_json::Value`.
//!
//! These are free functions rather than `From`/`TryFrom` impls: both value
//! types live in foreign crates, so trait impls are not an option here.

use dotjson_tree::{JsonArray, JsonObject, JsonValue};

use crate::{Error, Result};

/// Converts a document tree into a `serde_json::Value`.
///
/// Numbers that are not representable as a `serde_json::Number` (non-finite
/// values smuggled in through the `Number` variant) map to `null`, mirroring
/// what `serde_json` itself does when serializing.
pub fn to_serde_value(value: &JsonValue) -> serde_json::Value {
    match value {
        JsonValue::Null => serde_json::Value::Null,
        JsonValue::Bool(b) => serde_json::Value::Bool(*b),
        JsonValue::Number(n) => serde_json::Number::from_f64(*n)
            .map_or(serde_json::Value::Null, serde_json::Value::Number),
        JsonValue::String(s) => serde_json::Value::String(s.clone()),
        JsonValue::Array(arr) => {
            serde_json::Value::Array(arr.iter().map(to_serde_value).collect())
        }
        JsonValue::Object(obj) => serde_json::Value::Object(
            obj.iter()
                .map(|(name, item)| (name.to_owned(), to_serde_value(item)))
                .collect(),
        ),
    }
}

/// Converts a `serde_json::Value` into a document tree.
///
/// Fails on numbers with no finite `f64` representation. Object member
/// order follows `serde_json`'s map iteration order.
pub fn from_serde_value(value: &serde_json::Value) -> Result<JsonValue> {
    match value {
        serde_json::Value::Null => Ok(JsonValue::Null),
        serde_json::Value::Bool(b) => Ok(JsonValue::Bool(*b)),
        serde_json::Value::Number(n) => {
            let float = n
                .as_f64()
                .filter(|f| f.is_finite())
                .ok_or_else(|| Error::UnrepresentableNumber(n.to_string()))?;
            Ok(JsonValue::Number(float))
        }
        serde_json::Value::String(s) => Ok(JsonValue::String(s.clone())),
        serde_json::Value::Array(items) => {
            let mut arr = JsonArray::new();
            for item in items {
                arr.push(from_serde_value(item)?);
            }
            Ok(JsonValue::Array(arr))
        }
        serde_json::Value::Object(map) => {
            let mut obj = JsonObject::new();
            for (name, item) in map {
                // serde_json maps cannot hold duplicate keys.
                obj.add(name.clone(), from_serde_value(item)?)?;
            }
            Ok(JsonValue::Object(obj))
        }
    }
}
