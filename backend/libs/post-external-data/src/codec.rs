//! JSON wire format
//!
//! `{ "likeCount": <int|null>, "commentCount": <int|null>, "viewCount": <int|null> }`
//!
//! Decoding walks the three known keys by hand instead of going through the
//! serde derive so that a type mismatch reports which counter was bad.
//! Missing keys and `null` both decode to an absent counter; unknown keys
//! are ignored.

use serde_json::{Map, Value};

use crate::error::{ExternalDataError, Result};
use crate::models::{PostExternalData, COMMENT_COUNT, LIKE_COUNT, VIEW_COUNT};

/// Decode a record from JSON text
pub fn from_json(payload: &str) -> Result<PostExternalData> {
    let value: Value = serde_json::from_str(payload)
        .map_err(|e| ExternalDataError::malformed(None, format!("invalid JSON: {}", e)))?;
    from_value(value)
}

/// Decode a record from an already parsed JSON value
pub fn from_value(value: Value) -> Result<PostExternalData> {
    let object = match value {
        Value::Object(object) => object,
        other => {
            return Err(ExternalDataError::malformed(
                None,
                format!("expected a JSON object, found {}", type_name(&other)),
            ))
        }
    };

    let mut data = PostExternalData::new();
    data.set_like_count(counter(&object, LIKE_COUNT)?);
    data.set_comment_count(counter(&object, COMMENT_COUNT)?);
    data.set_view_count(counter(&object, VIEW_COUNT)?);
    Ok(data)
}

/// Encode a record as JSON text; absent counters are omitted
pub fn to_json(data: &PostExternalData) -> Result<String> {
    serde_json::to_string(data)
        .map_err(|e| ExternalDataError::malformed(None, format!("failed to encode: {}", e)))
}

/// Encode a record as a JSON object; absent counters are omitted
pub fn to_value(data: &PostExternalData) -> Value {
    let object: Map<String, Value> = data
        .counters()
        .into_iter()
        .filter_map(|(name, count)| count.map(|c| (name.to_string(), Value::from(c))))
        .collect();
    Value::Object(object)
}

fn counter(object: &Map<String, Value>, field: &str) -> Result<Option<i64>> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(count) => Ok(Some(count)),
            None if n.is_u64() => Err(ExternalDataError::malformed(
                Some(field),
                format!("integer {} is out of range", n),
            )),
            None => Err(ExternalDataError::malformed(
                Some(field),
                format!("expected integer, found {}", n),
            )),
        },
        Some(other) => Err(ExternalDataError::malformed(
            Some(field),
            format!("expected integer, found {}", type_name(other)),
        )),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
