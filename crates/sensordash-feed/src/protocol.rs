//! Push-channel payload decoding.
//!
//! A frame is either a bare reading object or an envelope carrying the reading
//! under `message.data`. Exactly one level of envelope is unwrapped.

use serde::Deserialize;
use serde_json::Value;

use sensordash_core::prelude::*;
use sensordash_core::SensorUpdate;

/// Decode one text frame.
///
/// Returns `Ok(None)` when the frame is valid JSON but carries no reading
/// (a top-level `null`, or an envelope without `data`). Any other non-object
/// payload is a decode error.
pub fn decode_update(raw: &str) -> Result<Option<SensorUpdate>> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| Error::decode(format!("invalid JSON: {e}")))?;

    match unwrap_envelope(value) {
        Some(reading) => reading_from_value(reading).map(Some),
        None => Ok(None),
    }
}

/// Strip one envelope level, if present.
///
/// `{"message": {"data": {...}}}` yields the inner `data`; an object without a
/// non-null `message` is returned unchanged.
fn unwrap_envelope(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::Object(mut map) => match map.remove("message") {
            None | Some(Value::Null) => Some(Value::Object(map)),
            Some(Value::Object(mut message)) => match message.remove("data") {
                None | Some(Value::Null) => None,
                Some(data) => Some(data),
            },
            Some(other) => {
                trace!("envelope 'message' is not an object: {other}");
                None
            }
        },
        other => Some(other),
    }
}

fn reading_from_value(value: Value) -> Result<SensorUpdate> {
    if !value.is_object() {
        return Err(Error::decode(format!(
            "expected a reading object, got {}",
            json_kind(&value)
        )));
    }
    SensorUpdate::deserialize(value).map_err(|e| Error::decode(e.to_string()))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
