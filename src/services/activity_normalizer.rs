use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::CoachError;
use crate::models::Activity;

const ENVELOPE_KEY: &str = "data";

/// Unwrap a `{"data": {...}}` envelope. Bare records pass through untouched.
pub fn normalize_record(record: Value) -> Value {
    match record {
        Value::Object(mut map) => match map.remove(ENVELOPE_KEY) {
            Some(inner) => inner,
            None => Value::Object(map),
        },
        other => other,
    }
}

/// Split a JSON array document into its records
pub fn activity_records(input: Value) -> Result<Vec<Value>, CoachError> {
    match input {
        Value::Array(records) => Ok(records),
        other => Err(CoachError::InvalidInput(format!(
            "expected a JSON array of activities, got {}",
            json_kind(&other)
        ))),
    }
}

/// Normalize every record and read it as an Activity
pub fn parse_activities(records: Vec<Value>) -> Result<Vec<Activity>, CoachError> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            serde_json::from_value(normalize_record(record)).map_err(|e| {
                CoachError::InvalidInput(format!("activity {} is malformed: {}", index, e))
            })
        })
        .collect()
}

/// Read a single possibly-enveloped document as `T`
pub fn parse_enveloped<T: DeserializeOwned>(record: Value) -> Result<T, CoachError> {
    let inner = normalize_record(record);
    if !inner.is_object() {
        return Err(CoachError::InvalidInput(format!(
            "expected a JSON object, got {}",
            json_kind(&inner)
        )));
    }
    serde_json::from_value(inner).map_err(|e| CoachError::InvalidInput(e.to_string()))
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
