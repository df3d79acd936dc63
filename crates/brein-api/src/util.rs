//! Helpers for working with request and response documents.

use serde_json::{Map, Value};
use tracing::debug;

/// Whether a value carries data worth sending.
///
/// `null`, empty strings, empty arrays and empty objects carry nothing.
pub fn contains_value(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
        Value::Bool(_) | Value::Number(_) => true,
    }
}

/// Walk nested objects along `keys` and return the value at the end.
///
/// Returns `None` if a key is missing or a non-object is reached before the
/// last key.
pub fn get_nested_value<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    let (last, path) = keys.split_last()?;

    let mut current = map;
    for key in path {
        current = current.get(*key)?.as_object()?;
    }

    current.get(*last).filter(|v| !v.is_null())
}

/// Whether a non-null value exists along `keys`.
pub fn has_nested_value(map: &Map<String, Value>, keys: &[&str]) -> bool {
    get_nested_value(map, keys).is_some()
}

/// Nested string lookup.
pub fn get_nested_str<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    get_nested_value(map, keys).and_then(Value::as_str)
}

/// Current time in seconds since the unix epoch.
pub fn unix_timestamp_now() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Local IPv4 address of this machine, if one can be determined.
pub fn detect_ip_address() -> Option<String> {
    match local_ip_address::local_ip() {
        Ok(ip) => Some(ip.to_string()),
        Err(e) => {
            debug!("Could not detect local IP address: {}", e);
            None
        }
    }
}
