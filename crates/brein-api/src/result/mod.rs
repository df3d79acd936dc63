//! Responses of the Breinify API.

mod event;
mod holiday;
mod location;
mod temporal_data;
mod weather;

pub use event::{BreinEventResult, EventCategory};
pub use holiday::{BreinHolidayResult, HolidaySource, HolidayType};
pub use location::BreinLocationResult;
pub use temporal_data::BreinTemporalDataResult;
pub use weather::{BreinWeatherResult, PrecipitationType};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::util::{get_nested_value, has_nested_value};

/// The JSON object an endpoint answered with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BreinResult {
    map: Map<String, Value>,
}

impl BreinResult {
    pub fn new(map: Map<String, Value>) -> Self {
        Self { map }
    }

    pub fn map(&self) -> &Map<String, Value> {
        &self.map
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.map
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key)
    }

    pub fn has(&self, key: &str) -> bool {
        self.map.get(key).is_some_and(|v| !v.is_null())
    }

    pub fn get_nested(&self, keys: &[&str]) -> Option<&Value> {
        get_nested_value(&self.map, keys)
    }

    pub fn has_nested(&self, keys: &[&str]) -> bool {
        has_nested_value(&self.map, keys)
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl From<Map<String, Value>> for BreinResult {
    fn from(map: Map<String, Value>) -> Self {
        Self::new(map)
    }
}

impl std::fmt::Display for BreinResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string(&self.map) {
            Ok(json) => f.write_str(&json),
            Err(_) => Err(std::fmt::Error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize() {
        let result: BreinResult =
            serde_json::from_str(r#"{"time":{"timezone":"UTC"},"empty":null}"#).unwrap();

        assert!(result.has("time"));
        assert!(!result.has("empty"));
        assert!(!result.has("missing"));
        assert_eq!(result.get_nested(&["time", "timezone"]), Some(&json!("UTC")));
        assert!(result.has_nested(&["time", "timezone"]));
        assert_eq!(result.to_string(), r#"{"empty":null,"time":{"timezone":"UTC"}}"#);
    }

    #[test]
    fn test_empty() {
        assert!(BreinResult::default().is_empty());
    }
}
