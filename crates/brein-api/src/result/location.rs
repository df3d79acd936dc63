//! Location part of a temporal data result.

use serde::Deserialize;
use serde_json::{Map, Value};

/// A resolved location.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreinLocationResult {
    #[serde(default)]
    lat: Option<f64>,

    #[serde(default)]
    lon: Option<f64>,

    #[serde(default)]
    country: Option<String>,

    #[serde(default)]
    state: Option<String>,

    #[serde(default)]
    city: Option<String>,

    #[serde(default)]
    granularity: Option<String>,

    /// GeoJSON keyed by shape type.
    #[serde(default)]
    geo_json: Option<Map<String, Value>>,
}

impl BreinLocationResult {
    pub fn lat(&self) -> Option<f64> {
        self.lat
    }

    pub fn lon(&self) -> Option<f64> {
        self.lon
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// How precise the location is (e.g., `city`, `neighborhood`).
    pub fn granularity(&self) -> Option<&str> {
        self.granularity.as_deref()
    }

    /// GeoJSON of the requested shape type (e.g., `CITY`).
    pub fn geo_json(&self, shape_type: &str) -> Option<&Value> {
        self.geo_json.as_ref()?.get(shape_type)
    }

    pub fn geo_json_types(&self) -> impl Iterator<Item = &str> {
        self.geo_json
            .iter()
            .flat_map(|shapes| shapes.keys().map(String::as_str))
    }
}
