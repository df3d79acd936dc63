//! Weather part of a temporal data result.

use serde::Deserialize;

/// Kind of precipitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum PrecipitationType {
    None,
    Rain,
    Snow,
    #[default]
    Unknown,
}

impl From<String> for PrecipitationType {
    fn from(value: String) -> Self {
        match value.to_lowercase().as_str() {
            "none" => Self::None,
            "rain" => Self::Rain,
            "snow" => Self::Snow,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Precipitation {
    #[serde(default)]
    precipitation_type: Option<PrecipitationType>,
    #[serde(default)]
    precipitation_amount: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
struct Coordinates {
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
}

/// Current weather at a location.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreinWeatherResult {
    #[serde(default)]
    description: Option<String>,

    /// Degrees Celsius.
    #[serde(default)]
    temperature: Option<f64>,

    #[serde(default)]
    precipitation: Option<Precipitation>,

    #[serde(default)]
    wind_strength: Option<f64>,

    /// Seconds since the unix epoch.
    #[serde(default)]
    last_measured: Option<i64>,

    #[serde(default)]
    cloud_cover: Option<f64>,

    #[serde(default)]
    measured_at: Option<Coordinates>,
}

impl BreinWeatherResult {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Temperature in degrees Celsius.
    pub fn temperature_celsius(&self) -> Option<f64> {
        self.temperature
    }

    pub fn temperature_fahrenheit(&self) -> Option<f64> {
        self.temperature.map(|c| c * 9.0 / 5.0 + 32.0)
    }

    pub fn temperature_kelvin(&self) -> Option<f64> {
        self.temperature.map(|c| c + 273.15)
    }

    pub fn precipitation_type(&self) -> PrecipitationType {
        self.precipitation
            .as_ref()
            .and_then(|p| p.precipitation_type)
            .unwrap_or_default()
    }

    pub fn precipitation_amount(&self) -> Option<f64> {
        self.precipitation
            .as_ref()
            .and_then(|p| p.precipitation_amount)
    }

    pub fn wind_strength(&self) -> Option<f64> {
        self.wind_strength
    }

    /// When the values were measured, in seconds since the unix epoch.
    pub fn last_measured(&self) -> Option<i64> {
        self.last_measured
    }

    pub fn cloud_cover(&self) -> Option<f64> {
        self.cloud_cover
    }

    /// Latitude of the station the weather was measured at.
    pub fn lat(&self) -> Option<f64> {
        self.measured_at.and_then(|c| c.lat)
    }

    /// Longitude of the station the weather was measured at.
    pub fn lon(&self) -> Option<f64> {
        self.measured_at.and_then(|c| c.lon)
    }
}
