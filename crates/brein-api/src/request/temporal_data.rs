//! Temporal data requests: time, weather, holidays and events for a
//! location, geocoding and reverse geocoding.

use serde_json::{Map, Value};

use super::{request_timestamp, sign, BreinRequest, RequestBase};
use crate::config::BreinConfig;
use crate::error::BreinError;
use crate::user::{
    ADDITIONAL_FIELD, IP_ADDRESS_FIELD, LOCAL_DATE_TIME_FIELD, TIMEZONE_FIELD, USER_FIELD,
};
use crate::util::{contains_value, get_nested_str};

pub const LOCATION_FIELD: &str = "location";
pub const LOCATION_TEXT_FIELD: &str = "text";
pub const LATITUDE_FIELD: &str = "latitude";
pub const LONGITUDE_FIELD: &str = "longitude";
pub const SHAPE_TYPES_FIELD: &str = "shapeTypes";

/// Resolves temporal information for a user, a free-text location or a
/// coordinate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BreinTemporalData {
    base: RequestBase,
    location: Map<String, Value>,
    shape_types: Vec<String>,
}

impl BreinTemporalData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Free-text location to geocode (e.g., "san francisco").
    pub fn with_location(mut self, text: impl Into<String>) -> Self {
        self.location
            .insert(LOCATION_TEXT_FIELD.to_string(), Value::String(text.into()));
        self
    }

    pub fn with_latitude(mut self, latitude: f64) -> Self {
        self.location
            .insert(LATITUDE_FIELD.to_string(), Value::from(latitude));
        self
    }

    pub fn with_longitude(mut self, longitude: f64) -> Self {
        self.location
            .insert(LONGITUDE_FIELD.to_string(), Value::from(longitude));
        self
    }

    /// Ask for the GeoJSON shapes (e.g., `CITY`, `NEIGHBORHOOD`) of the location.
    pub fn add_shape_types<I, S>(mut self, shape_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.shape_types
            .extend(shape_types.into_iter().map(Into::into));
        self
    }

    pub fn with_local_date_time(self, local_date_time: impl Into<String>) -> Self {
        self.with_additional(LOCAL_DATE_TIME_FIELD, local_date_time.into())
    }

    pub fn with_timezone(self, timezone: impl Into<String>) -> Self {
        self.with_additional(TIMEZONE_FIELD, timezone.into())
    }

    /// Resolve the temporal data of the given IP address.
    pub fn with_look_up_ip_address(self, ip_address: impl Into<String>) -> Self {
        self.with_additional(IP_ADDRESS_FIELD, ip_address.into())
    }

    pub fn location(&self) -> &Map<String, Value> {
        &self.location
    }

    pub fn shape_types(&self) -> &[String] {
        &self.shape_types
    }
}

impl BreinRequest for BreinTemporalData {
    fn base(&self) -> &RequestBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut RequestBase {
        &mut self.base
    }

    fn endpoint<'a>(&self, config: &'a BreinConfig) -> &'a str {
        &config.temporal_data_endpoint
    }

    fn prepare_request_data(&self, _config: &BreinConfig, request: &mut Map<String, Value>) {
        // non-finite coordinates end up as null
        let mut location: Map<String, Value> = self
            .location
            .iter()
            .filter(|(_, value)| contains_value(value))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        if !self.shape_types.is_empty() {
            let shape_types = self
                .shape_types
                .iter()
                .map(|s| Value::String(s.clone()))
                .collect();
            location.insert(SHAPE_TYPES_FIELD.to_string(), Value::Array(shape_types));
        }

        if !location.is_empty() {
            request.insert(LOCATION_FIELD.to_string(), Value::Object(location));
        }
    }

    fn create_signature(
        &self,
        config: &BreinConfig,
        request: &Map<String, Value>,
    ) -> Result<String, BreinError> {
        let local_date_time =
            get_nested_str(request, &[USER_FIELD, ADDITIONAL_FIELD, LOCAL_DATE_TIME_FIELD])
                .unwrap_or_default();
        let timezone = get_nested_str(request, &[USER_FIELD, ADDITIONAL_FIELD, TIMEZONE_FIELD])
            .unwrap_or_default();

        let message = format!(
            "{}-{}-{}",
            request_timestamp(request),
            local_date_time,
            timezone
        );
        sign(config, &message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::BreinUser;
    use serde_json::json;

    const SECRET: &str = "lmcoj4k27hbbszzyiqamhg==";

    #[test]
    fn test_free_text_location() {
        let data = BreinTemporalData::new()
            .with_location("san francisco")
            .with_unix_timestamp(1451090400)
            .request_data(&BreinConfig::new("API-KEY"))
            .unwrap();

        assert_eq!(
            Value::Object(data),
            json!({
                "apiKey": "API-KEY",
                "unixTimestamp": 1451090400,
                "location": { "text": "san francisco" }
            })
        );
    }

    #[test]
    fn test_reverse_geocoding() {
        let data = BreinTemporalData::new()
            .with_latitude(37.7609295)
            .with_longitude(-122.4194155)
            .add_shape_types(["CITY", "NEIGHBORHOOD"])
            .request_data(&BreinConfig::new("API-KEY"))
            .unwrap();

        assert_eq!(
            data.get("location"),
            Some(&json!({
                "latitude": 37.7609295,
                "longitude": -122.4194155,
                "shapeTypes": ["CITY", "NEIGHBORHOOD"]
            }))
        );
    }

    #[test]
    fn test_non_finite_coordinates_are_dropped() {
        let config = BreinConfig::new("API-KEY");

        let data = BreinTemporalData::new()
            .with_latitude(f64::NAN)
            .with_longitude(f64::INFINITY)
            .request_data(&config)
            .unwrap();
        assert!(!data.contains_key("location"));

        let data = BreinTemporalData::new()
            .with_latitude(f64::NAN)
            .with_longitude(-122.4194155)
            .request_data(&config)
            .unwrap();
        assert_eq!(data.get("location"), Some(&json!({ "longitude": -122.4194155 })));
    }

    #[test]
    fn test_user_time_fields_land_in_additional() {
        let data = BreinTemporalData::new()
            .with_user(BreinUser::for_email("fred.firestone@email.com").with_first_name("Fred"))
            .with_timezone("America/Los_Angeles")
            .with_local_date_time("Sun Jul 2 2017 18:15:48 GMT-0800 (PST)")
            .with_look_up_ip_address("74.115.209.58")
            .request_data(&BreinConfig::new("API-KEY"))
            .unwrap();

        assert_eq!(
            data.get("user"),
            Some(&json!({
                "email": "fred.firestone@email.com",
                "firstName": "Fred",
                "additional": {
                    "timezone": "America/Los_Angeles",
                    "localDateTime": "Sun Jul 2 2017 18:15:48 GMT-0800 (PST)",
                    "ipAddress": "74.115.209.58"
                }
            }))
        );
        assert!(!data.contains_key("location"));
    }

    #[test]
    fn test_signature_with_time_fields() {
        let config = BreinConfig::with_secret("API-KEY", SECRET);
        let data = BreinTemporalData::new()
            .with_timezone("America/Los_Angeles")
            .with_local_date_time("Sun Jul 2 2017 18:15:48 GMT-0800 (PST)")
            .with_unix_timestamp(1451090400)
            .request_data(&config)
            .unwrap();

        assert_eq!(
            data.get("signature"),
            Some(&json!("J226jAOONNMgMG8Ljq5j9QBFyxALMmjnuO8hgBs8xhg="))
        );
    }

    #[test]
    fn test_signature_without_time_fields() {
        let config = BreinConfig::with_secret("API-KEY", SECRET);
        let data = BreinTemporalData::new()
            .with_location("The Big Apple")
            .with_unix_timestamp(1451090400)
            .request_data(&config)
            .unwrap();

        assert_eq!(
            data.get("signature"),
            Some(&json!("yo60cTd3qyBMwpmwUtvu7JmQVVeKssLTF2CR5zNsjCE="))
        );
    }
}
