//! Typed view of a temporal data response.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use super::{
    BreinEventResult, BreinHolidayResult, BreinLocationResult, BreinResult, BreinWeatherResult,
};

const WEATHER_KEY: &str = "weather";
const TIME_KEY: &str = "time";
const LOCATION_KEY: &str = "location";
const HOLIDAYS_KEY: &str = "holidays";
const EVENTS_KEY: &str = "events";
const EPOCH_TIME_KEY: &str = "epochFormatIso8601";
const LOCAL_TIME_KEY: &str = "localFormatIso8601";
const TIMEZONE_KEY: &str = "timezone";

/// Weather, time, location, holidays and events of a temporal data response.
#[derive(Debug, Clone)]
pub struct BreinTemporalDataResult {
    result: BreinResult,
}

impl BreinTemporalDataResult {
    pub fn new(result: &BreinResult) -> Self {
        Self {
            result: result.clone(),
        }
    }

    pub fn has_weather(&self) -> bool {
        self.object(WEATHER_KEY).is_some()
    }

    pub fn weather(&self) -> Option<BreinWeatherResult> {
        self.object(WEATHER_KEY).and_then(decode)
    }

    pub fn has_location(&self) -> bool {
        self.object(LOCATION_KEY).is_some()
    }

    pub fn location(&self) -> Option<BreinLocationResult> {
        self.object(LOCATION_KEY).and_then(decode)
    }

    pub fn has_local_date_time(&self) -> bool {
        self.result.has_nested(&[TIME_KEY, LOCAL_TIME_KEY])
    }

    /// Local time as ISO-8601 string.
    pub fn local_date_time(&self) -> Option<&str> {
        self.time_str(LOCAL_TIME_KEY)
    }

    pub fn has_epoch_date_time(&self) -> bool {
        self.result.has_nested(&[TIME_KEY, EPOCH_TIME_KEY])
    }

    /// UTC time as ISO-8601 string.
    pub fn epoch_date_time(&self) -> Option<&str> {
        self.time_str(EPOCH_TIME_KEY)
    }

    pub fn timezone(&self) -> Option<&str> {
        self.time_str(TIMEZONE_KEY)
    }

    pub fn has_holidays(&self) -> bool {
        self.list(HOLIDAYS_KEY).is_some_and(|l| !l.is_empty())
    }

    pub fn holidays(&self) -> Vec<BreinHolidayResult> {
        self.list(HOLIDAYS_KEY)
            .map(|l| {
                l.iter()
                    .filter(|v| v.is_object())
                    .filter_map(decode)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn has_events(&self) -> bool {
        self.list(EVENTS_KEY).is_some_and(|l| !l.is_empty())
    }

    pub fn events(&self) -> Vec<BreinEventResult> {
        self.list(EVENTS_KEY)
            .map(|l| {
                l.iter()
                    .filter(|v| v.is_object())
                    .filter_map(decode)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The raw response.
    pub fn result(&self) -> &BreinResult {
        &self.result
    }

    fn object(&self, key: &str) -> Option<&Value> {
        self.result.get(key).filter(|v| v.is_object())
    }

    fn list(&self, key: &str) -> Option<&Vec<Value>> {
        self.result.get(key).and_then(Value::as_array)
    }

    fn time_str(&self, key: &str) -> Option<&str> {
        self.result
            .get_nested(&[TIME_KEY, key])
            .and_then(Value::as_str)
    }
}

/// Decode one part of the response; parts that do not match are skipped.
fn decode<T: DeserializeOwned>(value: &Value) -> Option<T> {
    match serde_json::from_value(value.clone()) {
        Ok(part) => Some(part),
        Err(e) => {
            warn!(
                "Skipping malformed {} in temporal data response: {}",
                std::any::type_name::<T>(),
                e
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{EventCategory, HolidaySource, PrecipitationType};
    use serde_json::json;

    fn response() -> BreinResult {
        serde_json::from_value(json!({
            "weather": {
                "description": "clear sky",
                "temperature": 18.5,
                "precipitation": { "precipitationType": "none", "precipitationAmount": 0 }
            },
            "time": {
                "localFormatIso8601": "2017-07-02T18:15:48-07:00",
                "epochFormatIso8601": "2017-07-03T01:15:48Z",
                "timezone": "America/Los_Angeles"
            },
            "location": {
                "city": "San Francisco",
                "state": "CA",
                "country": "US",
                "granularity": "city",
                "lat": 37.7749,
                "lon": -122.4194
            },
            "holidays": [
                {
                    "holiday": "Independence Day",
                    "source": "Government",
                    "types": ["NATIONAL_FEDERAL"]
                },
                "not a holiday",
                { "holiday": 4 }
            ],
            "events": []
        }))
        .unwrap()
    }

    #[test]
    fn test_full_response() {
        let temporal = BreinTemporalDataResult::new(&response());

        assert!(temporal.has_weather());
        let weather = temporal.weather().unwrap();
        assert_eq!(weather.description(), Some("clear sky"));
        assert_eq!(weather.precipitation_type(), PrecipitationType::None);

        assert!(temporal.has_local_date_time());
        assert_eq!(temporal.local_date_time(), Some("2017-07-02T18:15:48-07:00"));
        assert!(temporal.has_epoch_date_time());
        assert_eq!(temporal.epoch_date_time(), Some("2017-07-03T01:15:48Z"));
        assert_eq!(temporal.timezone(), Some("America/Los_Angeles"));

        assert!(temporal.has_location());
        assert_eq!(temporal.location().unwrap().city(), Some("San Francisco"));

        assert!(temporal.has_holidays());
        let holidays = temporal.holidays();
        assert_eq!(holidays.len(), 1);
        assert_eq!(holidays[0].source(), HolidaySource::Government);

        assert!(!temporal.has_events());
        assert!(temporal.events().is_empty());
    }

    #[test]
    fn test_malformed_parts_are_skipped() {
        let result: BreinResult = serde_json::from_value(json!({
            "weather": { "temperature": "warm" },
            "location": "somewhere",
            "events": [{ "displayName": "Fair", "category": "amusement" }, { "size": "big" }]
        }))
        .unwrap();
        let temporal = BreinTemporalDataResult::new(&result);

        assert!(temporal.has_weather());
        assert!(temporal.weather().is_none());
        assert!(!temporal.has_location());
        let events = temporal.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].category(), EventCategory::Amusement);
    }

    #[test]
    fn test_empty_response() {
        let temporal = BreinTemporalDataResult::new(&BreinResult::default());
        assert!(!temporal.has_weather());
        assert!(!temporal.has_location());
        assert!(!temporal.has_local_date_time());
        assert!(!temporal.has_epoch_date_time());
        assert!(!temporal.has_holidays());
        assert!(!temporal.has_events());
        assert!(temporal.weather().is_none());
        assert!(temporal.holidays().is_empty());
    }
}
