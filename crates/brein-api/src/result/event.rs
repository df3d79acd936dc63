//! Event part of a temporal data result.

use serde::Deserialize;

use super::location::BreinLocationResult;

/// Kind of event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum EventCategory {
    Sports,
    Concert,
    Amusement,
    Conference,
    #[default]
    Unknown,
}

impl EventCategory {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "sports" => Self::Sports,
            "concert" => Self::Concert,
            "amusement" => Self::Amusement,
            "conference" => Self::Conference,
            _ => Self::Unknown,
        }
    }
}

impl From<String> for EventCategory {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

/// An event happening near the requested location.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreinEventResult {
    #[serde(default, rename = "displayName")]
    name: Option<String>,

    #[serde(default, rename = "startTime")]
    start: Option<i64>,

    #[serde(default, rename = "endTime")]
    end: Option<i64>,

    #[serde(default)]
    category: Option<EventCategory>,

    #[serde(default)]
    size: Option<i64>,

    #[serde(default)]
    location: Option<BreinLocationResult>,
}

impl BreinEventResult {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Start of the event in seconds since the unix epoch.
    pub fn start(&self) -> Option<i64> {
        self.start
    }

    /// End of the event in seconds since the unix epoch.
    pub fn end(&self) -> Option<i64> {
        self.end
    }

    pub fn category(&self) -> EventCategory {
        self.category.unwrap_or_default()
    }

    /// Expected number of attendees.
    pub fn size(&self) -> Option<i64> {
        self.size
    }

    pub fn location(&self) -> Option<&BreinLocationResult> {
        self.location.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse() {
        let event: BreinEventResult = serde_json::from_value(json!({
            "displayName": "Giants vs. Dodgers",
            "startTime": 1499036400,
            "endTime": 1499047200,
            "category": "Sports",
            "size": 41915,
            "location": { "city": "San Francisco", "lat": 37.778, "lon": -122.389 }
        }))
        .unwrap();

        assert_eq!(event.name(), Some("Giants vs. Dodgers"));
        assert_eq!(event.start(), Some(1499036400));
        assert_eq!(event.end(), Some(1499047200));
        assert_eq!(event.category(), EventCategory::Sports);
        assert_eq!(event.size(), Some(41915));
        let location = event.location().unwrap();
        assert_eq!(location.city(), Some("San Francisco"));
        assert_eq!(location.lat(), Some(37.778));
    }

    #[test]
    fn test_unknown_category() {
        let event: BreinEventResult =
            serde_json::from_value(json!({ "category": "parade" })).unwrap();
        assert_eq!(event.category(), EventCategory::Unknown);
        assert!(event.location().is_none());

        let event: BreinEventResult = serde_json::from_value(json!({ "category": null })).unwrap();
        assert_eq!(event.category(), EventCategory::Unknown);
    }
}
