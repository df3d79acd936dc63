//! Holiday part of a temporal data result.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Who declared the holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum HolidaySource {
    Government,
    UnitedNations,
    PublicInformation,
    #[default]
    Unknown,
}

impl HolidaySource {
    /// Parse names like `"United Nations"` or `"PUBLIC_INFORMATION"`.
    pub fn parse(value: &str) -> Self {
        match normalize(value).as_str() {
            "GOVERNMENT" => Self::Government,
            "UNITED_NATIONS" => Self::UnitedNations,
            "PUBLIC_INFORMATION" => Self::PublicInformation,
            _ => Self::Unknown,
        }
    }
}

impl From<String> for HolidaySource {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

/// Kind of holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayType {
    NationalFederal,
    StateFederal,
    Legal,
    Civic,
    SpecialDay,
    Educational,
    Hallmark,
    Cultural,
    Religious,
}

impl HolidayType {
    pub fn parse(value: &str) -> Option<Self> {
        match normalize(value).as_str() {
            "NATIONAL_FEDERAL" => Some(Self::NationalFederal),
            "STATE_FEDERAL" => Some(Self::StateFederal),
            "LEGAL" => Some(Self::Legal),
            "CIVIC" => Some(Self::Civic),
            "SPECIAL_DAY" => Some(Self::SpecialDay),
            "EDUCATIONAL" => Some(Self::Educational),
            "HALLMARK" => Some(Self::Hallmark),
            "CULTURAL" => Some(Self::Cultural),
            "RELIGIOUS" => Some(Self::Religious),
            _ => None,
        }
    }
}

fn normalize(value: &str) -> String {
    value.trim().replace(' ', "_").to_uppercase()
}

/// Keep the known types of a `types` list, drop everything else.
fn known_types<'de, D>(deserializer: D) -> Result<Vec<HolidayType>, D::Error>
where
    D: Deserializer<'de>,
{
    let types = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(types
        .iter()
        .filter_map(Value::as_str)
        .filter_map(HolidayType::parse)
        .collect())
}

/// A holiday at the requested location and time.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BreinHolidayResult {
    #[serde(default, rename = "holiday")]
    name: Option<String>,

    #[serde(default)]
    source: Option<HolidaySource>,

    #[serde(default, deserialize_with = "known_types")]
    types: Vec<HolidayType>,
}

impl BreinHolidayResult {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn source(&self) -> HolidaySource {
        self.source.unwrap_or_default()
    }

    pub fn types(&self) -> &[HolidayType] {
        &self.types
    }
}
