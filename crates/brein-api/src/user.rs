//! The user a request is sent for.

use chrono::NaiveDate;
use serde_json::{Map, Value};
use tracing::warn;

use crate::config::BreinConfig;
use crate::util::contains_value;

/// Key of the user object within a request.
pub const USER_FIELD: &str = "user";
/// Key of the additional object within the user object.
pub const ADDITIONAL_FIELD: &str = "additional";

pub const EMAIL_FIELD: &str = "email";
pub const FIRST_NAME_FIELD: &str = "firstName";
pub const LAST_NAME_FIELD: &str = "lastName";
pub const DATE_OF_BIRTH_FIELD: &str = "dateOfBirth";
pub const DEVICE_ID_FIELD: &str = "deviceId";
pub const IMEI_FIELD: &str = "imei";
pub const SESSION_ID_FIELD: &str = "sessionId";
pub const USER_ID_FIELD: &str = "userId";
pub const PHONE_FIELD: &str = "phone";

pub const USER_AGENT_FIELD: &str = "userAgent";
pub const REFERRER_FIELD: &str = "referrer";
pub const URL_FIELD: &str = "url";
pub const IP_ADDRESS_FIELD: &str = "ipAddress";
pub const LOCAL_DATE_TIME_FIELD: &str = "localDateTime";
pub const TIMEZONE_FIELD: &str = "timezone";

/// User information attached to a request.
///
/// Serialized as:
///
/// ```json
/// { "user": { "email": "...", "additional": { "userAgent": "..." } } }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BreinUser {
    fields: Map<String, Value>,
    additional: Map<String, Value>,
}

impl BreinUser {
    /// Create an empty user.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a user identified by email.
    pub fn for_email(email: impl Into<String>) -> Self {
        Self::new().with_email(email)
    }

    /// Set a user field (e.g., `email`, `sessionId`, `userId`).
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Set a field of the `additional` part (e.g., `userAgent`, `timezone`).
    pub fn set_additional(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.additional.insert(key.into(), value.into());
        self
    }

    /// Get a user field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Get a field of the `additional` part.
    pub fn get_additional(&self, key: &str) -> Option<&Value> {
        self.additional.get(key)
    }

    pub fn email(&self) -> Option<&str> {
        self.get(EMAIL_FIELD).and_then(Value::as_str)
    }

    pub fn session_id(&self) -> Option<&str> {
        self.get(SESSION_ID_FIELD).and_then(Value::as_str)
    }

    pub fn date_of_birth(&self) -> Option<&str> {
        self.get(DATE_OF_BIRTH_FIELD).and_then(Value::as_str)
    }

    pub fn with_email(self, email: impl Into<String>) -> Self {
        self.with_field(EMAIL_FIELD, email.into())
    }

    pub fn with_first_name(self, first_name: impl Into<String>) -> Self {
        self.with_field(FIRST_NAME_FIELD, first_name.into())
    }

    pub fn with_last_name(self, last_name: impl Into<String>) -> Self {
        self.with_field(LAST_NAME_FIELD, last_name.into())
    }

    /// Set the date of birth as `M/D/YYYY`.
    ///
    /// An impossible date (e.g., February 30th) clears the field instead.
    pub fn with_date_of_birth(mut self, month: u32, day: u32, year: i32) -> Self {
        if NaiveDate::from_ymd_opt(year, month, day).is_some() {
            self.fields.insert(
                DATE_OF_BIRTH_FIELD.to_string(),
                Value::String(format!("{}/{}/{}", month, day, year)),
            );
        } else {
            warn!("Ignoring invalid date of birth {}/{}/{}", month, day, year);
            self.fields.remove(DATE_OF_BIRTH_FIELD);
        }
        self
    }

    pub fn with_device_id(self, device_id: impl Into<String>) -> Self {
        self.with_field(DEVICE_ID_FIELD, device_id.into())
    }

    pub fn with_imei(self, imei: impl Into<String>) -> Self {
        self.with_field(IMEI_FIELD, imei.into())
    }

    pub fn with_session_id(self, session_id: impl Into<String>) -> Self {
        self.with_field(SESSION_ID_FIELD, session_id.into())
    }

    pub fn with_user_id(self, user_id: impl Into<String>) -> Self {
        self.with_field(USER_ID_FIELD, user_id.into())
    }

    pub fn with_phone(self, phone: impl Into<String>) -> Self {
        self.with_field(PHONE_FIELD, phone.into())
    }

    pub fn with_user_agent(self, user_agent: impl Into<String>) -> Self {
        self.with_additional(USER_AGENT_FIELD, user_agent.into())
    }

    pub fn with_referrer(self, referrer: impl Into<String>) -> Self {
        self.with_additional(REFERRER_FIELD, referrer.into())
    }

    pub fn with_url(self, url: impl Into<String>) -> Self {
        self.with_additional(URL_FIELD, url.into())
    }

    pub fn with_ip_address(self, ip_address: impl Into<String>) -> Self {
        self.with_additional(IP_ADDRESS_FIELD, ip_address.into())
    }

    pub fn with_local_date_time(self, local_date_time: impl Into<String>) -> Self {
        self.with_additional(LOCAL_DATE_TIME_FIELD, local_date_time.into())
    }

    pub fn with_timezone(self, timezone: impl Into<String>) -> Self {
        self.with_additional(TIMEZONE_FIELD, timezone.into())
    }

    /// Builder form of [`BreinUser::set`].
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Builder form of [`BreinUser::set_additional`].
    pub fn with_additional(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_additional(key, value);
        self
    }

    /// Whether any field or additional field carries a value.
    pub fn has_values(&self) -> bool {
        self.fields.values().any(contains_value) || self.additional.values().any(contains_value)
    }

    /// Write the `user` part of a request.
    pub fn prepare_request_data(&self, _config: &BreinConfig, request: &mut Map<String, Value>) {
        let mut user: Map<String, Value> = self
            .fields
            .iter()
            .filter(|(_, v)| contains_value(v))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        let additional: Map<String, Value> = self
            .additional
            .iter()
            .filter(|(_, v)| contains_value(v))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        if !additional.is_empty() {
            user.insert(ADDITIONAL_FIELD.to_string(), Value::Object(additional));
        }

        if !user.is_empty() {
            request.insert(USER_FIELD.to_string(), Value::Object(user));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn prepare(user: &BreinUser) -> Map<String, Value> {
        let mut request = Map::new();
        user.prepare_request_data(&BreinConfig::new("key"), &mut request);
        request
    }

    #[test]
    fn test_for_email() {
        let user = BreinUser::for_email("User.Name@email.com");
        assert_eq!(user.email(), Some("User.Name@email.com"));
    }

    #[test]
    fn test_full_user_serialization() {
        let user = BreinUser::for_email("User.Name@email.com")
            .with_first_name("User")
            .with_last_name("Name")
            .with_date_of_birth(11, 20, 1999)
            .with_device_id("DD-EEEEE")
            .with_imei("55544455333")
            .with_session_id("r3V2kDAvFFL_-RBhuc_-Dg")
            .with_url("https://sample.com.au/home")
            .with_referrer("https://sample.com.au/track")
            .with_ip_address("10.11.12.130")
            .with_user_agent("Mozilla/5.0");

        let request = prepare(&user);
        assert_eq!(
            Value::Object(request),
            json!({
                "user": {
                    "email": "User.Name@email.com",
                    "firstName": "User",
                    "lastName": "Name",
                    "dateOfBirth": "11/20/1999",
                    "deviceId": "DD-EEEEE",
                    "imei": "55544455333",
                    "sessionId": "r3V2kDAvFFL_-RBhuc_-Dg",
                    "additional": {
                        "url": "https://sample.com.au/home",
                        "referrer": "https://sample.com.au/track",
                        "ipAddress": "10.11.12.130",
                        "userAgent": "Mozilla/5.0"
                    }
                }
            })
        );
    }

    #[test]
    fn test_invalid_date_of_birth_clears_field() {
        let user = BreinUser::new()
            .with_date_of_birth(12, 31, 2008)
            .with_date_of_birth(2, 30, 2008);
        assert!(user.date_of_birth().is_none());

        let user = BreinUser::new().with_date_of_birth(12, 31, 2008);
        assert_eq!(user.date_of_birth(), Some("12/31/2008"));
    }

    #[test]
    fn test_empty_values_are_skipped() {
        let user = BreinUser::new()
            .with_email("")
            .with_session_id("SESS-ID-IS-THIS")
            .with_additional("referrer", Value::Null);

        let request = prepare(&user);
        assert_eq!(
            Value::Object(request),
            json!({ "user": { "sessionId": "SESS-ID-IS-THIS" } })
        );
    }

    #[test]
    fn test_empty_user_writes_nothing() {
        let user = BreinUser::new().with_email("");
        assert!(!user.has_values());
        assert!(prepare(&user).is_empty());
    }

    #[test]
    fn test_set_in_place() {
        let mut user = BreinUser::new();
        user.set("email", "a@b.com").set_additional("timezone", "UTC");
        assert_eq!(user.email(), Some("a@b.com"));
        assert_eq!(user.get_additional("timezone"), Some(&json!("UTC")));
        assert!(user.has_values());
    }
}
