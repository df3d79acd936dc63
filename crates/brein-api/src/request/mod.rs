//! Request types and the shared request-building pipeline.
//!
//! Every request is a nested JSON document assembled in the same order:
//! API key, base fields, client IP, timestamp, user, request specific part
//! and finally the signature.

mod activity;
mod lookup;
mod recommendation;
mod temporal_data;

pub use activity::BreinActivity;
pub use lookup::{BreinDimension, BreinLookup};
pub use recommendation::BreinRecommendation;
pub use temporal_data::BreinTemporalData;

use serde_json::{Map, Value};
use tracing::debug;

use crate::config::BreinConfig;
use crate::error::BreinError;
use crate::signature::{generate_signature, SIGNATURE_TYPE};
use crate::user::{BreinUser, USER_FIELD};
use crate::util::{contains_value, detect_ip_address, unix_timestamp_now};

pub const API_KEY_FIELD: &str = "apiKey";
pub const UNIX_TIMESTAMP_FIELD: &str = "unixTimestamp";
pub const SIGNATURE_FIELD: &str = "signature";
pub const SIGNATURE_TYPE_FIELD: &str = "signatureType";
pub const IP_ADDRESS_FIELD: &str = "ipAddress";

/// Data shared by all request types: the user and top-level fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestBase {
    user: Option<BreinUser>,
    fields: Map<String, Value>,
}

impl RequestBase {
    pub fn user(&self) -> Option<&BreinUser> {
        self.user.as_ref()
    }

    /// The user of the request, created empty on first access.
    pub fn user_mut(&mut self) -> &mut BreinUser {
        self.user.get_or_insert_with(BreinUser::new)
    }

    pub fn set_user(&mut self, user: BreinUser) {
        self.user = Some(user);
    }

    /// Set a top-level field of the request.
    ///
    /// The `user` field is owned by the request and is rejected here; use
    /// [`RequestBase::set_user`] instead.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<&mut Self, BreinError> {
        let key = key.into();
        if key.eq_ignore_ascii_case(USER_FIELD) {
            return Err(BreinError::ReservedField(key));
        }
        self.fields.insert(key, value.into());
        Ok(self)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The explicitly set timestamp, `None` when "now" is used.
    pub fn unix_timestamp(&self) -> Option<i64> {
        self.fields
            .get(UNIX_TIMESTAMP_FIELD)
            .and_then(Value::as_i64)
            .filter(|ts| *ts >= 0)
    }

    pub fn set_unix_timestamp(&mut self, unix_timestamp: i64) {
        self.fields
            .insert(UNIX_TIMESTAMP_FIELD.to_string(), Value::from(unix_timestamp));
    }

    pub fn set_client_ip_address(&mut self, ip_address: impl Into<String>) {
        self.fields
            .insert(IP_ADDRESS_FIELD.to_string(), Value::String(ip_address.into()));
    }

    fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }
}

/// A request that can be sent to one of the Breinify endpoints.
///
/// Implementations only provide the request specific part of the document,
/// the endpoint, and how the signature message is built; the assembly of the
/// full document is shared.
pub trait BreinRequest: Send + Sync {
    /// Shared request data.
    fn base(&self) -> &RequestBase;

    /// Mutable shared request data.
    fn base_mut(&mut self) -> &mut RequestBase;

    /// Endpoint path the request is posted to.
    fn endpoint<'a>(&self, config: &'a BreinConfig) -> &'a str;

    /// Add the request specific data to `request`.
    fn prepare_request_data(&self, config: &BreinConfig, request: &mut Map<String, Value>);

    /// Create the signature over the fully prepared `request`.
    fn create_signature(
        &self,
        config: &BreinConfig,
        request: &Map<String, Value>,
    ) -> Result<String, BreinError>;

    /// Check that the request can be sent with `config`.
    fn validate(&self, config: &BreinConfig) -> Result<(), BreinError> {
        config.validate()
    }

    /// Assemble the complete request document.
    fn request_data(&self, config: &BreinConfig) -> Result<Map<String, Value>, BreinError> {
        let mut request = Map::new();
        request.insert(API_KEY_FIELD.to_string(), Value::String(config.api_key.clone()));

        for (key, value) in self.base().fields() {
            if contains_value(value) {
                request.insert(key.clone(), value.clone());
            }
        }

        if config.detect_ip_address && !request.contains_key(IP_ADDRESS_FIELD) {
            if let Some(ip) = detect_ip_address() {
                request.insert(IP_ADDRESS_FIELD.to_string(), Value::String(ip));
            }
        }

        let timestamp = self.base().unix_timestamp().unwrap_or_else(unix_timestamp_now);
        request.insert(UNIX_TIMESTAMP_FIELD.to_string(), Value::from(timestamp));

        if let Some(user) = self.base().user() {
            user.prepare_request_data(config, &mut request);
        }

        self.prepare_request_data(config, &mut request);

        if config.is_sign() {
            let signature = self.create_signature(config, &request)?;
            request.insert(SIGNATURE_FIELD.to_string(), Value::String(signature));
            request.insert(
                SIGNATURE_TYPE_FIELD.to_string(),
                Value::String(SIGNATURE_TYPE.to_string()),
            );
        }

        Ok(request)
    }

    /// The request document as JSON text.
    fn request_body(&self, config: &BreinConfig) -> Result<String, BreinError> {
        let body = serde_json::to_string(&self.request_data(config)?)?;
        debug!("Request body: {}", body);
        Ok(body)
    }

    /// Fully qualified URL of the endpoint.
    fn full_url(&self, config: &BreinConfig) -> String {
        config.url_for(self.endpoint(config))
    }

    fn with_user(mut self, user: BreinUser) -> Self
    where
        Self: Sized,
    {
        self.base_mut().set_user(user);
        self
    }

    /// Set a single user field, creating the user if needed.
    fn with_user_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self
    where
        Self: Sized,
    {
        self.base_mut().user_mut().set(key, value);
        self
    }

    /// Set a field of the user's `additional` part, creating the user if needed.
    fn with_additional(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self
    where
        Self: Sized,
    {
        self.base_mut().user_mut().set_additional(key, value);
        self
    }

    fn with_unix_timestamp(mut self, unix_timestamp: i64) -> Self
    where
        Self: Sized,
    {
        self.base_mut().set_unix_timestamp(unix_timestamp);
        self
    }

    fn with_client_ip_address(mut self, ip_address: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.base_mut().set_client_ip_address(ip_address);
        self
    }

    /// Set a top-level field; fails for reserved fields such as `user`.
    fn with_field(
        mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Self, BreinError>
    where
        Self: Sized,
    {
        self.base_mut().set(key, value)?;
        Ok(self)
    }
}

/// Sign `message` with the configured secret.
pub(crate) fn sign(config: &BreinConfig, message: &str) -> Result<String, BreinError> {
    let secret = config
        .secret_str()
        .ok_or_else(|| BreinError::Signature("no secret configured".to_string()))?;
    generate_signature(message, secret)
}

/// Timestamp written into a prepared request.
pub(crate) fn request_timestamp(request: &Map<String, Value>) -> i64 {
    request
        .get(UNIX_TIMESTAMP_FIELD)
        .and_then(Value::as_i64)
        .unwrap_or_default()
}
