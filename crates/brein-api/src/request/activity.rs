//! Activity requests.

use serde_json::{Map, Value};

use super::{request_timestamp, sign, BreinRequest, RequestBase};
use crate::config::BreinConfig;
use crate::error::BreinError;
use crate::util::{contains_value, get_nested_str};

pub const ACTIVITY_FIELD: &str = "activity";
pub const ACTIVITY_TYPE_FIELD: &str = "type";
pub const ACTIVITY_CATEGORY_FIELD: &str = "category";
pub const ACTIVITY_DESCRIPTION_FIELD: &str = "description";
pub const ACTIVITY_TAGS_FIELD: &str = "tags";

/// Reports something a user did, e.g. a login or a page visit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BreinActivity {
    base: RequestBase,
    activity_type: Option<String>,
    category: Option<String>,
    description: Option<String>,
    tags: Map<String, Value>,
}

impl BreinActivity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn activity_type(&self) -> Option<&str> {
        self.activity_type.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn tags(&self) -> &Map<String, Value> {
        &self.tags
    }

    pub fn with_activity_type(mut self, activity_type: impl Into<String>) -> Self {
        self.activity_type = Some(activity_type.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a tag; tags are free-form key/value pairs attached to the activity.
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }
}

impl BreinRequest for BreinActivity {
    fn base(&self) -> &RequestBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut RequestBase {
        &mut self.base
    }

    fn endpoint<'a>(&self, config: &'a BreinConfig) -> &'a str {
        &config.activity_endpoint
    }

    fn prepare_request_data(&self, config: &BreinConfig, request: &mut Map<String, Value>) {
        let mut activity = Map::new();

        if let Some(activity_type) = self.activity_type.as_deref().filter(|t| !t.is_empty()) {
            activity.insert(ACTIVITY_TYPE_FIELD.to_string(), Value::from(activity_type));
        }

        // the configured default applies when the activity has no category
        let category = self
            .category
            .as_deref()
            .filter(|c| !c.is_empty())
            .or_else(|| config.default_category.as_deref().filter(|c| !c.is_empty()));
        if let Some(category) = category {
            activity.insert(ACTIVITY_CATEGORY_FIELD.to_string(), Value::from(category));
        }

        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            activity.insert(ACTIVITY_DESCRIPTION_FIELD.to_string(), Value::from(description));
        }

        let tags: Map<String, Value> = self
            .tags
            .iter()
            .filter(|(_, v)| contains_value(v))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        if !tags.is_empty() {
            activity.insert(ACTIVITY_TAGS_FIELD.to_string(), Value::Object(tags));
        }

        request.insert(ACTIVITY_FIELD.to_string(), Value::Object(activity));
    }

    fn create_signature(
        &self,
        config: &BreinConfig,
        request: &Map<String, Value>,
    ) -> Result<String, BreinError> {
        let activity_type =
            get_nested_str(request, &[ACTIVITY_FIELD, ACTIVITY_TYPE_FIELD]).unwrap_or_default();
        let message = format!("{}{}{}", activity_type, request_timestamp(request), 1);
        sign(config, &message)
    }

    fn validate(&self, config: &BreinConfig) -> Result<(), BreinError> {
        config.validate()?;

        match self.base.user() {
            Some(user) if user.has_values() => Ok(()),
            _ => Err(BreinError::Validation(
                "an activity needs a user with at least one value".to_string(),
            )),
        }
    }
}
