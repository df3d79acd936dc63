//! Lookup requests.

use serde_json::{Map, Value};

use super::{request_timestamp, sign, BreinRequest, RequestBase};
use crate::config::BreinConfig;
use crate::error::BreinError;

pub const LOOKUP_FIELD: &str = "lookup";
pub const DIMENSIONS_FIELD: &str = "dimensions";

/// The dimensions (e.g., `firstname`, `gender`) a lookup asks for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreinDimension {
    fields: Vec<String>,
}

impl BreinDimension {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Looks up information the service knows about a user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BreinLookup {
    base: RequestBase,
    dimension: BreinDimension,
}

impl BreinLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dimension(&self) -> &BreinDimension {
        &self.dimension
    }

    pub fn with_dimension(mut self, dimension: BreinDimension) -> Self {
        self.dimension = dimension;
        self
    }
}

impl BreinRequest for BreinLookup {
    fn base(&self) -> &RequestBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut RequestBase {
        &mut self.base
    }

    fn endpoint<'a>(&self, config: &'a BreinConfig) -> &'a str {
        &config.lookup_endpoint
    }

    fn prepare_request_data(&self, _config: &BreinConfig, request: &mut Map<String, Value>) {
        if self.dimension.is_empty() {
            return;
        }

        let dimensions = self
            .dimension
            .fields
            .iter()
            .map(|f| Value::String(f.clone()))
            .collect();

        let mut lookup = Map::new();
        lookup.insert(DIMENSIONS_FIELD.to_string(), Value::Array(dimensions));
        request.insert(LOOKUP_FIELD.to_string(), Value::Object(lookup));
    }

    fn create_signature(
        &self,
        config: &BreinConfig,
        request: &Map<String, Value>,
    ) -> Result<String, BreinError> {
        let first = self
            .dimension
            .fields
            .first()
            .ok_or_else(|| {
                BreinError::Signature("a lookup needs at least one dimension".to_string())
            })?;

        let message = format!(
            "{}{}{}",
            first,
            request_timestamp(request),
            self.dimension.fields.len()
        );
        sign(config, &message)
    }

    fn validate(&self, config: &BreinConfig) -> Result<(), BreinError> {
        config.validate()?;

        if self.dimension.is_empty() {
            return Err(BreinError::Validation(
                "a lookup needs at least one dimension".to_string(),
            ));
        }
        Ok(())
    }
}
