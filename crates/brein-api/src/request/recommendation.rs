//! Recommendation requests.

use serde_json::{Map, Value};

use super::{request_timestamp, sign, BreinRequest, RequestBase};
use crate::config::BreinConfig;
use crate::error::BreinError;

pub const RECOMMENDATION_FIELD: &str = "recommendation";
pub const NUM_RECOMMENDATIONS_FIELD: &str = "numRecommendations";
pub const RECOMMENDATION_CATEGORY_FIELD: &str = "recommendationCategory";

/// Number of recommendations asked for unless set otherwise.
pub const DEFAULT_NUMBER_OF_RECOMMENDATIONS: u32 = 3;

/// Asks for recommendations for a user.
#[derive(Debug, Clone, PartialEq)]
pub struct BreinRecommendation {
    base: RequestBase,
    number_of_recommendations: u32,
    category: Option<String>,
}

impl Default for BreinRecommendation {
    fn default() -> Self {
        Self {
            base: RequestBase::default(),
            number_of_recommendations: DEFAULT_NUMBER_OF_RECOMMENDATIONS,
            category: None,
        }
    }
}

impl BreinRecommendation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn number_of_recommendations(&self) -> u32 {
        self.number_of_recommendations
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn with_number_of_recommendations(mut self, number: u32) -> Self {
        self.number_of_recommendations = number;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

impl BreinRequest for BreinRecommendation {
    fn base(&self) -> &RequestBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut RequestBase {
        &mut self.base
    }

    fn endpoint<'a>(&self, config: &'a BreinConfig) -> &'a str {
        &config.recommendation_endpoint
    }

    fn prepare_request_data(&self, _config: &BreinConfig, request: &mut Map<String, Value>) {
        let mut recommendation = Map::new();

        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            recommendation.insert(RECOMMENDATION_CATEGORY_FIELD.to_string(), Value::from(category));
        }
        recommendation.insert(
            NUM_RECOMMENDATIONS_FIELD.to_string(),
            Value::from(self.number_of_recommendations),
        );

        request.insert(RECOMMENDATION_FIELD.to_string(), Value::Object(recommendation));
    }

    fn create_signature(
        &self,
        config: &BreinConfig,
        request: &Map<String, Value>,
    ) -> Result<String, BreinError> {
        sign(config, &request_timestamp(request).to_string())
    }
}
