//! Breinify API client.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::BreinConfig;
use crate::engine::{HttpRestEngine, RestEngine};
use crate::error::BreinError;
use crate::request::{
    BreinActivity, BreinLookup, BreinRecommendation, BreinRequest, BreinTemporalData,
};
use crate::result::BreinResult;
use crate::user::BreinUser;

/// Client for sending requests to the Breinify API.
#[derive(Clone)]
pub struct Breinify {
    config: Arc<BreinConfig>,
    engine: Arc<dyn RestEngine>,
}

impl Breinify {
    /// Create a client sending over HTTP.
    pub fn new(config: BreinConfig) -> Result<Self, BreinError> {
        let engine = HttpRestEngine::new(&config)?;
        Self::with_engine(config, Arc::new(engine))
    }

    /// Create a client using a custom engine.
    ///
    /// The engine keeps its own connection settings. An [`HttpRestEngine`]
    /// should be built from the same `config`, otherwise its connect timeout
    /// comes from the config it was built with.
    pub fn with_engine(
        config: BreinConfig,
        engine: Arc<dyn RestEngine>,
    ) -> Result<Self, BreinError> {
        config.validate()?;
        info!(
            "Breinify client for {} (engine: {}, signed: {})",
            config.base_url,
            engine.name(),
            config.is_sign()
        );

        Ok(Self {
            config: Arc::new(config),
            engine,
        })
    }

    /// Create a client from `BREINIFY_*` environment variables.
    pub fn from_env() -> Result<Self, BreinError> {
        Self::new(BreinConfig::from_env()?)
    }

    /// Get the configuration.
    pub fn config(&self) -> &BreinConfig {
        &self.config
    }

    /// Send any request and wait for the response.
    pub async fn execute(&self, request: &dyn BreinRequest) -> Result<BreinResult, BreinError> {
        let endpoint = request.endpoint(&self.config).to_string();
        debug!("Sending request to {}", endpoint);

        match self.engine.invoke(&self.config, request).await {
            Ok(result) => Ok(result),
            Err(e) => {
                warn!("Request to {} failed: {}", endpoint, e);
                Err(e)
            }
        }
    }

    /// Send an activity.
    pub async fn activity(&self, activity: &BreinActivity) -> Result<BreinResult, BreinError> {
        self.execute(activity).await
    }

    /// Send an activity built from its parts.
    ///
    /// # Arguments
    /// * `user` - User the activity belongs to
    /// * `activity_type` - e.g. `login`, see [`crate::types::activity_type`]
    /// * `category` - Category, the configured default is used if `None`
    /// * `description` - Free-text description
    pub async fn send_activity(
        &self,
        user: BreinUser,
        activity_type: &str,
        category: Option<&str>,
        description: Option<&str>,
    ) -> Result<BreinResult, BreinError> {
        let mut activity = BreinActivity::new()
            .with_user(user)
            .with_activity_type(activity_type);
        if let Some(category) = category {
            activity = activity.with_category(category);
        }
        if let Some(description) = description {
            activity = activity.with_description(description);
        }

        self.activity(&activity).await
    }

    /// Look up dimensions of a user.
    pub async fn lookup(&self, lookup: &BreinLookup) -> Result<BreinResult, BreinError> {
        self.execute(lookup).await
    }

    /// Request recommendations.
    pub async fn recommendation(
        &self,
        recommendation: &BreinRecommendation,
    ) -> Result<BreinResult, BreinError> {
        self.execute(recommendation).await
    }

    /// Resolve temporal data.
    pub async fn temporal_data(
        &self,
        temporal_data: &BreinTemporalData,
    ) -> Result<BreinResult, BreinError> {
        self.execute(temporal_data).await
    }

    /// Send a request in the background and hand the outcome to `callback`.
    ///
    /// The request runs on the current tokio runtime; without one this fails
    /// with [`BreinError::Runtime`]. The returned handle can be awaited or
    /// aborted; dropping it detaches the task.
    pub fn spawn<R, F>(&self, request: R, callback: F) -> Result<JoinHandle<()>, BreinError>
    where
        R: BreinRequest + 'static,
        F: FnOnce(Result<BreinResult, BreinError>) + Send + 'static,
    {
        let runtime = Handle::try_current()?;
        let client = self.clone();

        Ok(runtime.spawn(async move {
            let result = client.execute(&request).await;
            callback(result);
        }))
    }
}

impl std::fmt::Debug for Breinify {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Breinify")
            .field("config", &self.config)
            .field("engine", &self.engine.name())
            .finish()
    }
}
