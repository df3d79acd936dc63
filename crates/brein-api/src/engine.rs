//! Transport for sending prepared requests.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde_json::{Map, Value};
use tracing::debug;

use crate::config::BreinConfig;
use crate::error::BreinError;
use crate::request::BreinRequest;
use crate::result::BreinResult;

/// Sends a request to its endpoint and returns the parsed response.
///
/// This trait is object-safe and can be used with `Arc<dyn RestEngine>`.
#[async_trait]
pub trait RestEngine: Send + Sync {
    /// Validate, serialize and send `request`.
    async fn invoke(
        &self,
        config: &BreinConfig,
        request: &dyn BreinRequest,
    ) -> Result<BreinResult, BreinError>;

    /// Get a human-readable name for this engine.
    fn name(&self) -> &str;
}

/// [`RestEngine`] posting JSON over HTTP with reqwest.
#[derive(Debug, Clone)]
pub struct HttpRestEngine {
    http: Client,
}

impl HttpRestEngine {
    /// Create an engine using the timeouts of `config`.
    pub fn new(config: &BreinConfig) -> Result<Self, BreinError> {
        let http = Client::builder()
            .connect_timeout(config.connection_timeout)
            .timeout(config.socket_timeout)
            .build()
            .map_err(BreinError::Http)?;

        Ok(Self { http })
    }

    /// Get the underlying HTTP client.
    pub fn http_client(&self) -> &Client {
        &self.http
    }
}

#[async_trait]
impl RestEngine for HttpRestEngine {
    async fn invoke(
        &self,
        config: &BreinConfig,
        request: &dyn BreinRequest,
    ) -> Result<BreinResult, BreinError> {
        request.validate(config)?;

        let url = request.full_url(config);
        let body = request.request_body(config)?;

        debug!("POST {} ({} bytes)", url, body.len());

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .timeout(config.socket_timeout)
            .body(body)
            .send()
            .await
            .map_err(BreinError::Http)?;

        let status = response.status();
        debug!("Response status from {}: {}", url, status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BreinError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await.map_err(BreinError::Http)?;
        if text.trim().is_empty() {
            return Ok(BreinResult::default());
        }

        let map: Map<String, Value> = serde_json::from_str(&text)?;
        Ok(BreinResult::new(map))
    }

    fn name(&self) -> &str {
        "http"
    }
}
