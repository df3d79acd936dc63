//! Error types for brein-api.

use thiserror::Error;

/// Errors that can occur when building or sending Breinify requests.
#[derive(Debug, Error)]
pub enum BreinError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The endpoint answered with a non-success status.
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Missing required environment variable.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// The request is missing data the endpoint requires.
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Attempt to overwrite a field owned by the request itself.
    #[error("The field '{0}' cannot be set directly")]
    ReservedField(String),

    /// The signature could not be created.
    #[error("Signature error: {0}")]
    Signature(String),

    /// No tokio runtime to run a background request on.
    #[error("No tokio runtime: {0}")]
    Runtime(#[from] tokio::runtime::TryCurrentError),
}
