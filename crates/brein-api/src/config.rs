//! Configuration for the Breinify client.

use std::env;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::error::BreinError;

/// Default base URL of the Breinify API.
pub const DEFAULT_BASE_URL: &str = "https://api.breinify.com";
/// Default activity endpoint.
pub const DEFAULT_ACTIVITY_ENDPOINT: &str = "/activity";
/// Default lookup endpoint.
pub const DEFAULT_LOOKUP_ENDPOINT: &str = "/lookup";
/// Default temporal data endpoint.
pub const DEFAULT_TEMPORAL_DATA_ENDPOINT: &str = "/temporaldata";
/// Default recommendation endpoint.
pub const DEFAULT_RECOMMENDATION_ENDPOINT: &str = "/recommendation";
/// Default connection timeout in milliseconds.
pub const DEFAULT_CONNECTION_TIMEOUT_MS: u64 = 1000;
/// Default socket (whole request) timeout in milliseconds.
pub const DEFAULT_SOCKET_TIMEOUT_MS: u64 = 6000;

/// Configuration for talking to the Breinify API.
#[derive(Debug, Clone)]
pub struct BreinConfig {
    /// Base URL (e.g., "https://api.breinify.com").
    pub base_url: String,
    /// API key identifying the account.
    pub api_key: String,
    /// Path of the activity endpoint.
    pub activity_endpoint: String,
    /// Path of the lookup endpoint.
    pub lookup_endpoint: String,
    /// Path of the temporal data endpoint.
    pub temporal_data_endpoint: String,
    /// Path of the recommendation endpoint.
    pub recommendation_endpoint: String,
    /// Timeout for establishing the connection.
    pub connection_timeout: Duration,
    /// Timeout for the complete request.
    pub socket_timeout: Duration,
    /// Category used for activities that don't carry one.
    pub default_category: Option<String>,
    /// Add the detected local IP address to requests without one.
    pub detect_ip_address: bool,
    /// Secret used to sign requests. Unsigned if `None`.
    secret: Option<SecretString>,
}

impl Default for BreinConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            activity_endpoint: DEFAULT_ACTIVITY_ENDPOINT.to_string(),
            lookup_endpoint: DEFAULT_LOOKUP_ENDPOINT.to_string(),
            temporal_data_endpoint: DEFAULT_TEMPORAL_DATA_ENDPOINT.to_string(),
            recommendation_endpoint: DEFAULT_RECOMMENDATION_ENDPOINT.to_string(),
            connection_timeout: Duration::from_millis(DEFAULT_CONNECTION_TIMEOUT_MS),
            socket_timeout: Duration::from_millis(DEFAULT_SOCKET_TIMEOUT_MS),
            default_category: None,
            detect_ip_address: false,
            secret: None,
        }
    }
}

impl BreinConfig {
    /// Create an unsigned configuration for the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Create a configuration that signs every request with `secret`.
    pub fn with_secret(api_key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self::new(api_key).secret(secret)
    }

    /// Create configuration from environment variables.
    ///
    /// Required:
    /// - `BREINIFY_API_KEY` - API key of the account
    ///
    /// Optional (with defaults):
    /// - `BREINIFY_SECRET` - Signing secret (default: unsigned)
    /// - `BREINIFY_BASE_URL` - Default: https://api.breinify.com
    /// - `BREINIFY_ACTIVITY_ENDPOINT` - Default: /activity
    /// - `BREINIFY_LOOKUP_ENDPOINT` - Default: /lookup
    /// - `BREINIFY_TEMPORAL_DATA_ENDPOINT` - Default: /temporaldata
    /// - `BREINIFY_RECOMMENDATION_ENDPOINT` - Default: /recommendation
    /// - `BREINIFY_CONNECTION_TIMEOUT_MS` - Default: 1000
    /// - `BREINIFY_SOCKET_TIMEOUT_MS` - Default: 6000
    /// - `BREINIFY_DEFAULT_CATEGORY` - Default: none
    /// - `BREINIFY_DETECT_IP` - Default: false
    pub fn from_env() -> Result<Self, BreinError> {
        let api_key = env::var("BREINIFY_API_KEY")
            .map_err(|_| BreinError::MissingEnvVar("BREINIFY_API_KEY".to_string()))?;

        let mut config = Self::new(api_key);

        if let Ok(secret) = env::var("BREINIFY_SECRET") {
            config = config.secret(secret);
        }
        if let Ok(url) = env::var("BREINIFY_BASE_URL") {
            config.base_url = url;
        }
        if let Ok(endpoint) = env::var("BREINIFY_ACTIVITY_ENDPOINT") {
            config.activity_endpoint = endpoint;
        }
        if let Ok(endpoint) = env::var("BREINIFY_LOOKUP_ENDPOINT") {
            config.lookup_endpoint = endpoint;
        }
        if let Ok(endpoint) = env::var("BREINIFY_TEMPORAL_DATA_ENDPOINT") {
            config.temporal_data_endpoint = endpoint;
        }
        if let Ok(endpoint) = env::var("BREINIFY_RECOMMENDATION_ENDPOINT") {
            config.recommendation_endpoint = endpoint;
        }

        config.connection_timeout = Duration::from_millis(parse_millis(
            "BREINIFY_CONNECTION_TIMEOUT_MS",
            DEFAULT_CONNECTION_TIMEOUT_MS,
        )?);
        config.socket_timeout = Duration::from_millis(parse_millis(
            "BREINIFY_SOCKET_TIMEOUT_MS",
            DEFAULT_SOCKET_TIMEOUT_MS,
        )?);

        config.default_category = env::var("BREINIFY_DEFAULT_CATEGORY")
            .ok()
            .filter(|c| !c.is_empty());

        config.detect_ip_address = env::var("BREINIFY_DETECT_IP")
            .ok()
            .map(|v| v.to_lowercase() == "true" || v == "1")
            .unwrap_or(false);

        Ok(config)
    }

    /// Whether requests are signed, i.e. a non-empty secret is configured.
    pub fn is_sign(&self) -> bool {
        self.secret
            .as_ref()
            .is_some_and(|s| !s.expose_secret().is_empty())
    }

    /// Get the secret (exposes it).
    pub(crate) fn secret_str(&self) -> Option<&str> {
        self.secret.as_ref().map(|s| s.expose_secret())
    }

    /// Builder method to set the signing secret.
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(SecretString::from(secret.into()));
        self
    }

    /// Builder method to set the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builder method to set the activity endpoint.
    pub fn with_activity_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.activity_endpoint = endpoint.into();
        self
    }

    /// Builder method to set the lookup endpoint.
    pub fn with_lookup_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.lookup_endpoint = endpoint.into();
        self
    }

    /// Builder method to set the temporal data endpoint.
    pub fn with_temporal_data_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.temporal_data_endpoint = endpoint.into();
        self
    }

    /// Builder method to set the recommendation endpoint.
    pub fn with_recommendation_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.recommendation_endpoint = endpoint.into();
        self
    }

    /// Builder method to set the connection timeout.
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Builder method to set the socket timeout.
    pub fn with_socket_timeout(mut self, timeout: Duration) -> Self {
        self.socket_timeout = timeout;
        self
    }

    /// Builder method to set the default activity category.
    pub fn with_default_category(mut self, category: impl Into<String>) -> Self {
        self.default_category = Some(category.into());
        self
    }

    /// Builder method to toggle local IP address detection.
    pub fn with_detect_ip_address(mut self, detect: bool) -> Self {
        self.detect_ip_address = detect;
        self
    }

    /// Join the base URL and an endpoint path.
    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), endpoint)
    }

    /// Check that the configuration can be used to send requests.
    pub fn validate(&self) -> Result<(), BreinError> {
        if self.api_key.trim().is_empty() {
            return Err(BreinError::Config("API key is not set".to_string()));
        }

        let url = Url::parse(&self.base_url).map_err(|e| {
            BreinError::Config(format!("Invalid base URL '{}': {}", self.base_url, e))
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(BreinError::Config(format!(
                "Unsupported URL scheme: {}",
                url.scheme()
            )));
        }

        for endpoint in [
            &self.activity_endpoint,
            &self.lookup_endpoint,
            &self.temporal_data_endpoint,
            &self.recommendation_endpoint,
        ] {
            if !endpoint.starts_with('/') {
                return Err(BreinError::Config(format!(
                    "Endpoint '{}' must start with '/'",
                    endpoint
                )));
            }
        }

        Ok(())
    }
}

fn parse_millis(var: &str, default: u64) -> Result<u64, BreinError> {
    match env::var(var) {
        Ok(value) => value
            .parse::<u64>()
            .map_err(|e| BreinError::Config(format!("Invalid {}: {}", var, e))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BreinConfig::default();

        assert_eq!(config.base_url, "https://api.breinify.com");
        assert!(config.api_key.is_empty());
        assert_eq!(config.activity_endpoint, "/activity");
        assert_eq!(config.lookup_endpoint, "/lookup");
        assert_eq!(config.temporal_data_endpoint, "/temporaldata");
        assert_eq!(config.recommendation_endpoint, "/recommendation");
        assert_eq!(config.connection_timeout, Duration::from_millis(1000));
        assert_eq!(config.socket_timeout, Duration::from_millis(6000));
        assert!(config.default_category.is_none());
        assert!(!config.detect_ip_address);
        assert!(!config.is_sign());
    }

    #[test]
    fn test_secret_enables_signing() {
        let config = BreinConfig::with_secret("key", "secret");
        assert!(config.is_sign());
        assert_eq!(config.secret_str(), Some("secret"));

        let empty = BreinConfig::with_secret("key", "");
        assert!(!empty.is_sign());
    }

    #[test]
    fn test_secret_is_redacted_in_debug() {
        let config = BreinConfig::with_secret("key", "very-secret-value");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("very-secret-value"));
    }

    #[test]
    fn test_url_for() {
        let config = BreinConfig::new("key").with_base_url("http://localhost:8080/");
        assert_eq!(
            config.url_for(&config.activity_endpoint),
            "http://localhost:8080/activity"
        );
    }

    #[test]
    fn test_validate() {
        assert!(BreinConfig::new("key").validate().is_ok());

        let err = BreinConfig::new("").validate().unwrap_err();
        assert!(matches!(err, BreinError::Config(_)));

        let err = BreinConfig::new("key")
            .with_base_url("not a url")
            .validate()
            .unwrap_err();
        assert!(matches!(err, BreinError::Config(_)));

        let err = BreinConfig::new("key")
            .with_base_url("ftp://api.breinify.com")
            .validate()
            .unwrap_err();
        assert!(matches!(err, BreinError::Config(_)));

        let err = BreinConfig::new("key")
            .with_activity_endpoint("wrongEndPoint")
            .validate()
            .unwrap_err();
        assert!(matches!(err, BreinError::Config(_)));
    }

    // Environment-based tests are combined into a single test to avoid
    // race conditions when tests run in parallel (env vars are process-global).
    #[test]
    fn test_from_env_scenarios() {
        use std::sync::Mutex;
        static ENV_LOCK: Mutex<()> = Mutex::new(());
        let _guard = ENV_LOCK.lock().unwrap();

        fn clear_all_breinify_vars() {
            for var in [
                "BREINIFY_API_KEY",
                "BREINIFY_SECRET",
                "BREINIFY_BASE_URL",
                "BREINIFY_ACTIVITY_ENDPOINT",
                "BREINIFY_LOOKUP_ENDPOINT",
                "BREINIFY_TEMPORAL_DATA_ENDPOINT",
                "BREINIFY_RECOMMENDATION_ENDPOINT",
                "BREINIFY_CONNECTION_TIMEOUT_MS",
                "BREINIFY_SOCKET_TIMEOUT_MS",
                "BREINIFY_DEFAULT_CATEGORY",
                "BREINIFY_DETECT_IP",
            ] {
                std::env::remove_var(var);
            }
        }

        // Scenario 1: Missing API key should error
        clear_all_breinify_vars();
        match BreinConfig::from_env() {
            Err(BreinError::MissingEnvVar(var)) => assert_eq!(var, "BREINIFY_API_KEY"),
            other => panic!("Expected MissingEnvVar error, got {:?}", other),
        }

        // Scenario 2: Only API key set, defaults used
        clear_all_breinify_vars();
        std::env::set_var("BREINIFY_API_KEY", "env-key");
        let config = BreinConfig::from_env().unwrap();
        assert_eq!(config.api_key, "env-key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(!config.is_sign());
        assert!(!config.detect_ip_address);

        // Scenario 3: All vars set
        clear_all_breinify_vars();
        std::env::set_var("BREINIFY_API_KEY", "env-key");
        std::env::set_var("BREINIFY_SECRET", "env-secret");
        std::env::set_var("BREINIFY_BASE_URL", "http://127.0.0.1:9000");
        std::env::set_var("BREINIFY_ACTIVITY_ENDPOINT", "/a");
        std::env::set_var("BREINIFY_LOOKUP_ENDPOINT", "/l");
        std::env::set_var("BREINIFY_TEMPORAL_DATA_ENDPOINT", "/t");
        std::env::set_var("BREINIFY_RECOMMENDATION_ENDPOINT", "/r");
        std::env::set_var("BREINIFY_CONNECTION_TIMEOUT_MS", "250");
        std::env::set_var("BREINIFY_SOCKET_TIMEOUT_MS", "500");
        std::env::set_var("BREINIFY_DEFAULT_CATEGORY", "home");
        std::env::set_var("BREINIFY_DETECT_IP", "true");

        let config = BreinConfig::from_env().unwrap();
        assert!(config.is_sign());
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.activity_endpoint, "/a");
        assert_eq!(config.lookup_endpoint, "/l");
        assert_eq!(config.temporal_data_endpoint, "/t");
        assert_eq!(config.recommendation_endpoint, "/r");
        assert_eq!(config.connection_timeout, Duration::from_millis(250));
        assert_eq!(config.socket_timeout, Duration::from_millis(500));
        assert_eq!(config.default_category, Some("home".to_string()));
        assert!(config.detect_ip_address);

        // Scenario 4: Invalid timeout
        clear_all_breinify_vars();
        std::env::set_var("BREINIFY_API_KEY", "env-key");
        std::env::set_var("BREINIFY_SOCKET_TIMEOUT_MS", "soon");
        assert!(matches!(BreinConfig::from_env(), Err(BreinError::Config(_))));

        clear_all_breinify_vars();
    }
}
