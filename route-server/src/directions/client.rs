//! Directions HTTP client.
//!
//! Sends exactly one bounded request per lookup and classifies every
//! outcome into a [`RouteSummary`] or a [`DirectionsError`].

use std::error::Error as _;
use std::fmt;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::ValidatedRequest;

use super::convert::{RouteSummary, convert_directions};
use super::error::DirectionsError;
use super::status::OK_STATUS;
use super::types::{DirectionsResponse, DirectionsStatus};

/// Default base URL for the Directions API.
pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com";

/// Default bound on a single upstream call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const DIRECTIONS_PATH: &str = "/maps/api/directions/json";

/// Configuration for the Directions client.
#[derive(Clone)]
pub struct DirectionsConfig {
    /// API key; `None` when unset or empty
    pub api_key: Option<String>,
    /// Base URL for the API (defaults to production Google Maps)
    pub base_url: String,
    /// Bound on each upstream call
    pub timeout: Duration,
}

impl DirectionsConfig {
    /// Create a new config with the given API key.
    ///
    /// An empty or whitespace-only key is treated as no key.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the upstream timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for DirectionsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectionsConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Directions API client.
///
/// Cheap to share: the inner `reqwest::Client` pools connections and
/// nothing here is mutated after construction.
#[derive(Clone)]
pub struct DirectionsClient {
    http: reqwest::Client,
    url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl DirectionsClient {
    /// Create a new Directions client with the given configuration.
    pub fn new(config: DirectionsConfig) -> Result<Self, DirectionsError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DirectionsError::Network(describe(&e)))?;

        Ok(Self {
            http,
            url: format!("{}{}", config.base_url.trim_end_matches('/'), DIRECTIONS_PATH),
            api_key: config.api_key,
            timeout: config.timeout,
        })
    }

    /// Whether an API key is configured.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Look up a route.
    ///
    /// Without an API key this returns [`DirectionsError::NotConfigured`]
    /// immediately. Otherwise exactly one request is made; failures are
    /// not retried.
    pub async fn fetch_route(
        &self,
        request: &ValidatedRequest,
    ) -> Result<RouteSummary, DirectionsError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(DirectionsError::NotConfigured);
        };

        debug!(
            origin = request.origin(),
            destination = request.destination(),
            mode = %request.mode(),
            "requesting directions"
        );

        let response = self
            .http
            .get(&self.url)
            .query(&[
                ("origin", request.origin()),
                ("destination", request.destination()),
                ("mode", request.mode().as_str()),
                ("key", api_key),
            ])
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "directions provider returned HTTP error");
            return Err(DirectionsError::Network(format!(
                "upstream returned HTTP {}",
                status.as_u16()
            )));
        }

        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        let envelope: DirectionsStatus = serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(500).collect();
            debug!(body = %preview, "unparseable directions body");
            DirectionsError::MalformedPayload(format!("invalid JSON: {e}"))
        })?;

        if envelope.status != OK_STATUS {
            debug!(
                status = %envelope.status,
                error_message = envelope.error_message.as_deref().unwrap_or(""),
                "directions provider reported an error status"
            );
            return Err(DirectionsError::Status(envelope.status));
        }

        let parsed: DirectionsResponse = serde_json::from_str(&body)
            .map_err(|e| DirectionsError::MalformedPayload(format!("invalid JSON: {e}")))?;

        convert_directions(&parsed).map_err(|e| DirectionsError::MalformedPayload(e.to_string()))
    }

    /// Classify a transport failure, scrubbing anything that could carry
    /// the key.
    fn transport_error(&self, err: reqwest::Error) -> DirectionsError {
        if err.is_timeout() {
            warn!(timeout = ?self.timeout, "directions request timed out");
            return DirectionsError::Timeout(self.timeout);
        }

        let mut detail = describe(&err.without_url());
        if let Some(key) = self.api_key.as_deref() {
            detail = detail.replace(key, "<redacted>");
        }
        warn!(error = %detail, "directions request failed");
        DirectionsError::Network(detail)
    }
}

impl fmt::Debug for DirectionsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectionsClient")
            .field("url", &self.url)
            .field("configured", &self.is_configured())
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Render an error and its sources as one line.
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RouteRequest;

    #[test]
    fn config_builder() {
        let config = DirectionsConfig::new(Some("test-key".into()))
            .with_base_url("http://localhost:8080")
            .with_timeout(Duration::from_secs(3));

        assert_eq!(config.api_key.as_deref(), Some("test-key"));
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn config_defaults() {
        let config = DirectionsConfig::new(Some("test-key".into()));

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn empty_key_is_unset() {
        assert!(DirectionsConfig::new(Some(String::new())).api_key.is_none());
        assert!(DirectionsConfig::new(Some("  ".into())).api_key.is_none());
        assert!(DirectionsConfig::new(None).api_key.is_none());
    }

    #[test]
    fn debug_redacts_key() {
        let config = DirectionsConfig::new(Some("super-secret".into()));
        let client = DirectionsClient::new(config.clone()).unwrap();

        assert!(!format!("{config:?}").contains("super-secret"));
        assert!(!format!("{client:?}").contains("super-secret"));
    }

    #[test]
    fn url_joins_base_and_path() {
        let config = DirectionsConfig::new(None).with_base_url("http://localhost:9000/");
        let client = DirectionsClient::new(config).unwrap();
        assert_eq!(client.url, "http://localhost:9000/maps/api/directions/json");
    }

    #[tokio::test]
    async fn missing_key_short_circuits() {
        // Nothing listens here; a request would fail with a network error.
        let config = DirectionsConfig::new(None).with_base_url("http://127.0.0.1:9");
        let client = DirectionsClient::new(config).unwrap();
        let request = RouteRequest::new("A", "B", None).validate().unwrap();

        let err = client.fetch_route(&request).await.unwrap_err();
        assert_eq!(err, DirectionsError::NotConfigured);
    }
}
