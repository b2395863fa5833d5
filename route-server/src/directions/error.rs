//! Directions client error types.

use std::time::Duration;

use super::status::status_message;

/// Every way a directions lookup can fail.
///
/// None of the variants ever carry the API key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectionsError {
    /// No API key configured; no request was sent
    #[error("directions API key is not configured")]
    NotConfigured,

    /// Provider did not answer within the timeout
    #[error("request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// Connection failure, DNS failure, or non-2xx HTTP status
    #[error("network error: {0}")]
    Network(String),

    /// Body was not a well-formed Directions response
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// Provider answered with a non-`OK` status
    #[error("provider status {0}")]
    Status(String),
}

impl DirectionsError {
    /// Message safe to show to API clients.
    pub fn client_message(&self) -> String {
        match self {
            DirectionsError::NotConfigured => "Route service API key is not configured".to_string(),
            DirectionsError::Timeout(_) => "Route service timed out".to_string(),
            DirectionsError::Network(detail) => format!("Route service unavailable: {detail}"),
            DirectionsError::MalformedPayload(detail) => {
                format!("Invalid response from route service: {detail}")
            }
            DirectionsError::Status(code) => status_message(code).into_owned(),
        }
    }
}
