//! Data transfer objects for web responses.
//!
//! The route request and result bodies live in [`crate::domain`]; these
//! are the envelope types around them.

use serde::Serialize;

/// Body of `GET /`.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,

    /// Machine-readable error category
    pub kind: &'static str,
}
