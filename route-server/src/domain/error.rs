//! Domain error types.
//!
//! These errors describe client input that was rejected before any
//! upstream call was made. They are distinct from upstream/IO errors.

/// Reasons a route request fails validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Location was empty after trimming whitespace
    #[error("{field} must not be empty")]
    EmptyLocation { field: &'static str },

    /// Location exceeded the character limit after trimming
    #[error("{field} must be at most {max} characters (got {len})")]
    LocationTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    /// Mode is not one of the supported travel modes
    #[error("invalid mode '{0}': expected one of driving, walking, bicycling, transit")]
    InvalidMode(String),

    /// Request body could not be decoded
    #[error("invalid request body: {0}")]
    InvalidBody(String),
}
