//! Route request validation.

use serde::Deserialize;

use super::{TravelMode, ValidationError};

/// Maximum length of a location, in characters, after trimming.
pub const MAX_LOCATION_CHARS: usize = 500;

/// A route request as received from the client.
///
/// Nothing here is trusted yet; call [`RouteRequest::validate`] before
/// using any of it.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteRequest {
    /// Free-text starting location
    pub origin: String,

    /// Free-text end location
    pub destination: String,

    /// Travel mode wire name; `driving` when absent
    #[serde(default)]
    pub mode: Option<String>,
}

/// A route request whose locations and mode have been checked.
///
/// Locations are trimmed and hold between 1 and [`MAX_LOCATION_CHARS`]
/// characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    origin: String,
    destination: String,
    mode: TravelMode,
}

impl RouteRequest {
    /// Create a request from its parts.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        mode: Option<&str>,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            mode: mode.map(str::to_string),
        }
    }

    /// Check the request and produce its validated form.
    ///
    /// Locations are checked before the mode, origin before destination.
    pub fn validate(&self) -> Result<ValidatedRequest, ValidationError> {
        let origin = validate_location("origin", &self.origin)?;
        let destination = validate_location("destination", &self.destination)?;
        let mode = match self.mode.as_deref() {
            Some(mode) => TravelMode::parse(mode)?,
            None => TravelMode::default(),
        };

        Ok(ValidatedRequest {
            origin,
            destination,
            mode,
        })
    }
}

impl ValidatedRequest {
    /// Trimmed origin.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Trimmed destination.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn mode(&self) -> TravelMode {
        self.mode
    }
}

fn validate_location(field: &'static str, raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyLocation { field });
    }

    let len = trimmed.chars().count();
    if len > MAX_LOCATION_CHARS {
        return Err(ValidationError::LocationTooLong {
            field,
            len,
            max: MAX_LOCATION_CHARS,
        });
    }

    Ok(trimmed.to_string())
}
