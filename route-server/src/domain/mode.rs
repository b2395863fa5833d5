//! Travel mode types.

use std::fmt;

use serde::Serialize;

use super::ValidationError;

/// How the route should be travelled.
///
/// This is a closed set: anything the upstream provider would accept
/// beyond these four values is rejected at validation time.
///
/// # Examples
///
/// ```
/// use route_server::domain::TravelMode;
///
/// assert_eq!(TravelMode::parse("walking").unwrap(), TravelMode::Walking);
/// assert_eq!(TravelMode::default(), TravelMode::Driving);
/// assert!(TravelMode::parse("Walking").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    #[default]
    Driving,
    Walking,
    Bicycling,
    Transit,
}

impl TravelMode {
    /// All supported modes, in display order.
    pub const ALL: [TravelMode; 4] = [
        TravelMode::Driving,
        TravelMode::Walking,
        TravelMode::Bicycling,
        TravelMode::Transit,
    ];

    /// Parse a mode from its wire name.
    ///
    /// Matching is exact; the wire names are lowercase.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidMode(s.to_string()))
    }

    /// Returns the wire name sent to the directions provider.
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
            TravelMode::Walking => "walking",
            TravelMode::Bicycling => "bicycling",
            TravelMode::Transit => "transit",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
