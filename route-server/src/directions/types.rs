//! Directions API response DTOs.
//!
//! These types map directly to the Directions JSON response. The body is
//! decoded in two steps: [`DirectionsStatus`] first, then
//! [`DirectionsResponse`] only when the status is `OK`.
//!
//! Everything below the top-level `status` is decoded leniently: a node
//! that is absent, `null`, or of the wrong type becomes `None`, so that
//! conversion can name it instead of failing the whole body. Fields the
//! proxy never reads are not declared at all.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Status envelope common to every Directions response.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsStatus {
    /// `OK` on success, otherwise a provider status code like `ZERO_RESULTS`.
    pub status: String,

    /// Provider diagnostic accompanying a non-`OK` status.
    #[serde(default, deserialize_with = "lenient")]
    pub error_message: Option<String>,
}

/// Route data of an `OK` response.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    /// Candidate routes, best first.
    #[serde(default, deserialize_with = "lenient")]
    pub routes: Option<Vec<DirectionsRoute>>,
}

/// One candidate route.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsRoute {
    /// Legs between consecutive waypoints. Without waypoints there is one.
    #[serde(default, deserialize_with = "lenient")]
    pub legs: Option<Vec<RouteLeg>>,

    /// Encoded path of the whole route.
    #[serde(default, deserialize_with = "lenient")]
    pub overview_polyline: Option<OverviewPolyline>,
}

/// A single leg of a route.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteLeg {
    /// Resolved start address.
    #[serde(default, deserialize_with = "lenient")]
    pub start_address: Option<String>,

    /// Resolved end address.
    #[serde(default, deserialize_with = "lenient")]
    pub end_address: Option<String>,

    /// Leg distance.
    #[serde(default, deserialize_with = "lenient")]
    pub distance: Option<TextValue>,

    /// Leg duration.
    #[serde(default, deserialize_with = "lenient")]
    pub duration: Option<TextValue>,
}

/// Display text of a distance or duration. The numeric `value` is unused.
#[derive(Debug, Clone, Deserialize)]
pub struct TextValue {
    /// Human-readable text, e.g. "5 km".
    #[serde(default, deserialize_with = "lenient")]
    pub text: Option<String>,
}

/// Encoded polyline wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct OverviewPolyline {
    #[serde(default, deserialize_with = "lenient")]
    pub points: Option<String>,
}

/// Decode a node, mapping a type mismatch to `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}
