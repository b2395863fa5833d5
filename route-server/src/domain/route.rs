//! Normalized route results.

use serde::Serialize;

use super::TravelMode;

/// A route as returned to the client.
///
/// Distance and duration are the provider's display text; the polyline is
/// the provider's encoded path, passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteResult {
    /// Origin address as resolved by the provider
    pub origin: String,

    /// Destination address as resolved by the provider
    pub destination: String,

    /// Travel mode the route was requested with
    pub mode: TravelMode,

    /// Human-readable distance (e.g. "5 km")
    pub distance: String,

    /// Human-readable duration (e.g. "10 mins")
    pub duration: String,

    /// Encoded overview polyline
    pub polyline: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_wire_field_names() {
        let result = RouteResult {
            origin: "A".into(),
            destination: "B".into(),
            mode: TravelMode::Walking,
            distance: "5 km".into(),
            duration: "10 mins".into(),
            polyline: "xyz".into(),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "origin": "A",
                "destination": "B",
                "mode": "walking",
                "distance": "5 km",
                "duration": "10 mins",
                "polyline": "xyz",
            })
        );
    }
}
