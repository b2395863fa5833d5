//! Conversion from Directions DTOs to route summaries.
//!
//! Only the first leg of the first route is used. Every field read along
//! the way is required; the first one found missing is reported.

use crate::domain::{RouteResult, TravelMode};

use super::types::DirectionsResponse;

/// Error during DTO conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Missing required field
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// The fields of a successful response the proxy passes on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSummary {
    pub start_address: String,
    pub end_address: String,
    pub distance: String,
    pub duration: String,
    pub polyline: String,
}

impl RouteSummary {
    /// Build the client-facing result, echoing the requested mode.
    pub fn into_result(self, mode: TravelMode) -> RouteResult {
        RouteResult {
            origin: self.start_address,
            destination: self.end_address,
            mode,
            distance: self.distance,
            duration: self.duration,
            polyline: self.polyline,
        }
    }
}

/// Extract the route summary from an `OK` response.
///
/// The caller is responsible for checking `status` first.
pub fn convert_directions(response: &DirectionsResponse) -> Result<RouteSummary, ConversionError> {
    let route = response
        .routes
        .as_ref()
        .ok_or(ConversionError::MissingField("routes"))?
        .first()
        .ok_or(ConversionError::MissingField("routes[0]"))?;

    let leg = route
        .legs
        .as_ref()
        .ok_or(ConversionError::MissingField("routes[0].legs"))?
        .first()
        .ok_or(ConversionError::MissingField("routes[0].legs[0]"))?;

    let start_address = leg
        .start_address
        .clone()
        .ok_or(ConversionError::MissingField("legs[0].start_address"))?;
    let end_address = leg
        .end_address
        .clone()
        .ok_or(ConversionError::MissingField("legs[0].end_address"))?;
    let distance = leg
        .distance
        .as_ref()
        .and_then(|d| d.text.clone())
        .ok_or(ConversionError::MissingField("legs[0].distance.text"))?;
    let duration = leg
        .duration
        .as_ref()
        .and_then(|d| d.text.clone())
        .ok_or(ConversionError::MissingField("legs[0].duration.text"))?;

    let polyline = route
        .overview_polyline
        .as_ref()
        .and_then(|p| p.points.clone())
        .ok_or(ConversionError::MissingField(
            "routes[0].overview_polyline.points",
        ))?;

    Ok(RouteSummary {
        start_address,
        end_address,
        distance,
        duration,
        polyline,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn ok_body() -> Value {
        json!({
            "status": "OK",
            "routes": [{
                "legs": [{
                    "start_address": "A",
                    "end_address": "B",
                    "distance": {"text": "5 km", "value": 5000},
                    "duration": {"text": "10 mins", "value": 600}
                }],
                "overview_polyline": {"points": "xyz"}
            }]
        })
    }

    fn convert(body: Value) -> Result<RouteSummary, ConversionError> {
        let response: DirectionsResponse = serde_json::from_value(body).unwrap();
        convert_directions(&response)
    }

    #[test]
    fn converts_first_leg_of_first_route() {
        let summary = convert(ok_body()).unwrap();
        assert_eq!(
            summary,
            RouteSummary {
                start_address: "A".into(),
                end_address: "B".into(),
                distance: "5 km".into(),
                duration: "10 mins".into(),
                polyline: "xyz".into(),
            }
        );
    }

    #[test]
    fn into_result_echoes_mode() {
        let result = convert(ok_body()).unwrap().into_result(TravelMode::Driving);
        assert_eq!(
            result,
            RouteResult {
                origin: "A".into(),
                destination: "B".into(),
                mode: TravelMode::Driving,
                distance: "5 km".into(),
                duration: "10 mins".into(),
                polyline: "xyz".into(),
            }
        );
    }

    #[test]
    fn ignores_later_routes() {
        let mut body = ok_body();
        let mut second = body["routes"][0].clone();
        second["legs"][0]["start_address"] = json!("Elsewhere");
        body["routes"].as_array_mut().unwrap().push(second);

        assert_eq!(convert(body).unwrap().start_address, "A");
    }

    #[test]
    fn missing_routes() {
        let mut body = ok_body();
        body.as_object_mut().unwrap().remove("routes");
        assert_eq!(
            convert(body).unwrap_err(),
            ConversionError::MissingField("routes")
        );
    }

    #[test]
    fn empty_routes() {
        let mut body = ok_body();
        body["routes"] = json!([]);
        assert_eq!(
            convert(body).unwrap_err(),
            ConversionError::MissingField("routes[0]")
        );
    }

    #[test]
    fn missing_legs() {
        let mut body = ok_body();
        body["routes"][0].as_object_mut().unwrap().remove("legs");
        assert_eq!(
            convert(body).unwrap_err(),
            ConversionError::MissingField("routes[0].legs")
        );
    }

    #[test]
    fn empty_legs() {
        let mut body = ok_body();
        body["routes"][0]["legs"] = json!([]);
        assert_eq!(
            convert(body).unwrap_err(),
            ConversionError::MissingField("routes[0].legs[0]")
        );
    }

    #[test]
    fn legs_of_wrong_type_are_named() {
        let mut body = ok_body();
        body["routes"][0]["legs"] = json!({});
        assert_eq!(
            convert(body).unwrap_err(),
            ConversionError::MissingField("routes[0].legs")
        );
    }

    #[test]
    fn fractional_distance_value_is_accepted() {
        let mut body = ok_body();
        body["routes"][0]["legs"][0]["distance"]["value"] = json!(5000.5);
        body["routes"][0]["summary"] = json!(42);

        assert_eq!(convert(body).unwrap().distance, "5 km");
    }

    #[test]
    fn missing_leg_fields() {
        let cases = [
            ("start_address", "legs[0].start_address"),
            ("end_address", "legs[0].end_address"),
            ("distance", "legs[0].distance.text"),
            ("duration", "legs[0].duration.text"),
        ];

        for (key, expected) in cases {
            let mut body = ok_body();
            body["routes"][0]["legs"][0]
                .as_object_mut()
                .unwrap()
                .remove(key);
            assert_eq!(
                convert(body).unwrap_err(),
                ConversionError::MissingField(expected),
                "removing {key}"
            );
        }
    }

    #[test]
    fn distance_without_text() {
        let mut body = ok_body();
        body["routes"][0]["legs"][0]["distance"] = json!({"value": 5000});
        assert_eq!(
            convert(body).unwrap_err(),
            ConversionError::MissingField("legs[0].distance.text")
        );
    }

    #[test]
    fn missing_polyline() {
        let mut body = ok_body();
        body["routes"][0]
            .as_object_mut()
            .unwrap()
            .remove("overview_polyline");
        assert_eq!(
            convert(body).unwrap_err(),
            ConversionError::MissingField("routes[0].overview_polyline.points")
        );

        let mut body = ok_body();
        body["routes"][0]["overview_polyline"] = json!({});
        assert_eq!(
            convert(body).unwrap_err(),
            ConversionError::MissingField("routes[0].overview_polyline.points")
        );
    }
}
