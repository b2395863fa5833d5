//! Provider status codes and their user-facing messages.

use std::borrow::Cow;

/// The `status` value of a successful response.
pub const OK_STATUS: &str = "OK";

/// Known non-`OK` statuses and the message shown to clients.
const STATUS_MESSAGES: &[(&str, &str)] = &[
    (
        "ZERO_RESULTS",
        "No route found between the specified locations",
    ),
    ("NOT_FOUND", "One or more locations could not be found"),
    ("INVALID_REQUEST", "Invalid route request"),
    ("MAX_WAYPOINTS_EXCEEDED", "Too many waypoints in route request"),
    ("MAX_ROUTE_LENGTH_EXCEEDED", "Requested route is too long"),
    (
        "OVER_QUERY_LIMIT",
        "Route service query limit exceeded, try again later",
    ),
    ("OVER_DAILY_LIMIT", "Route service daily quota exceeded"),
    ("REQUEST_DENIED", "Route service request was denied"),
    (
        "UNKNOWN_ERROR",
        "Route service encountered a temporary error, try again",
    ),
];

/// User-facing message for a non-`OK` provider status.
///
/// Unrecognized codes get a generic message that includes the raw code.
pub fn status_message(code: &str) -> Cow<'static, str> {
    STATUS_MESSAGES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, message)| Cow::Borrowed(*message))
        .unwrap_or_else(|| Cow::Owned(format!("Route calculation failed: {code}")))
}
