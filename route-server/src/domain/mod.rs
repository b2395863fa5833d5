//! Domain types for the route proxy.
//!
//! Client input is only trusted once it has been turned into a
//! [`ValidatedRequest`]; everything downstream of validation works with
//! that type and a concrete [`TravelMode`].

mod error;
mod mode;
mod request;
mod route;

pub use error::ValidationError;
pub use mode::TravelMode;
pub use request::{MAX_LOCATION_CHARS, RouteRequest, ValidatedRequest};
pub use route::RouteResult;
