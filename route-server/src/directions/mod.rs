//! Directions API client.
//!
//! This module provides an HTTP client for a Google Directions-compatible
//! API, which resolves a pair of free-text locations into a route.
//!
//! Key characteristics of the provider:
//! - The API key travels as a `key` query parameter, so request URLs must
//!   never be logged or surfaced in errors
//! - Provider-level failures arrive as HTTP 200 with a non-`OK` `status`
//!   field, not as HTTP error codes
//! - Successful bodies nest the useful data in `routes[0].legs[0]`, and
//!   any level of that nesting may be absent

mod client;
mod convert;
mod error;
mod status;
mod types;

pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, DirectionsClient, DirectionsConfig};
pub use convert::RouteSummary;
pub use error::DirectionsError;
