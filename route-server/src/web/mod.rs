//! Web layer for the route proxy.
//!
//! Provides the HTTP endpoints clients call to calculate routes.

mod cors;
mod dto;
mod routes;
mod state;

pub use cors::cors_layer;
pub use dto::*;
pub use routes::{AppError, MAX_BODY_BYTES, create_router};
pub use state::AppState;
