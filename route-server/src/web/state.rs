//! Application state for the web layer.

use std::sync::Arc;

use crate::directions::DirectionsClient;

/// Shared application state.
///
/// Read-only after startup; every request works on its own data.
#[derive(Clone)]
pub struct AppState {
    /// Directions API client
    pub directions: Arc<DirectionsClient>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(directions: DirectionsClient) -> Self {
        Self {
            directions: Arc::new(directions),
        }
    }
}
