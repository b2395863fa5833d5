//! HTTP route handlers.

use axum::body::Bytes;
use axum::extract::DefaultBodyLimit;
use axum::extract::rejection::BytesRejection;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};

use crate::directions::DirectionsError;
use crate::domain::{RouteRequest, RouteResult, ValidationError};

use super::cors::cors_layer;
use super::dto::*;
use super::state::AppState;

/// Largest accepted request body. Two maximal locations fit comfortably.
pub const MAX_BODY_BYTES: usize = 16 * 1024;

/// Create the application router.
///
/// `allowed_origins` is the CORS allowlist.
pub fn create_router(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/calculate-route", post(calculate_route))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors_layer(allowed_origins))
        .with_state(state)
}

/// Liveness message.
async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Smart Travel Recommender API",
    })
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Validate a route request, look it up upstream, and normalize the result.
async fn calculate_route(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<RouteResult>, AppError> {
    let body = body.map_err(AppError::Body)?;

    // Parse JSON manually so malformed bodies get the same error shape
    let request: RouteRequest = serde_json::from_slice(&body)
        .map_err(|e| ValidationError::InvalidBody(e.to_string()))?;

    let validated = request.validate()?;
    info!(mode = %validated.mode(), "calculating route");

    let summary = state.directions.fetch_route(&validated).await?;

    Ok(Json(summary.into_result(validated.mode())))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Request body could not be read, e.g. over [`MAX_BODY_BYTES`]
    Body(BytesRejection),
    /// Client input rejected before any upstream call
    Validation(ValidationError),
    /// Upstream lookup failed or was not attempted
    Directions(DirectionsError),
}

impl AppError {
    /// HTTP status reported to the client.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Body(rejection) => rejection.status(),
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Directions(e) => match e {
                DirectionsError::NotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
                DirectionsError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
                DirectionsError::Network(_) | DirectionsError::MalformedPayload(_) => {
                    StatusCode::BAD_GATEWAY
                }
                DirectionsError::Status(_) => StatusCode::BAD_REQUEST,
            },
        }
    }

    /// Stable machine-readable category.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Body(_) | AppError::Validation(_) => "validation",
            AppError::Directions(e) => match e {
                DirectionsError::NotConfigured => "configuration",
                DirectionsError::Timeout(_) => "timeout",
                DirectionsError::Network(_) => "network",
                DirectionsError::MalformedPayload(_) => "malformed_payload",
                DirectionsError::Status(_) => "upstream_status",
            },
        }
    }

    /// Message shown to the client.
    pub fn message(&self) -> String {
        match self {
            AppError::Body(rejection) => rejection.body_text(),
            AppError::Validation(e) => e.to_string(),
            AppError::Directions(e) => e.client_message(),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Validation(e)
    }
}

impl From<DirectionsError> for AppError {
    fn from(e: DirectionsError) -> Self {
        AppError::Directions(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let kind = self.kind();
        let message = self.message();

        if status.is_server_error() {
            warn!(status = status.as_u16(), kind, "{message}");
        } else {
            info!(status = status.as_u16(), kind, "{message}");
        }

        let body = Json(ErrorResponse {
            error: message,
            kind,
        });
        (status, body).into_response()
    }
}
