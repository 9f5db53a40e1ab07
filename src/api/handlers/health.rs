//! Handlers for service info and health check endpoints.

use axum::{Json, extract::State};

use crate::api::dto::health::{HealthResponse, ServiceInfoResponse};
use crate::state::AppState;

/// Returns basic service information.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler() -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        name: "seitenkraft.org API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "running".to_string(),
        health: "/health".to_string(),
    })
}

/// Returns service liveness and the configured environment.
///
/// # Endpoint
///
/// `GET /health`
///
/// No authentication required. Neither the database nor the registrar is
/// contacted.
///
/// # Response
///
/// ```json
/// {
///   "status": "ok",
///   "version": "0.1.0",
///   "environment": "development"
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.environment.to_string(),
    })
}
