//! DTOs for service info and health check endpoints.

use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// `"production"` or `"development"`, derived from the registrar endpoint.
    pub environment: String,
}

/// Basic service information returned by `GET /`.
#[derive(Debug, Serialize)]
pub struct ServiceInfoResponse {
    pub name: String,
    pub version: String,
    pub status: String,
    pub health: String,
}
