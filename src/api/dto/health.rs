//! DTOs for health check endpoint.

use serde::Serialize;

/// Liveness check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
