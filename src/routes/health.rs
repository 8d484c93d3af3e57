//! Health check endpoints for container orchestration.
//!
//! Liveness probes only: they confirm the process can answer HTTP, nothing
//! more. Used by Kubernetes, ECS, systemd, and load balancers.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::LandingState;

/// Counter server liveness probe.
///
/// Returns a fixed 200 "OK" regardless of counter state.
pub async fn healthz() -> &'static str {
    "OK"
}

/// Health payload for the landing server.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: String,
}

/// Landing server health probe, reporting the configured version.
pub async fn health(State(state): State<LandingState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: state.config.version.clone(),
    })
}
