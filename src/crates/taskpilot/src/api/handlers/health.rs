//! Health check endpoint handlers.

use axum::{extract::State, http::StatusCode, Json};

use crate::api::{models::HealthResponse, routes::AppState};

/// Handler for GET /health
///
/// Returns basic service status without probing Ollama.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::new("ok", "unknown"))
}

/// Handler for GET /health/ollama
///
/// Probes the Ollama server; 503 when it is unreachable. The pipeline
/// still works in that state — commands just take the fallback branch.
pub async fn health_ollama(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    match state.ollama.check_health().await {
        Ok(true) => (StatusCode::OK, Json(HealthResponse::new("ok", "reachable"))),
        _ => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse::new("ok", "unreachable")),
        ),
    }
}
