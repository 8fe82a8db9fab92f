//! Natural-language command endpoint handler.

use axum::{extract::State, Json};

use crate::api::{models::CommandRequest, routes::AppState};
use crate::engine::CommandOutcome;

/// Handler for POST /tasks/process
///
/// Runs the command through the interpretation pipeline. Always answers
/// with a message and the post-commit task snapshot; interpreter failures
/// are absorbed by the fallback branch inside the engine.
pub async fn process_command(
    State(state): State<AppState>,
    Json(req): Json<CommandRequest>,
) -> Json<CommandOutcome> {
    tracing::info!("processing command: {:?}", req.command);
    let outcome = state.engine.process(&req.command).await;
    Json(outcome)
}
