//! API request/response models.
//!
//! Tasks travel on the wire as the entity itself; the command endpoint
//! answers with [`crate::engine::CommandOutcome`].

use serde::{Deserialize, Serialize};

/// Request body for POST /tasks/process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandRequest {
    /// Free-form natural-language command.
    pub command: String,
}

/// Health status response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Ollama reachability ("reachable", "unreachable", or "unknown")
    pub ollama: String,
}

impl HealthResponse {
    /// Create a new health response.
    pub fn new(status: impl Into<String>, ollama: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            ollama: ollama.into(),
        }
    }
}
