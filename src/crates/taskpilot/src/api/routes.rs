//! API route definitions.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

use crate::api::{handlers, middleware};
use crate::engine::CommandEngine;
use taskpilot_core::TaskStore;
use taskpilot_llm::OllamaClient;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<TaskStore>>,
    pub engine: Arc<CommandEngine>,
    pub ollama: OllamaClient,
}

/// Build the complete API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(handlers::health))
        .route("/health/ollama", get(handlers::health_ollama))
        // Natural-language command endpoint
        .route("/tasks/process", post(handlers::process_command))
        // Task CRUD endpoints
        .route(
            "/tasks",
            get(handlers::list_tasks).post(handlers::create_task),
        )
        .route(
            "/tasks/:id",
            get(handlers::get_task)
                .put(handlers::update_task)
                .delete(handlers::delete_task),
        )
        .layer(middleware::cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
