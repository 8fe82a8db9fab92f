//! Task CRUD endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::{
    error::{ApiError, ApiResult},
    middleware,
    routes::AppState,
};
use taskpilot_core::Task;

/// Create a new task
///
/// POST /tasks
pub async fn create_task(
    State(state): State<AppState>,
    Json(task): Json<Task>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    middleware::validate_not_empty(&task.title, "title")?;
    middleware::validate_string_length(&task.title, "title", 1, 255)?;

    let mut store = state.store.lock().await;
    let created = store.add(task);

    tracing::info!("Created task: {}", created.id.unwrap_or_default());
    Ok((StatusCode::CREATED, Json(created)))
}

/// Get all tasks
///
/// GET /tasks
pub async fn list_tasks(State(state): State<AppState>) -> Json<Vec<Task>> {
    let store = state.store.lock().await;
    Json(store.snapshot())
}

/// Get a single task by id
///
/// GET /tasks/:id
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<Json<Task>> {
    let store = state.store.lock().await;
    store
        .get(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Task not found: {}", id)))
}

/// Update an existing task
///
/// PUT /tasks/:id
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(task): Json<Task>,
) -> ApiResult<Json<Task>> {
    middleware::validate_not_empty(&task.title, "title")?;

    let mut store = state.store.lock().await;
    let updated = store
        .update(id, task)
        .ok_or_else(|| ApiError::NotFound(format!("Task not found: {}", id)))?;

    tracing::info!("Updated task: {}", id);
    Ok(Json(updated))
}

/// Delete a task
///
/// DELETE /tasks/:id
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<Json<bool>> {
    let mut store = state.store.lock().await;
    if !store.delete(id) {
        return Err(ApiError::NotFound(format!("Task not found: {}", id)));
    }

    tracing::info!("Deleted task: {}", id);
    Ok(Json(true))
}
