//! REST API surface.
//!
//! Thin request/response marshaling over the command engine and the task
//! store; all interesting behavior lives in the pipeline.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;

pub use routes::{create_router, AppState};
