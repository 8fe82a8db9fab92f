//! Request validation helpers and HTTP middleware layers.

use crate::api::error::{ApiError, ApiResult};
use tower_http::cors::CorsLayer;

/// CORS layer for the API (permissive; this is a single-operator tool).
pub fn cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

/// Validate that a required string field is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(ApiError::ValidationError(format!(
            "{} cannot be empty",
            field_name
        )));
    }
    Ok(())
}

/// Validate string length constraints.
pub fn validate_string_length(
    value: &str,
    field_name: &str,
    min: usize,
    max: usize,
) -> ApiResult<()> {
    if value.len() < min || value.len() > max {
        return Err(ApiError::ValidationError(format!(
            "{} must be between {} and {} characters",
            field_name, min, max
        )));
    }
    Ok(())
}
