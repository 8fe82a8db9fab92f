//! Error types for the Ollama client.

use thiserror::Error;

/// Result type for LLM operations.
pub type Result<T> = std::result::Result<T, LlmError>;

/// Errors that can occur when calling the language model.
#[derive(Debug, Error)]
pub enum LlmError {
    /// HTTP request failed (connection error, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Ollama API error: {0}")]
    Provider(String),

    /// The response body did not have the expected shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl LlmError {
    /// Whether this error was a request timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, LlmError::Http(e) if e.is_timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_display() {
        let err = LlmError::Provider("500: boom".to_string());
        assert_eq!(err.to_string(), "Ollama API error: 500: boom");
        assert!(!err.is_timeout());
    }
}
