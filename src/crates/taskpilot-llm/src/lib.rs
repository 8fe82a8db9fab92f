//! Ollama integration for TaskPilot.
//!
//! This crate provides the HTTP client for a local Ollama server and the
//! [`TextGenerator`] trait the command interpreter consumes. The trait
//! keeps the interpreter provider-agnostic: production wires in
//! [`OllamaClient`], tests substitute stubs.
//!
//! # Example
//!
//! ```rust,ignore
//! use taskpilot_llm::{OllamaClient, OllamaConfig};
//!
//! let client = OllamaClient::new(OllamaConfig::from_env());
//! let text = client.generate("Say hello").await?;
//! ```

pub mod config;
pub mod error;
pub mod ollama;

pub use config::OllamaConfig;
pub use error::{LlmError, Result};
pub use ollama::{OllamaClient, TextGenerator};
