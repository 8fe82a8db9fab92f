//! Ollama client implementation.
//!
//! Talks to a local Ollama server through its `/api/generate` endpoint.
//! The command interpreter consumes the client through the
//! [`TextGenerator`] trait so tests can substitute canned generators.

use crate::config::OllamaConfig;
use crate::error::{LlmError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Anything that can turn a prompt into completion text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Run the prompt to completion and return the raw response text.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Client for a local Ollama server.
#[derive(Clone)]
pub struct OllamaClient {
    config: OllamaConfig,
    client: Client,
}

impl OllamaClient {
    /// Create a new client with the given configuration.
    pub fn new(config: OllamaConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Create a client configured from the environment (`OLLAMA_URL`,
    /// `OLLAMA_MODEL`).
    pub fn from_env() -> Self {
        Self::new(OllamaConfig::from_env())
    }

    /// The configured model name.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Check if the Ollama server is reachable.
    pub async fn check_health(&self) -> Result<bool> {
        let url = format!("{}/api/tags", self.config.base_url);
        match self.client.get(&url).send().await {
            Ok(response) => Ok(response.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    /// Run a prompt through `/api/generate` (non-streaming) and return the
    /// free-text response.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/api/generate", self.config.base_url);

        let req_body = GenerateRequest {
            model: self.config.model.clone(),
            prompt: prompt.to_string(),
            stream: false,
        };

        debug!("calling {} with model {}", url, self.config.model);
        let response = self.client.post(&url).json(&req_body).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(LlmError::Provider(format!("{}: {}", status, error_text)));
        }

        let payload: GenerateResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        Ok(payload.response)
    }
}

#[async_trait]
impl TextGenerator for OllamaClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        OllamaClient::generate(self, prompt).await
    }
}

// Ollama API types
#[derive(Debug, Serialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
    #[serde(default)]
    done: bool,
    #[serde(default)]
    prompt_eval_count: Option<usize>,
    #[serde(default)]
    eval_count: Option<usize>,
}
