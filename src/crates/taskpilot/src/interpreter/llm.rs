//! LLM-backed command interpreter.
//!
//! Embeds the current task list and the user's command in a fixed prompt,
//! runs it through a [`TextGenerator`], and extracts a structured result
//! from the free-text response. All failure modes come back as
//! [`InterpretError`]; the engine routes them to the fallback interpreter.

use crate::interpreter::{extract, prompt, CommandAction, InterpretError, Interpretation};
use serde_json::Value;
use std::sync::Arc;
use taskpilot_core::Task;
use taskpilot_llm::TextGenerator;
use tracing::debug;

/// Default message when the model supplies none.
const DEFAULT_MESSAGE: &str = "Command processed";

/// Interprets natural-language commands through a language model.
pub struct LlmInterpreter {
    generator: Arc<dyn TextGenerator>,
}

impl LlmInterpreter {
    /// Create an interpreter over the given text generator.
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Interpret one command against a snapshot of the task list.
    ///
    /// Extraction of the JSON span is lenient (fenced block, then bare
    /// object), parsing is strict. Missing fields default: `action` to
    /// LIST, `message` to a generic note, `tasks` to the unmodified input
    /// snapshot.
    pub async fn interpret(
        &self,
        command: &str,
        snapshot: &[Task],
    ) -> Result<Interpretation, InterpretError> {
        let tasks_json = serde_json::to_string_pretty(snapshot)
            .map_err(|e| InterpretError::Snapshot(e.to_string()))?;
        let prompt = prompt::build_prompt(command, &tasks_json);

        let raw = self.generator.generate(&prompt).await?;
        debug!("model returned {} bytes", raw.len());

        let span = extract::extract_json(&raw).ok_or(InterpretError::NoJsonFound)?;
        let parsed: Value =
            serde_json::from_str(span).map_err(|e| InterpretError::MalformedJson(e.to_string()))?;

        let action = parsed
            .get("action")
            .and_then(Value::as_str)
            .map(CommandAction::from_loose)
            .unwrap_or(CommandAction::List);

        let message = parsed
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_MESSAGE)
            .to_string();

        let fragments = match parsed.get("tasks").and_then(Value::as_array) {
            Some(items) => items.clone(),
            None => snapshot
                .iter()
                .filter_map(|t| serde_json::to_value(t).ok())
                .collect(),
        };

        Ok(Interpretation {
            action,
            message,
            fragments,
        })
    }
}
