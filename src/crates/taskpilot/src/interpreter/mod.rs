//! Command interpretation.
//!
//! Two interpreters share one output contract: the [`llm`] interpreter
//! asks the language model to rewrite the task list, and [`fallback`]
//! handles a small keyword vocabulary deterministically when the model is
//! unavailable or returns unusable output. Both produce an
//! [`Interpretation`] whose task fragments still have to pass through the
//! normalizer before they are committed.

pub mod extract;
pub mod fallback;
pub mod llm;
pub mod prompt;

pub use llm::LlmInterpreter;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskpilot_llm::LlmError;
use thiserror::Error;

/// The intent an interpreter attributes to a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandAction {
    /// Add a new task
    Add,
    /// Update an existing task
    Update,
    /// Delete a task
    Delete,
    /// List tasks with optional filtering/sorting
    List,
    /// Reorganize tasks by priority
    Prioritize,
    /// Suggest optimal scheduling
    Schedule,
}

impl CommandAction {
    /// Parse an action name leniently; anything unrecognized is LIST.
    pub fn from_loose(raw: &str) -> Self {
        match raw.trim().to_uppercase().as_str() {
            "ADD" => CommandAction::Add,
            "UPDATE" => CommandAction::Update,
            "DELETE" => CommandAction::Delete,
            "PRIORITIZE" => CommandAction::Prioritize,
            "SCHEDULE" => CommandAction::Schedule,
            _ => CommandAction::List,
        }
    }
}

impl std::fmt::Display for CommandAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandAction::Add => write!(f, "ADD"),
            CommandAction::Update => write!(f, "UPDATE"),
            CommandAction::Delete => write!(f, "DELETE"),
            CommandAction::List => write!(f, "LIST"),
            CommandAction::Prioritize => write!(f, "PRIORITIZE"),
            CommandAction::Schedule => write!(f, "SCHEDULE"),
        }
    }
}

/// The structured result of interpreting one command.
///
/// `fragments` is the interpreter's full rewrite of the task list, still
/// loosely typed; the engine normalizes it and commits it wholesale.
#[derive(Debug, Clone)]
pub struct Interpretation {
    pub action: CommandAction,
    pub message: String,
    pub fragments: Vec<Value>,
}

/// Failure signal from the LLM interpreter. Every variant routes the
/// command to the fallback interpreter; none of them reaches the caller.
#[derive(Debug, Error)]
pub enum InterpretError {
    /// Transport failure, non-success status, or timeout.
    #[error("language model call failed: {0}")]
    Llm(#[from] LlmError),

    /// The model's text contained no extractable JSON object.
    #[error("no JSON object found in model response")]
    NoJsonFound,

    /// An extracted span was not valid JSON.
    #[error("failed to parse JSON from model response: {0}")]
    MalformedJson(String),

    /// The current task list could not be serialized into the prompt.
    #[error("failed to serialize task snapshot: {0}")]
    Snapshot(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_from_loose() {
        assert_eq!(CommandAction::from_loose("ADD"), CommandAction::Add);
        assert_eq!(CommandAction::from_loose("prioritize"), CommandAction::Prioritize);
        assert_eq!(CommandAction::from_loose(" Schedule "), CommandAction::Schedule);
        assert_eq!(CommandAction::from_loose("nonsense"), CommandAction::List);
        assert_eq!(CommandAction::from_loose(""), CommandAction::List);
    }

    #[test]
    fn test_action_wire_form() {
        let json = serde_json::to_string(&CommandAction::Prioritize).unwrap();
        assert_eq!(json, "\"PRIORITIZE\"");

        let parsed: CommandAction = serde_json::from_str("\"DELETE\"").unwrap();
        assert_eq!(parsed, CommandAction::Delete);
    }
}
