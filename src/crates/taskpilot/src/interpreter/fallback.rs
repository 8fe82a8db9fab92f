//! Deterministic keyword fallback interpreter.
//!
//! Handles a small command vocabulary without any external service. This
//! is the guaranteed terminal branch of the pipeline: it always produces
//! an interpretation, whatever the input.

use crate::interpreter::{CommandAction, Interpretation};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use taskpilot_core::Task;

static LEADING_VERB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(add|create)\b\s*").unwrap());

/// Interpret a command with keyword matching, case-insensitively.
///
/// - "add"/"create": the text after the leading verb becomes a new task's
///   title (original casing kept); a bare verb is inert.
/// - "list": the snapshot unchanged.
/// - "prioritize"/"sort": the snapshot stably sorted by priority, urgent
///   first.
/// - anything else: the snapshot unchanged.
pub fn interpret(command: &str, snapshot: &[Task]) -> Interpretation {
    let lowered = command.trim().to_lowercase();

    if lowered.contains("add") || lowered.contains("create") {
        let title = LEADING_VERB.replace(command.trim(), "").trim().to_string();
        if !title.is_empty() {
            let mut tasks = snapshot.to_vec();
            tasks.push(Task::new(&title));
            return Interpretation {
                action: CommandAction::Add,
                message: format!("Added task: {title}"),
                fragments: to_fragments(&tasks),
            };
        }
        // A bare verb with nothing after it adds nothing.
    } else if lowered.contains("list") {
        return Interpretation {
            action: CommandAction::List,
            message: "Here are your tasks".to_string(),
            fragments: to_fragments(snapshot),
        };
    } else if lowered.contains("prioritize") || lowered.contains("sort") {
        let mut sorted = snapshot.to_vec();
        sorted.sort_by_key(|t| t.priority.rank());
        return Interpretation {
            action: CommandAction::Prioritize,
            message: "Tasks sorted by priority".to_string(),
            fragments: to_fragments(&sorted),
        };
    }

    Interpretation {
        action: CommandAction::List,
        message: "Showing all tasks".to_string(),
        fragments: to_fragments(snapshot),
    }
}

fn to_fragments(tasks: &[Task]) -> Vec<Value> {
    tasks
        .iter()
        .filter_map(|t| serde_json::to_value(t).ok())
        .collect()
}
