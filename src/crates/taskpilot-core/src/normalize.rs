//! Normalization of loosely-typed task fragments.
//!
//! Free-text interpretation produces task fragments whose fields may be the
//! wrong shape: tags as a comma-delimited string, priorities spelled
//! "critical", statuses spelled "in-progress". This module coerces such
//! fragments into valid [`Task`] records, or rejects them with a reason.
//! A rejection applies to the single fragment only; callers drop it and
//! keep going.

use crate::task::{Priority, Task, TaskStatus};
use serde_json::Value;
use thiserror::Error;

/// Why a fragment could not be turned into a task.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    /// The fragment is not a JSON object.
    #[error("fragment is not a JSON object")]
    NotAnObject,

    /// The fragment has no usable title.
    #[error("fragment is missing a title")]
    MissingTitle,
}

/// Coerce a loosely-typed fragment into a valid task.
///
/// Each rule applies independently: unknown priorities fall back to
/// medium, unknown statuses to todo, malformed tags to none. Only a
/// missing title (or a non-object fragment) rejects the fragment outright.
/// The task keeps whatever id and `created_at` the fragment carried; an
/// unset `created_at` stays unset so the store can restore the original
/// timestamp (by id) at commit before stamping a fresh one. Id assignment
/// for id-less tasks also happens at commit.
pub fn normalize_fragment(fragment: &Value) -> Result<Task, RejectReason> {
    let obj = fragment.as_object().ok_or(RejectReason::NotAnObject)?;

    let title = obj
        .get("title")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(RejectReason::MissingTitle)?;

    Ok(Task {
        id: obj.get("id").and_then(coerce_id),
        title: title.to_string(),
        description: obj
            .get("description")
            .and_then(Value::as_str)
            .map(String::from),
        priority: obj.get("priority").map(coerce_priority).unwrap_or_default(),
        due_date: obj.get("due_date").and_then(Value::as_str).map(String::from),
        status: obj.get("status").map(coerce_status).unwrap_or_default(),
        tags: obj.get("tags").map(coerce_tags).unwrap_or_default(),
        created_at: obj
            .get("created_at")
            .and_then(Value::as_str)
            .map(String::from),
    })
}

fn coerce_id(value: &Value) -> Option<u64> {
    value
        .as_u64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
}

/// Synonym table for priorities. Canonical spellings map to themselves;
/// unknown values default to medium.
fn coerce_priority(value: &Value) -> Priority {
    let Some(raw) = value.as_str() else {
        return Priority::default();
    };
    match raw.trim().to_lowercase().as_str() {
        "critical" | "urgent" => Priority::Urgent,
        "high" => Priority::High,
        "medium" | "normal" => Priority::Medium,
        "low" => Priority::Low,
        _ => Priority::default(),
    }
}

/// Synonym table for statuses. Unknown values default to todo.
fn coerce_status(value: &Value) -> TaskStatus {
    let Some(raw) = value.as_str() else {
        return TaskStatus::default();
    };
    match raw.trim().to_lowercase().as_str() {
        "to do" | "todo" => TaskStatus::Todo,
        "in progress" | "in-progress" | "in_progress" => TaskStatus::InProgress,
        "done" | "completed" | "finished" => TaskStatus::Done,
        _ => TaskStatus::default(),
    }
}

/// Tags given as one comma-delimited string are split and trimmed; a
/// sequence passes through with its string elements kept in order.
fn coerce_tags(value: &Value) -> Vec<String> {
    match value {
        Value::String(joined) => joined
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect(),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(String::from)
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_comma_delimited_tags_are_split() {
        let task = normalize_fragment(&json!({"title": "t", "tags": "work, client"})).unwrap();
        assert_eq!(task.tags, vec!["work", "client"]);
    }

    #[test]
    fn test_tag_sequence_passes_through() {
        let task =
            normalize_fragment(&json!({"title": "t", "tags": ["a", "b", "a"]})).unwrap();
        assert_eq!(task.tags, vec!["a", "b", "a"]);
    }

    #[test]
    fn test_priority_synonyms() {
        let task = normalize_fragment(&json!({"title": "t", "priority": "critical"})).unwrap();
        assert_eq!(task.priority, Priority::Urgent);

        let task = normalize_fragment(&json!({"title": "t", "priority": "Normal"})).unwrap();
        assert_eq!(task.priority, Priority::Medium);
    }

    #[test]
    fn test_unknown_priority_defaults_to_medium() {
        let task =
            normalize_fragment(&json!({"title": "t", "priority": "unknown-value"})).unwrap();
        assert_eq!(task.priority, Priority::Medium);
    }

    #[test]
    fn test_status_synonyms() {
        let task = normalize_fragment(&json!({"title": "t", "status": "in-progress"})).unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);

        let task = normalize_fragment(&json!({"title": "t", "status": "Finished"})).unwrap();
        assert_eq!(task.status, TaskStatus::Done);
    }

    #[test]
    fn test_unknown_status_defaults_to_todo() {
        let task = normalize_fragment(&json!({"title": "t", "status": "someday"})).unwrap();
        assert_eq!(task.status, TaskStatus::Todo);
    }

    #[test]
    fn test_missing_title_rejects() {
        assert_eq!(
            normalize_fragment(&json!({"description": "no title"})),
            Err(RejectReason::MissingTitle)
        );
        assert_eq!(
            normalize_fragment(&json!({"title": "   "})),
            Err(RejectReason::MissingTitle)
        );
    }

    #[test]
    fn test_non_object_rejects() {
        assert_eq!(
            normalize_fragment(&json!("just a string")),
            Err(RejectReason::NotAnObject)
        );
        assert_eq!(normalize_fragment(&json!(null)), Err(RejectReason::NotAnObject));
    }

    #[test]
    fn test_id_coercion() {
        let task = normalize_fragment(&json!({"title": "t", "id": 3})).unwrap();
        assert_eq!(task.id, Some(3));

        let task = normalize_fragment(&json!({"title": "t", "id": "17"})).unwrap();
        assert_eq!(task.id, Some(17));

        let task = normalize_fragment(&json!({"title": "t", "id": "not-a-number"})).unwrap();
        assert_eq!(task.id, None);
    }

    #[test]
    fn test_created_at_passes_through_and_stays_unset() {
        let task =
            normalize_fragment(&json!({"title": "t", "created_at": "2026-01-01T00:00:00Z"}))
                .unwrap();
        assert_eq!(task.created_at.as_deref(), Some("2026-01-01T00:00:00Z"));

        // Left unset: the store fills it in at commit, restoring the old
        // timestamp for a matching id first.
        let task = normalize_fragment(&json!({"title": "t"})).unwrap();
        assert!(task.created_at.is_none());
    }

    #[test]
    fn test_full_fragment() {
        let task = normalize_fragment(&json!({
            "title": "Ship release",
            "description": "cut the 1.0 tag",
            "priority": "HIGH",
            "due_date": "2026-08-20",
            "status": "in progress",
            "tags": "release, build"
        }))
        .unwrap();

        assert_eq!(task.title, "Ship release");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.due_date.as_deref(), Some("2026-08-20"));
        assert_eq!(task.tags, vec!["release", "build"]);
    }
}
