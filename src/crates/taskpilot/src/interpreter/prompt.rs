//! Prompt construction for the LLM interpreter.

/// Build the interpretation prompt: the current task list as JSON, the
/// user's command, the six possible actions, and the response shape.
pub fn build_prompt(command: &str, tasks_json: &str) -> String {
    format!(
        r#"You are TaskPilot, an AI assistant that manages tasks.

Current task list:
```json
{tasks_json}
```

User command: "{command}"

Analyze this command and determine what action to take. Possible actions:
1. ADD - Add a new task
2. UPDATE - Update an existing task
3. DELETE - Delete a task
4. LIST - List tasks with optional filtering/sorting
5. PRIORITIZE - Reorganize tasks by priority
6. SCHEDULE - Suggest optimal scheduling

Return your response as a JSON object with these fields:
- action: The action to take (ADD, UPDATE, DELETE, LIST, PRIORITIZE, SCHEDULE)
- tasks: The updated task list (for ADD, UPDATE, DELETE) or filtered/sorted tasks (for LIST, PRIORITIZE, SCHEDULE)
- message: A human-readable explanation of what you did

For new tasks, extract as many details as possible (title, description, priority, due_date, tags).
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_command_and_tasks() {
        let prompt = build_prompt("add buy milk", "[{\"id\": 1}]");
        assert!(prompt.contains("User command: \"add buy milk\""));
        assert!(prompt.contains("[{\"id\": 1}]"));
    }

    #[test]
    fn test_prompt_enumerates_all_actions() {
        let prompt = build_prompt("anything", "[]");
        for action in ["ADD", "UPDATE", "DELETE", "LIST", "PRIORITIZE", "SCHEDULE"] {
            assert!(prompt.contains(action), "missing action {action}");
        }
    }
}
