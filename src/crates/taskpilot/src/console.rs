//! Interactive console.
//!
//! A line-based REPL over the command engine: every line the user types
//! runs through the same interpretation pipeline as the HTTP endpoint.

use crate::engine::CommandEngine;
use std::io::Write;
use std::sync::Arc;
use taskpilot_core::{Priority, Task, TaskStatus};
use tokio::io::{AsyncBufReadExt, BufReader};

const DIVIDER: &str = "----------------------------------------";

/// Run the console loop until the user exits or stdin closes.
pub async fn run(engine: Arc<CommandEngine>) -> anyhow::Result<()> {
    println!("TaskPilot - AI-Powered Task Management");
    println!("{DIVIDER}");
    println!("Type your commands in natural language, or 'exit' to quit.");
    println!("Examples:");
    println!("  - Add a task to call mom tomorrow");
    println!("  - Show all my high priority tasks");
    println!("  - Mark the grocery task as done");
    println!("  - Prioritize my tasks");
    println!("{DIVIDER}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("\n> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        if matches!(command.to_lowercase().as_str(), "exit" | "quit" | "q") {
            break;
        }

        let outcome = engine.process(command).await;

        println!("\n{}", outcome.message);
        if !outcome.tasks.is_empty() {
            println!("\nTasks:");
            for task in &outcome.tasks {
                print_task(task);
            }
        }
        println!("{DIVIDER}");
    }

    Ok(())
}

fn print_task(task: &Task) {
    let status_marker = match task.status {
        TaskStatus::Todo => "[ ]",
        TaskStatus::InProgress => "[~]",
        TaskStatus::Done => "[x]",
    };
    let priority_marker = match task.priority {
        Priority::Urgent => "!!!",
        Priority::High => " !!",
        Priority::Medium => "  !",
        Priority::Low => "  .",
    };
    let due = task
        .due_date
        .as_deref()
        .map(|d| format!(" (Due: {d})"))
        .unwrap_or_default();
    let tags = if task.tags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", task.tags.join(", "))
    };

    println!(
        "{status_marker} {priority_marker} {}: {}{due}{tags}",
        task.id.unwrap_or_default(),
        task.title
    );
    if let Some(description) = &task.description {
        println!("      {description}");
    }
}
