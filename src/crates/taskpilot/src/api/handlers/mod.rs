//! API endpoint handlers.

mod health;
mod process;
mod tasks;

pub use health::{health, health_ollama};
pub use process::process_command;
pub use tasks::{create_task, delete_task, get_task, list_tasks, update_task};
