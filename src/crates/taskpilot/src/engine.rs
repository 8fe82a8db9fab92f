//! Command engine: the orchestrator of the interpretation pipeline.
//!
//! Per command: try the LLM interpreter, fall back to the deterministic
//! keyword interpreter on any failure, normalize the winning result's
//! task fragments, and commit them to the store as a full replacement.

use crate::interpreter::{fallback, LlmInterpreter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use taskpilot_core::{normalize_fragment, Task, TaskStore};
use taskpilot_llm::TextGenerator;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// What a processed command returns: always a message plus the
/// post-commit task snapshot, never a raw error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandOutcome {
    pub success: bool,
    pub message: String,
    pub tasks: Vec<Task>,
}

/// Processes natural-language commands against a shared task store.
pub struct CommandEngine {
    store: Arc<Mutex<TaskStore>>,
    interpreter: LlmInterpreter,
}

impl CommandEngine {
    /// Create an engine over a shared store and a text generator.
    pub fn new(store: Arc<Mutex<TaskStore>>, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            store,
            interpreter: LlmInterpreter::new(generator),
        }
    }

    /// The shared store handle.
    pub fn store(&self) -> Arc<Mutex<TaskStore>> {
        self.store.clone()
    }

    /// Process one command to completion.
    ///
    /// The store lock is held across the whole interpret→normalize→commit
    /// sequence, so concurrent commands are serialized rather than racing
    /// on the replacement write. Fragments the normalizer rejects are
    /// dropped and logged; they never abort the batch.
    pub async fn process(&self, command: &str) -> CommandOutcome {
        let mut store = self.store.lock().await;
        let snapshot = store.snapshot();

        let interpretation = match self.interpreter.interpret(command, &snapshot).await {
            Ok(interpretation) => {
                debug!("model interpreted command as {}", interpretation.action);
                interpretation
            }
            Err(err) => {
                warn!("language model interpretation failed, using fallback: {err}");
                fallback::interpret(command, &snapshot)
            }
        };

        let mut accepted = Vec::with_capacity(interpretation.fragments.len());
        for fragment in &interpretation.fragments {
            match normalize_fragment(fragment) {
                Ok(task) => accepted.push(task),
                Err(reason) => warn!("dropping task fragment: {reason}"),
            }
        }

        store.replace_all(accepted);

        CommandOutcome {
            success: true,
            message: interpretation.message,
            tasks: store.snapshot(),
        }
    }
}
