//! In-memory task store.
//!
//! Owns the authoritative task list and the next-identifier counter. The
//! counter only ever increases; identifiers are never reused, even when the
//! whole list is replaced.

use crate::task::{now_timestamp, Task};
use tracing::debug;

/// The authoritative in-memory task list.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Create an empty store. Identifier assignment starts at 1.
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Add a task. Assigns a fresh id if the task has none, stamps
    /// `created_at` if unset, and appends. Returns the stored task.
    pub fn add(&mut self, mut task: Task) -> Task {
        match task.id {
            None => {
                task.id = Some(self.next_id);
                self.next_id += 1;
            }
            // Keep the counter ahead of any explicitly supplied id so
            // later assignments stay unique.
            Some(id) => self.next_id = self.next_id.max(id + 1),
        }
        if task.created_at.is_none() {
            task.created_at = Some(now_timestamp());
        }
        self.tasks.push(task.clone());
        task
    }

    /// Look up a task by id.
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == Some(id))
    }

    /// All tasks, in insertion order.
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    /// A by-value copy of the current list, for handing to interpreters.
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// Number of tasks currently stored.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Overwrite the task with the given id in place. The replacement is
    /// forced to keep the id, and inherits the old `created_at` when it
    /// carries none. Returns `None` when no task matches.
    pub fn update(&mut self, id: u64, mut task: Task) -> Option<Task> {
        let slot = self.tasks.iter_mut().find(|t| t.id == Some(id))?;
        task.id = Some(id);
        if task.created_at.is_none() {
            task.created_at = slot.created_at.clone();
        }
        *slot = task.clone();
        Some(task)
    }

    /// Remove the first task matching the id. Returns whether one was
    /// removed.
    pub fn delete(&mut self, id: u64) -> bool {
        match self.tasks.iter().position(|t| t.id == Some(id)) {
            Some(index) => {
                self.tasks.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace the entire list. The id counter is NOT reset: incoming
    /// tasks without an id are assigned fresh ones from the still-
    /// incrementing counter. An incoming task that shares an id with an
    /// outgoing task and lacks `created_at` inherits the old value; any
    /// still-unset `created_at` is stamped now. Tasks absent from the
    /// incoming list are gone.
    pub fn replace_all(&mut self, tasks: Vec<Task>) -> &[Task] {
        let mut incoming = tasks;
        for task in &mut incoming {
            match task.id {
                None => {
                    task.id = Some(self.next_id);
                    self.next_id += 1;
                }
                Some(id) => {
                    self.next_id = self.next_id.max(id + 1);
                    if task.created_at.is_none() {
                        if let Some(old) = self.tasks.iter().find(|t| t.id == Some(id)) {
                            task.created_at = old.created_at.clone();
                        }
                    }
                }
            }
            if task.created_at.is_none() {
                task.created_at = Some(now_timestamp());
            }
        }
        debug!(
            "replacing task list: {} -> {} tasks",
            self.tasks.len(),
            incoming.len()
        );
        self.tasks = incoming;
        &self.tasks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Priority;

    #[test]
    fn test_add_assigns_sequential_ids() {
        let mut store = TaskStore::new();
        let a = store.add(Task::new("first"));
        let b = store.add(Task::new("second"));
        assert_eq!(a.id, Some(1));
        assert_eq!(b.id, Some(2));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_add_with_explicit_id_bumps_counter() {
        let mut store = TaskStore::new();
        let mut task = Task::new("explicit");
        task.id = Some(10);
        store.add(task);

        let next = store.add(Task::new("assigned"));
        assert_eq!(next.id, Some(11));
    }

    #[test]
    fn test_get_by_id() {
        let mut store = TaskStore::new();
        let added = store.add(Task::new("findable"));
        let id = added.id.unwrap();

        assert_eq!(store.get(id).map(|t| t.title.as_str()), Some("findable"));
        assert!(store.get(999).is_none());
    }

    #[test]
    fn test_update_preserves_id_and_created_at() {
        let mut store = TaskStore::new();
        let original = store.add(Task::new("before"));
        let id = original.id.unwrap();
        let original_created = original.created_at.clone();

        let mut replacement = Task::new("after").with_priority(Priority::High);
        replacement.id = Some(42); // forced back to the addressed id
        replacement.created_at = None;

        let updated = store.update(id, replacement).unwrap();
        assert_eq!(updated.id, Some(id));
        assert_eq!(updated.created_at, original_created);
        assert_eq!(updated.title, "after");
        assert_eq!(store.get(id).unwrap().priority, Priority::High);
    }

    #[test]
    fn test_update_unknown_id_is_none() {
        let mut store = TaskStore::new();
        assert!(store.update(7, Task::new("nobody")).is_none());
    }

    #[test]
    fn test_delete() {
        let mut store = TaskStore::new();
        let id = store.add(Task::new("doomed")).id.unwrap();
        assert!(store.delete(id));
        assert!(!store.delete(id));
        assert!(store.is_empty());
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut store = TaskStore::new();
        let id = store.add(Task::new("one")).id.unwrap();
        store.delete(id);
        let next = store.add(Task::new("two"));
        assert_eq!(next.id, Some(id + 1));
    }

    #[test]
    fn test_replace_all_keeps_counter_high_water_mark() {
        let mut store = TaskStore::new();
        store.add(Task::new("a"));
        store.add(Task::new("b"));
        store.add(Task::new("c"));

        store.replace_all(Vec::new());
        assert!(store.is_empty());

        // Retired ids must never come back.
        let next = store.add(Task::new("d"));
        assert_eq!(next.id, Some(4));
    }

    #[test]
    fn test_replace_all_assigns_fresh_ids() {
        let mut store = TaskStore::new();
        store.add(Task::new("old"));

        let replaced = store.replace_all(vec![Task::new("new one"), Task::new("new two")]);
        let ids: Vec<_> = replaced.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![Some(2), Some(3)]);
    }

    #[test]
    fn test_replace_all_preserves_created_at_by_id() {
        let mut store = TaskStore::new();
        let original = store.add(Task::new("kept"));
        let id = original.id.unwrap();
        let original_created = original.created_at.clone();

        let mut incoming = Task::new("kept, renamed");
        incoming.id = Some(id);
        incoming.created_at = None;

        store.replace_all(vec![incoming]);
        assert_eq!(store.get(id).unwrap().created_at, original_created);
    }

    #[test]
    fn test_replace_all_stamps_missing_created_at() {
        let mut store = TaskStore::new();
        let mut incoming = Task::new("fresh");
        incoming.created_at = None;

        store.replace_all(vec![incoming]);
        assert!(store.list()[0].created_at.is_some());
    }
}
