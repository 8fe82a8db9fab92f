//! Property tests for id assignment in the task store.
//!
//! Ids handed out by the store must be unique and strictly increasing in
//! assignment order, no matter how adds, deletes, and wholesale list
//! replacements interleave.

use proptest::prelude::*;
use taskpilot_core::{Task, TaskStore};

#[derive(Debug, Clone)]
enum Op {
    Add,
    Delete(u64),
    Replace(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Add),
        2 => (1u64..64).prop_map(Op::Delete),
        1 => (0usize..4).prop_map(Op::Replace),
    ]
}

proptest! {
    #[test]
    fn assigned_ids_are_unique_and_strictly_increasing(ops in prop::collection::vec(op_strategy(), 1..64)) {
        let mut store = TaskStore::new();
        let mut assigned = Vec::new();

        for op in ops {
            match op {
                Op::Add => {
                    let task = store.add(Task::new("task"));
                    assigned.push(task.id.expect("add must assign an id"));
                }
                Op::Delete(id) => {
                    store.delete(id);
                }
                Op::Replace(count) => {
                    let incoming = (0..count).map(|_| Task::new("replacement")).collect();
                    let ids: Vec<u64> = store
                        .replace_all(incoming)
                        .iter()
                        .map(|t| t.id.expect("replace_all must assign ids"))
                        .collect();
                    assigned.extend(ids);
                }
            }
        }

        // Strictly increasing in assignment order implies uniqueness.
        for pair in assigned.windows(2) {
            prop_assert!(pair[0] < pair[1], "ids not strictly increasing: {:?}", assigned);
        }

        // And every id still in the store is unique.
        let mut live: Vec<u64> = store.list().iter().filter_map(|t| t.id).collect();
        let total = live.len();
        live.sort_unstable();
        live.dedup();
        prop_assert_eq!(live.len(), total);
    }
}
