//! Store-owned state transitions for the task sequence.

use crate::core::types::{ApplySummary, Intent, Task};

/// Compute the next task sequence from `tasks` and `intent`.
///
/// Total and pure: no failure modes, no side effects. An update or delete
/// that matches no task returns the input sequence unchanged rather than
/// reporting an error.
pub fn apply(tasks: &[Task], intent: &Intent) -> Vec<Task> {
    apply_with_summary(tasks, intent).0
}

/// Like [`apply`], additionally reporting which ids the step touched.
///
/// A create assigns `id = tasks.len()`. Ids are therefore reused after a
/// delete, and update/delete operate on every match, not just the first.
pub fn apply_with_summary(tasks: &[Task], intent: &Intent) -> (Vec<Task>, ApplySummary) {
    let mut summary = ApplySummary::default();

    let next = match intent {
        Intent::Create { text } => {
            let id = tasks.len() as i64;
            summary.created = Some(id);
            let mut next = tasks.to_vec();
            next.push(Task {
                id,
                text: text.clone(),
            });
            next
        }
        Intent::Update { id, text } => {
            let mut next = Vec::with_capacity(tasks.len());
            for task in tasks {
                if task.id == *id {
                    summary.updated.push(task.id);
                    next.push(Task {
                        id: task.id,
                        text: text.clone(),
                    });
                } else {
                    next.push(task.clone());
                }
            }
            next
        }
        Intent::Delete { id } => {
            let mut next = Vec::with_capacity(tasks.len());
            for task in tasks {
                if task.id == *id {
                    summary.removed.push(task.id);
                } else {
                    next.push(task.clone());
                }
            }
            next
        }
    };

    (next, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{numbered, task};

    #[test]
    fn create_appends_with_length_id() {
        let tasks = numbered(&["buy milk"]);
        let (next, summary) = apply_with_summary(
            &tasks,
            &Intent::Create {
                text: "walk dog".to_string(),
            },
        );

        assert_eq!(next, [task(0, "buy milk"), task(1, "walk dog")]);
        assert_eq!(summary.created, Some(1));
        assert!(summary.updated.is_empty());
    }

    #[test]
    fn create_accepts_empty_text() {
        let next = apply(
            &[],
            &Intent::Create {
                text: String::new(),
            },
        );
        assert_eq!(next, [task(0, "")]);
    }

    #[test]
    fn update_replaces_matching_text_only() {
        let tasks = numbered(&["buy milk", "walk dog"]);
        let (next, summary) = apply_with_summary(
            &tasks,
            &Intent::Update {
                id: 1,
                text: "walk cat".to_string(),
            },
        );

        assert_eq!(next, [task(0, "buy milk"), task(1, "walk cat")]);
        assert_eq!(summary.updated, vec![1]);
    }

    /// Absent ids are silent no-ops, not errors.
    #[test]
    fn update_missing_id_leaves_sequence_unchanged() {
        let tasks = numbered(&["buy milk"]);
        let (next, summary) = apply_with_summary(
            &tasks,
            &Intent::Update {
                id: 7,
                text: "x".to_string(),
            },
        );

        assert_eq!(next, tasks);
        assert!(summary.is_noop());
    }

    #[test]
    fn delete_removes_matching_and_preserves_order() {
        let tasks = numbered(&["a", "b", "c"]);
        let (next, summary) = apply_with_summary(&tasks, &Intent::Delete { id: 1 });

        assert_eq!(next, [task(0, "a"), task(2, "c")]);
        assert_eq!(summary.removed, vec![1]);
    }

    #[test]
    fn delete_missing_id_leaves_sequence_unchanged() {
        let tasks = numbered(&["a"]);
        let (next, summary) = apply_with_summary(&tasks, &Intent::Delete { id: 7 });

        assert_eq!(next, tasks);
        assert!(summary.is_noop());
    }

    #[test]
    fn delete_is_idempotent() {
        let tasks = numbered(&["a", "b"]);
        let once = apply(&tasks, &Intent::Delete { id: 0 });
        let twice = apply(&once, &Intent::Delete { id: 0 });
        assert_eq!(once, twice);
    }

    /// The length-based id policy reuses ids after a delete. This collision
    /// is observable behavior and must stay reproducible.
    #[test]
    fn delete_then_create_reuses_a_live_id() {
        let mut tasks = apply(
            &[],
            &Intent::Create {
                text: "buy milk".to_string(),
            },
        );
        tasks = apply(
            &tasks,
            &Intent::Create {
                text: "walk dog".to_string(),
            },
        );
        tasks = apply(&tasks, &Intent::Delete { id: 0 });
        tasks = apply(
            &tasks,
            &Intent::Create {
                text: "read book".to_string(),
            },
        );

        assert_eq!(tasks, [task(1, "walk dog"), task(1, "read book")]);
    }

    /// Update maps over all matches, so a shared id touches every row.
    #[test]
    fn update_touches_every_task_sharing_the_id() {
        let tasks = vec![task(1, "walk dog"), task(1, "read book")];
        let (next, summary) = apply_with_summary(
            &tasks,
            &Intent::Update {
                id: 1,
                text: "read two books".to_string(),
            },
        );

        assert_eq!(next, [task(1, "read two books"), task(1, "read two books")]);
        assert_eq!(summary.updated, vec![1, 1]);
    }

    /// Delete filters all matches, so a shared id removes every row.
    #[test]
    fn delete_removes_every_task_sharing_the_id() {
        let tasks = vec![task(1, "walk dog"), task(1, "read book"), task(2, "rest")];
        let (next, summary) = apply_with_summary(&tasks, &Intent::Delete { id: 1 });

        assert_eq!(next, [task(2, "rest")]);
        assert_eq!(summary.removed, vec![1, 1]);
    }
}
