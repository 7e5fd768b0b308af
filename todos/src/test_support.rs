//! Test-only helpers for constructing task sequences.

use crate::core::types::Task;

/// Create a task with explicit id and text.
pub fn task(id: i64, text: &str) -> Task {
    Task {
        id,
        text: text.to_string(),
    }
}

/// Create a sequence of sequentially numbered tasks, one per text.
pub fn numbered(texts: &[&str]) -> Vec<Task> {
    texts
        .iter()
        .enumerate()
        .map(|(id, text)| task(id as i64, text))
        .collect()
}
