//! Diagnostics for task-sequence invariants.

use std::collections::HashSet;

use crate::core::types::Task;

/// Report invariant violations without failing:
/// - Duplicate ids. Reachable through the length-based id policy whenever a
///   delete is followed by a create, so this is a diagnostic, not an error.
///
/// An empty vec means the sequence is clean.
pub fn validate_invariants(tasks: &[Task]) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (position, task) in tasks.iter().enumerate() {
        if !seen.insert(task.id) {
            errors.push(format!(
                "duplicate id {} at position {}",
                task.id, position
            ));
        }
    }

    errors
}
