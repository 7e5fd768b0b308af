//! Shared deterministic types for the task store.
//!
//! These types define stable contracts between core components and the UI
//! surface. They must not depend on external state and must serialize the
//! same way across runs.

use serde::{Deserialize, Serialize};

/// A single todo entry, the sole entity the store manages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Assigned at creation time as the sequence length. Not guaranteed
    /// unique after a delete-then-create; see [`crate::core::invariants`].
    pub id: i64,
    pub text: String,
}

/// A requested state transition, consumed by [`crate::core::reducer::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Intent {
    /// Append a new task at the end of the sequence.
    Create { text: String },
    /// Replace the text of every task whose id matches.
    Update { id: i64, text: String },
    /// Remove every task whose id matches.
    Delete { id: i64 },
}

/// Summary of what one reducer application changed.
///
/// Lists are recorded in sequence order to keep serialized outputs stable.
/// An intent that matched nothing leaves every field empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplySummary {
    /// Id assigned by a create.
    pub created: Option<i64>,
    /// Ids whose text was replaced.
    pub updated: Vec<i64>,
    /// Ids removed from the sequence.
    pub removed: Vec<i64>,
}

impl ApplySummary {
    /// True if the step changed nothing.
    pub fn is_noop(&self) -> bool {
        self.created.is_none() && self.updated.is_empty() && self.removed.is_empty()
    }
}
