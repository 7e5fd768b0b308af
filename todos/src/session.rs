//! Controller state mediating between the UI surface and the reducer.
//!
//! The session owns the authoritative task sequence plus the transient
//! input state the page keeps between renders: the new-task draft, the
//! edit-field contents, and the id currently being edited. Transient state
//! is presentation state; it is discarded freely and never authoritative.

use tracing::{debug, warn};

use crate::core::invariants::validate_invariants;
use crate::core::reducer::apply_with_summary;
use crate::core::types::{ApplySummary, Intent, Task};

/// Owned application state: the task sequence and transient input fields.
///
/// All mutation goes through [`crate::core::reducer::apply_with_summary`];
/// the session only decides which intent to dispatch and how the transient
/// fields react.
#[derive(Debug, Clone, Default)]
pub struct Session {
    tasks: Vec<Task>,
    draft: String,
    edit_text: String,
    editing: Option<i64>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn edit_text(&self) -> &str {
        &self.edit_text
    }

    /// Id of the task being edited, or `None` when no edit is open.
    pub fn editing(&self) -> Option<i64> {
        self.editing
    }

    /// Replace the new-task draft. Transient only.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Replace the edit-field contents. Transient only.
    pub fn set_edit_text(&mut self, text: impl Into<String>) {
        self.edit_text = text.into();
    }

    /// Mark `id` as being edited and pre-fill the edit field from the first
    /// task with that id (empty when absent). Does not touch the sequence.
    pub fn begin_edit(&mut self, id: i64) {
        self.editing = Some(id);
        self.edit_text = self
            .tasks
            .iter()
            .find(|task| task.id == id)
            .map(|task| task.text.clone())
            .unwrap_or_default();
    }

    /// Dispatch a create with the current draft, then clear the draft.
    ///
    /// An empty draft is valid text and is dispatched as-is.
    pub fn submit_create(&mut self) -> ApplySummary {
        let text = std::mem::take(&mut self.draft);
        self.dispatch(Intent::Create { text })
    }

    /// Dispatch an update for the task being edited, then clear the marker
    /// and the edit field.
    ///
    /// Without an open edit this changes nothing. A marker whose task was
    /// deleted meanwhile dispatches an update that matches nothing; the
    /// marker and field are still cleared so the form closes.
    pub fn submit_update(&mut self) -> ApplySummary {
        let Some(id) = self.editing.take() else {
            return ApplySummary::default();
        };
        let text = std::mem::take(&mut self.edit_text);
        self.dispatch(Intent::Update { id, text })
    }

    /// Dispatch a delete for `id`.
    ///
    /// The editing marker is left untouched even when the deleted task is
    /// the one being edited; the dangling marker resolves through the
    /// silent-no-op path on the next [`Session::submit_update`].
    pub fn request_delete(&mut self, id: i64) -> ApplySummary {
        self.dispatch(Intent::Delete { id })
    }

    fn dispatch(&mut self, intent: Intent) -> ApplySummary {
        let (next, summary) = apply_with_summary(&self.tasks, &intent);
        debug!(?intent, ?summary, "intent applied");
        self.tasks = next;

        for violation in validate_invariants(&self.tasks) {
            warn!(%violation, "task sequence invariant violated");
        }

        summary
    }
}
