//! Shared application state for the UI server.

use std::sync::Arc;

use tokio::sync::{RwLock, broadcast};

use todos::core::types::ApplySummary;
use todos::session::Session;

/// Events broadcast to SSE clients when the task list changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEvent {
    TaskCreated { id: i64 },
    TasksUpdated { ids: Vec<i64> },
    TasksRemoved { ids: Vec<i64> },
}

impl ChangeEvent {
    /// Map a reducer summary to broadcast events. No-op steps map to none,
    /// so silent no-ops never wake subscribers.
    pub fn from_summary(summary: &ApplySummary) -> Vec<ChangeEvent> {
        let mut events = Vec::new();
        if let Some(id) = summary.created {
            events.push(ChangeEvent::TaskCreated { id });
        }
        if !summary.updated.is_empty() {
            events.push(ChangeEvent::TasksUpdated {
                ids: summary.updated.clone(),
            });
        }
        if !summary.removed.is_empty() {
            events.push(ChangeEvent::TasksRemoved {
                ids: summary.removed.clone(),
            });
        }
        events
    }
}

/// Shared state accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The single session. Handlers serialize through the write lock, so
    /// exactly one intent is in flight at a time.
    pub session: Arc<RwLock<Session>>,
    /// Broadcast sender for change events.
    pub event_tx: Arc<broadcast::Sender<ChangeEvent>>,
}

impl AppState {
    pub fn new() -> Self {
        let (event_tx, _) = broadcast::channel(64);
        Self {
            session: Arc::new(RwLock::new(Session::new())),
            event_tx: Arc::new(event_tx),
        }
    }

    /// Broadcast every event derived from `summary` to SSE subscribers.
    pub fn broadcast(&self, summary: &ApplySummary) {
        for event in ChangeEvent::from_summary(summary) {
            let _ = self.event_tx.send(event);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
