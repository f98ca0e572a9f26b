use std::sync::Arc;
use std::time::{Duration, Instant};

use indexmap::IndexMap;
use serde_json::Value;

use crate::foundation::ids::{ContinuationId, ViewId};
use crate::view::events::{EventName, ResumePoint, Suspendable};

/// A suspended handler waiting for its follow-up request.
#[derive(Clone)]
pub(crate) struct Continuation {
    pub(crate) handler: Arc<dyn Suspendable>,
    pub(crate) next: ResumePoint,
    pub(crate) yielded: Value,
    pub(crate) view: ViewId,
    pub(crate) event: EventName,
    pub(crate) created: Instant,
}

/// In-flight continuations in creation order, bounded by age and count.
#[derive(Default)]
pub(crate) struct ContinuationTable {
    entries: IndexMap<ContinuationId, Continuation>,
}

impl ContinuationTable {
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn contains(&self, id: &ContinuationId) -> bool {
        self.entries.contains_key(id)
    }

    pub(crate) fn insert(
        &mut self,
        id: ContinuationId,
        entry: Continuation,
        ttl: Duration,
        max_entries: usize,
    ) {
        self.expire(entry.created, ttl);
        self.entries.insert(id, entry);
        while self.entries.len() > max_entries {
            if let Some((old, c)) = self.entries.shift_remove_index(0) {
                tracing::warn!(
                    continuation = %old,
                    view = %c.view,
                    event = %c.event,
                    "continuation table full, evicting oldest"
                );
            }
        }
    }

    /// Remove and return `id` unless it has outlived `ttl`.
    pub(crate) fn take(
        &mut self,
        id: &ContinuationId,
        now: Instant,
        ttl: Duration,
    ) -> Option<Continuation> {
        self.expire(now, ttl);
        self.entries.shift_remove(id)
    }

    /// Drop everything older than `ttl` as of `now`.
    pub(crate) fn expire(&mut self, now: Instant, ttl: Duration) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|_, c| now.saturating_duration_since(c.created) < ttl);
        let expired = before - self.entries.len();
        if expired > 0 {
            tracing::warn!(expired, "expired stale continuations");
        }
        expired
    }

    /// Forget whatever `view`/`event` left suspended.
    pub(crate) fn discard_binding(&mut self, view: ViewId, event: EventName) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|_, c| !(c.view == view && c.event == event));
        before - self.entries.len()
    }

    pub(crate) fn discard_view(&mut self, view: ViewId) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, c| c.view != view);
        before - self.entries.len()
    }

    /// Id of the continuation pending for `view`, if any.
    pub(crate) fn pending_for(&self, view: ViewId) -> Option<&ContinuationId> {
        self.entries
            .iter()
            .rev()
            .find(|(_, c)| c.view == view)
            .map(|(id, _)| id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/continuation.rs"]
mod tests;
