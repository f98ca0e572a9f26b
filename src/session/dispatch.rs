use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;

use crate::foundation::error::{Ui4Error, Ui4Result};
use crate::foundation::ids::{ContinuationId, ViewId};
use crate::render::Patch;
use crate::session::Session;
use crate::session::continuation::Continuation;
use crate::view::events::{
    Binding, BindingOptions, EventContext, EventName, Handler, ResumePoint, Step, Suspendable,
};

impl Session {
    /// Bind `handler` to `event` on `view`, replacing any earlier binding.
    pub fn on(
        &mut self,
        view: ViewId,
        event: EventName,
        handler: impl Into<Handler>,
        options: BindingOptions,
    ) -> Ui4Result<()> {
        let binding = Binding {
            handler: handler.into(),
            options,
        };
        self.view_mut(view)?.events.bind(event, binding);
        self.mark_dirty(view);
        Ok(())
    }

    /// Like [`Session::on`] with the event given by name.
    pub fn on_named(
        &mut self,
        view: ViewId,
        event: &str,
        handler: impl Into<Handler>,
        options: BindingOptions,
    ) -> Ui4Result<()> {
        let event = EventName::parse(event)?;
        self.on(view, event, handler, options)
    }

    /// Unbind `event`, dropping any continuation it left behind.
    pub fn remove_event(&mut self, view: ViewId, event: EventName) -> Ui4Result<bool> {
        let removed = self.view_mut(view)?.events.unbind(event);
        if removed {
            self.continuations.discard_binding(view, event);
            self.mark_dirty(view);
        }
        Ok(removed)
    }

    pub fn pending_continuations(&self) -> usize {
        self.continuations.len()
    }

    /// Run the handler bound to `event` on `view` and render what changed.
    ///
    /// A suspendable handler runs to its first suspension point; the patch
    /// then carries a continuation id for [`Session::resume`]. Dispatching
    /// again discards that binding's earlier continuation.
    #[tracing::instrument(skip(self, value))]
    pub fn dispatch(&mut self, view: ViewId, event: EventName, value: Value) -> Ui4Result<Patch> {
        let binding = self.view(view)?.events.get(event).cloned();
        if self.continuations.discard_binding(view, event) > 0 {
            tracing::debug!("discarded in-flight continuation");
            self.mark_dirty(view);
        }
        let Some(binding) = binding else {
            tracing::debug!("no handler bound");
            return self.render_updates();
        };

        let mut continuation = None;
        match binding.handler {
            Handler::Once(f) => {
                let mut ctx = EventContext {
                    session: self,
                    view,
                    event,
                    value,
                };
                f(&mut ctx)?;
            }
            Handler::Suspendable(handler) => {
                continuation = self.step(handler, view, event, ResumePoint::START, value)?;
            }
        }

        let mut patch = self.render_updates()?;
        patch.continuation = continuation;
        Ok(patch)
    }

    /// Resolve wire ids and event names, as received over HTTP.
    pub fn dispatch_wire(&mut self, view: &str, event: &str, value: Value) -> Ui4Result<Patch> {
        let view = self.lookup(view)?;
        let event = EventName::parse(event)?;
        self.dispatch(view, event, value)
    }

    /// Continue a suspended handler where it left off.
    #[tracing::instrument(skip(self))]
    pub fn resume(&mut self, id: &ContinuationId) -> Ui4Result<Patch> {
        let ttl = self.opts().continuation_ttl;
        let entry = self
            .continuations
            .take(id, Instant::now(), ttl)
            .ok_or_else(|| Ui4Error::ContinuationNotFound { id: id.to_string() })?;
        self.view(entry.view)?;
        self.mark_dirty(entry.view);

        let continuation = self.step(
            entry.handler,
            entry.view,
            entry.event,
            entry.next,
            entry.yielded,
        )?;
        let mut patch = self.render_updates()?;
        patch.continuation = continuation;
        Ok(patch)
    }

    pub fn resume_wire(&mut self, id: &str) -> Ui4Result<Patch> {
        self.resume(&ContinuationId(id.to_owned()))
    }

    /// Run one stage; park the handler again if it suspends.
    fn step(
        &mut self,
        handler: Arc<dyn Suspendable>,
        view: ViewId,
        event: EventName,
        at: ResumePoint,
        value: Value,
    ) -> Ui4Result<Option<ContinuationId>> {
        let step = {
            let mut ctx = EventContext {
                session: self,
                view,
                event,
                value,
            };
            handler.resume(&mut ctx, at)?
        };
        match step {
            Step::Complete => {
                tracing::debug!(view = %view, event = %event, "handler completed");
                Ok(None)
            }
            Step::Suspend { next, yielded } => {
                let id = ContinuationId::fresh();
                tracing::debug!(view = %view, event = %event, continuation = %id, "handler suspended");
                let opts = self.opts();
                let (ttl, max) = (opts.continuation_ttl, opts.max_continuations);
                self.continuations.insert(
                    id.clone(),
                    Continuation {
                        handler,
                        next,
                        yielded,
                        view,
                        event,
                        created: Instant::now(),
                    },
                    ttl,
                    max,
                );
                self.mark_dirty(view);
                Ok(Some(id))
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/dispatch.rs"]
mod tests;
