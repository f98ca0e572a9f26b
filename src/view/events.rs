use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::foundation::error::{Ui4Error, Ui4Result};
use crate::foundation::ids::ViewId;
use crate::foundation::num::fmt_num;
use crate::session::Session;

/// Browser events a view can bind. Declaration order is trigger order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventName {
    Change,
    Click,
    Input,
    Keydown,
    Keyup,
    Load,
    Submit,
}

impl EventName {
    pub const ALL: [Self; 7] = [
        Self::Change,
        Self::Click,
        Self::Input,
        Self::Keydown,
        Self::Keyup,
        Self::Load,
        Self::Submit,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Change => "change",
            Self::Click => "click",
            Self::Input => "input",
            Self::Keydown => "keydown",
            Self::Keyup => "keyup",
            Self::Load => "load",
            Self::Submit => "submit",
        }
    }

    pub fn parse(name: &str) -> Ui4Result<Self> {
        Self::ALL
            .into_iter()
            .find(|e| e.as_str() == name)
            .ok_or_else(|| Ui4Error::InvalidEventName {
                name: name.to_owned(),
                allowed: Self::ALL.iter().map(|e| e.as_str()).collect(),
            })
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a handler sees while it runs.
pub struct EventContext<'a> {
    pub session: &'a mut Session,
    pub view: ViewId,
    pub event: EventName,
    /// Triggering value on dispatch; the last yielded value on resume.
    pub value: Value,
}

/// Where a suspendable handler picks up. `ResumePoint::START` on dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ResumePoint(pub usize);

impl ResumePoint {
    pub const START: ResumePoint = ResumePoint(0);
}

/// Outcome of running a suspendable handler up to its next suspension point.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Suspend { next: ResumePoint, yielded: Value },
    Complete,
}

/// A handler that runs in explicit stages across requests.
///
/// State lives in the resume point and the yielded value, never in captured
/// call stacks, so a continuation survives a full client round trip.
pub trait Suspendable: Send + Sync {
    fn resume(&self, ctx: &mut EventContext<'_>, at: ResumePoint) -> Ui4Result<Step>;
}

pub type StageFn = dyn Fn(&mut EventContext<'_>) -> Ui4Result<()> + Send + Sync;

/// Suspendable handler made of ordered stages; it suspends after every stage
/// but the last and yields `ctx.value` as it was left by the stage.
#[derive(Clone, Default)]
pub struct StepSequence {
    stages: Vec<Arc<StageFn>>,
}

impl StepSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(
        mut self,
        stage: impl Fn(&mut EventContext<'_>) -> Ui4Result<()> + Send + Sync + 'static,
    ) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl Suspendable for StepSequence {
    fn resume(&self, ctx: &mut EventContext<'_>, at: ResumePoint) -> Ui4Result<Step> {
        let Some(stage) = self.stages.get(at.0) else {
            return Ok(Step::Complete);
        };
        stage(ctx)?;
        let next = at.0 + 1;
        if next < self.stages.len() {
            Ok(Step::Suspend {
                next: ResumePoint(next),
                yielded: ctx.value.clone(),
            })
        } else {
            Ok(Step::Complete)
        }
    }
}

/// A bound event handler.
#[derive(Clone)]
pub enum Handler {
    Once(Arc<StageFn>),
    Suspendable(Arc<dyn Suspendable>),
}

impl Handler {
    pub fn once(
        f: impl Fn(&mut EventContext<'_>) -> Ui4Result<()> + Send + Sync + 'static,
    ) -> Self {
        Self::Once(Arc::new(f))
    }

    pub fn suspendable(s: impl Suspendable + 'static) -> Self {
        Self::Suspendable(Arc::new(s))
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Once(_) => f.write_str("Handler::Once"),
            Self::Suspendable(_) => f.write_str("Handler::Suspendable"),
        }
    }
}

impl From<StepSequence> for Handler {
    fn from(s: StepSequence) -> Self {
        Self::suspendable(s)
    }
}

/// Per-binding trigger options.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BindingOptions {
    /// Debounce delay in seconds.
    pub delay: Option<f64>,
    /// Use the session's default debounce delay when `delay` is unset.
    pub debounce: bool,
}

impl BindingOptions {
    pub fn delay(secs: f64) -> Self {
        Self {
            delay: Some(secs),
            debounce: true,
        }
    }

    pub fn debounced() -> Self {
        Self {
            delay: None,
            debounce: true,
        }
    }

    fn resolved_delay(&self, default_delay: f64) -> Option<f64> {
        match (self.delay, self.debounce) {
            (Some(d), _) => Some(d),
            (None, true) => Some(default_delay),
            (None, false) => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Binding {
    pub handler: Handler,
    pub options: BindingOptions,
}

/// At most one handler per event name.
#[derive(Debug, Clone, Default)]
pub struct EventState {
    bindings: BTreeMap<EventName, Binding>,
}

impl EventState {
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn get(&self, event: EventName) -> Option<&Binding> {
        self.bindings.get(&event)
    }

    pub fn events(&self) -> impl Iterator<Item = EventName> + '_ {
        self.bindings.keys().copied()
    }

    pub(crate) fn bind(&mut self, event: EventName, binding: Binding) {
        self.bindings.insert(event, binding);
    }

    pub(crate) fn unbind(&mut self, event: EventName) -> bool {
        self.bindings.remove(&event).is_some()
    }

    /// `hx-trigger` value, e.g. `change,click delay:0.5s`.
    pub fn render_trigger(&self, default_delay: f64) -> Option<String> {
        if self.bindings.is_empty() {
            return None;
        }
        let parts: Vec<String> = self
            .bindings
            .iter()
            .map(|(event, binding)| match binding.options.resolved_delay(default_delay) {
                Some(d) => format!("{event} delay:{}s", fmt_num(d)),
                None => event.to_string(),
            })
            .collect();
        Some(parts.join(","))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/events.rs"]
mod tests;
