use super::*;
use crate::foundation::error::Ui4Result;
use crate::view::events::{EventContext, Step};

struct Noop;

impl Suspendable for Noop {
    fn resume(&self, _ctx: &mut EventContext<'_>, _at: ResumePoint) -> Ui4Result<Step> {
        Ok(Step::Complete)
    }
}

fn entry(view: u32, event: EventName, created: Instant) -> Continuation {
    Continuation {
        handler: Arc::new(Noop),
        next: ResumePoint(1),
        yielded: Value::Null,
        view: ViewId(view),
        event,
        created,
    }
}

const TTL: Duration = Duration::from_secs(60);

#[test]
fn take_removes_entry() {
    let now = Instant::now();
    let mut table = ContinuationTable::default();
    let id = ContinuationId::fresh();
    table.insert(id.clone(), entry(2, EventName::Click, now), TTL, 8);
    assert!(table.contains(&id));
    assert!(table.take(&id, now, TTL).is_some());
    assert!(table.take(&id, now, TTL).is_none());
}

#[test]
fn overflow_evicts_oldest_first() {
    let now = Instant::now();
    let mut table = ContinuationTable::default();
    let ids: Vec<_> = (0..3).map(|_| ContinuationId::fresh()).collect();
    for (i, id) in ids.iter().enumerate() {
        table.insert(id.clone(), entry(i as u32 + 1, EventName::Click, now), TTL, 2);
    }
    assert_eq!(table.len(), 2);
    assert!(!table.contains(&ids[0]));
    assert!(table.contains(&ids[1]));
    assert!(table.contains(&ids[2]));
}

#[test]
fn stale_entries_expire() {
    let created = Instant::now();
    let mut table = ContinuationTable::default();
    let id = ContinuationId::fresh();
    table.insert(id.clone(), entry(2, EventName::Click, created), TTL, 8);
    assert!(table.take(&id, created + TTL * 2, TTL).is_none());
    assert_eq!(table.len(), 0);
}

#[test]
fn discard_by_binding_and_view() {
    let now = Instant::now();
    let mut table = ContinuationTable::default();
    table.insert(ContinuationId::fresh(), entry(2, EventName::Click, now), TTL, 8);
    table.insert(ContinuationId::fresh(), entry(2, EventName::Change, now), TTL, 8);
    table.insert(ContinuationId::fresh(), entry(3, EventName::Click, now), TTL, 8);
    assert_eq!(table.discard_binding(ViewId(2), EventName::Click), 1);
    assert!(table.pending_for(ViewId(2)).is_some());
    assert_eq!(table.discard_view(ViewId(2)), 1);
    assert!(table.pending_for(ViewId(2)).is_none());
    assert_eq!(table.len(), 1);
}
