use super::*;

fn switchable() -> (SessionRegistry, Arc<Mutex<String>>) {
    let current = Arc::new(Mutex::new("alice".to_owned()));
    let source = current.clone();
    let registry = SessionRegistry::new(SessionOpts::default(), move || {
        SessionKey::new(source.lock().clone())
    });
    (registry, current)
}

#[test]
fn sessions_are_isolated_per_key() {
    let (registry, current) = switchable();
    assert!(registry.is_empty());

    let alice_view = registry.with_current(|s| s.create_view());
    *current.lock() = "bob".to_owned();
    let bob_len = registry.with_current(|s| s.len());

    assert_eq!(registry.len(), 2);
    assert_eq!(bob_len, 1);
    let alice = registry.get(&SessionKey::new("alice")).unwrap();
    assert!(alice.lock().contains(alice_view));
    assert_eq!(registry.current_key(), SessionKey::new("bob"));
}

#[test]
fn same_key_returns_same_session() {
    let (registry, _) = switchable();
    let a = registry.current();
    let b = registry.get_or_create(&SessionKey::new("alice"));
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(registry.len(), 1);
}

#[test]
fn discard_forgets_everything() {
    let (registry, _) = switchable();
    let key = registry.current_key();
    registry.with_current(|s| {
        s.create_view();
    });
    assert!(registry.discard(&key));
    assert!(!registry.discard(&key));
    assert!(registry.get(&key).is_none());
    assert_eq!(registry.with_current(|s| s.len()), 1);
}

#[test]
fn sessions_inherit_registry_opts() {
    let opts = SessionOpts {
        event_endpoint: "/ui4/event".to_owned(),
        ..SessionOpts::default()
    };
    let registry = SessionRegistry::new(opts, || SessionKey::new("k"));
    let endpoint = registry.with_current(|s| s.opts().event_endpoint.clone());
    assert_eq!(endpoint, "/ui4/event");
}

#[test]
fn concurrent_requests_share_one_session() {
    let registry = Arc::new(SessionRegistry::new(SessionOpts::default(), || {
        SessionKey::new("shared")
    }));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = registry.clone();
            std::thread::spawn(move || {
                registry.with_current(|s| {
                    s.create_view();
                })
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.with_current(|s| s.len()), 9);
}
