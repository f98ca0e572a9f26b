use super::*;

#[test]
fn view_id_wire_form_round_trips() {
    let id = ViewId(42);
    assert_eq!(id.to_string(), "id42");
    assert_eq!(ViewId::parse("id42").unwrap(), id);
}

#[test]
fn malformed_view_ids_are_rejected() {
    for s in ["", "id", "42", "idx", "view3"] {
        assert!(matches!(
            ViewId::parse(s),
            Err(Ui4Error::UnknownView { .. })
        ));
    }
}

#[test]
fn continuation_ids_are_unique() {
    let a = ContinuationId::fresh();
    let b = ContinuationId::fresh();
    assert_ne!(a, b);
    assert!(!a.as_str().is_empty());
}

#[test]
fn view_id_serializes_as_wire_string() {
    let s = serde_json::to_string(&ViewId(3)).unwrap();
    assert_eq!(s, "\"id3\"");
}
