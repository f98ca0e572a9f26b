use serde_json::json;

use super::*;
use crate::animation::spec::AnimationSpec;
use crate::constraint::attribute::Attribute;
use crate::view::events::{BindingOptions, EventName, Handler};
use crate::view::props::StyleProp;

#[test]
fn first_render_ships_whole_page() {
    let mut s = Session::default();
    let root = s.root();
    let child = s.create_child(root).unwrap();
    let patch = s.render_updates().unwrap();
    assert_eq!(patch.root_ids(), vec![root]);
    assert!(patch.find(child).is_some());
    assert!(s.render_updates().unwrap().is_empty());
}

#[test]
fn attributes_come_in_fixed_order() {
    let mut s = Session::default();
    let root = s.root();
    let v = s.create_child(root).unwrap();
    s.on(v, EventName::Click, Handler::once(|_| Ok(())), BindingOptions::default())
        .unwrap();
    s.set_style(v, StyleProp::Padding, 4).unwrap();
    s.set(v, Attribute::Width, 10).unwrap();

    let attrs = s.render_attributes(v).unwrap();
    let keys: Vec<&str> = attrs.keys().map(String::as_str).collect();
    assert_eq!(keys, vec![ATTR_CONSTRAINTS, ATTR_STYLE, ATTR_POST, ATTR_TRIGGER]);
    assert_eq!(attrs[ATTR_CONSTRAINTS], "width=10");
    assert_eq!(attrs[ATTR_STYLE], "padding:4px");
    assert_eq!(attrs[ATTR_POST], "/event");
    assert_eq!(attrs[ATTR_TRIGGER], "click");
}

#[test]
fn bare_view_has_no_attributes() {
    let s = Session::default();
    assert!(s.render_attributes(s.root()).unwrap().is_empty());
}

#[test]
fn updates_contain_only_minimal_roots() {
    let mut s = Session::default();
    let root = s.root();
    let a = s.create_child(root).unwrap();
    let a1 = s.create_child(a).unwrap();
    let b = s.create_child(root).unwrap();
    s.render_updates().unwrap();

    s.set(a1, Attribute::Left, 1).unwrap();
    s.set(a, Attribute::Left, 2).unwrap();
    s.set(b, Attribute::Top, 3).unwrap();
    let patch = s.render_updates().unwrap();
    assert_eq!(patch.root_ids(), vec![a, b]);
    assert!(patch.roots.iter().all(|r| r.oob));
    assert_eq!(
        patch.find(a1).unwrap().attribute(ATTR_CONSTRAINTS),
        Some("left=1")
    );
    assert!(!patch.find(a1).unwrap().oob);
}

#[test]
fn animated_style_ships_once_then_settles() {
    let mut s = Session::default();
    let root = s.root();
    let v = s.create_child(root).unwrap();
    s.render_updates().unwrap();

    s.animate(AnimationSpec::new().duration(0.5), |s| {
        s.set_style(v, StyleProp::Alpha, 0.25)
    })
    .unwrap();
    let patch = s.render_updates().unwrap();
    let rendered = patch.find(v).unwrap();
    let transitions: serde_json::Value =
        serde_json::from_str(rendered.attribute(ATTR_TRANSITIONS).unwrap()).unwrap();
    assert_eq!(
        transitions,
        json!([{"key": "opacity", "value": "0.25", "animation": {"a7": 0.5}}])
    );
    assert_eq!(rendered.attribute(ATTR_STYLE), None);

    s.set(v, Attribute::Width, 5).unwrap();
    let patch = s.render_updates().unwrap();
    let rendered = patch.find(v).unwrap();
    assert_eq!(rendered.attribute(ATTR_TRANSITIONS), None);
    assert_eq!(rendered.attribute(ATTR_STYLE), Some("opacity:0.25"));
}

#[test]
fn page_render_clears_dirty_set() {
    let mut s = Session::default();
    let root = s.root();
    let v = s.create_child(root).unwrap();
    s.set_property(v, "text", "hello").unwrap();
    let page = s.render_page().unwrap();
    assert_eq!(page.id, root);
    assert!(!page.oob);
    assert_eq!(page.ids(), vec![root, v]);
    assert!(s.dirty_views().is_empty());
}

#[test]
fn patch_serializes_without_empty_fields() {
    let mut s = Session::default();
    let root = s.root();
    s.set(root, Attribute::Width, 320).unwrap();
    let json: serde_json::Value = serde_json::from_str(&s.render_updates().unwrap().to_json().unwrap()).unwrap();
    assert_eq!(
        json,
        json!({
            "roots": [{
                "id": "id1",
                "tag": "body",
                "attributes": {"ui4": "width=320"},
                "children": [],
                "oob": true
            }]
        })
    );
}
