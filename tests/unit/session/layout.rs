use super::*;
use crate::constraint::condition::portrait;
use crate::constraint::expr::Expr;
use crate::constraint::rule::{at_least, at_most};

fn ui4(s: &Session, v: ViewId) -> String {
    s.constraints(v).unwrap().serialize()
}

#[test]
fn numbers_and_anchors_serialize() {
    let mut s = Session::default();
    let a = s.create_view();
    let b = s.create_view();
    s.set(b, Attribute::Left, a.right() + Expr::gap()).unwrap();
    s.set(b, Attribute::Width, 100).unwrap();
    assert_eq!(ui4(&s, b), "left=id2.right+gap;width=100");
}

#[test]
fn third_equality_on_axis_prunes() {
    let mut s = Session::default();
    let v = s.create_view();
    s.set(v, Attribute::Left, 0).unwrap();
    s.set(v, Attribute::Width, 10).unwrap();
    s.set(v, Attribute::Right, 50).unwrap();
    assert_eq!(ui4(&s, v), "width=10;right=50");
}

#[test]
fn clause_order_is_eq_lt_gt() {
    let mut s = Session::default();
    let root = s.root();
    let a = s.create_view();
    let b = s.create_view();
    let v = s.create_view();
    s.set(v, Attribute::Left, at_least([b.left()])).unwrap();
    s.set(v, Attribute::Left, at_most([a.left()])).unwrap();
    s.set(v, Attribute::Left, root.left()).unwrap();
    assert_eq!(ui4(&s, v), "left=id1.left;left<id2.left;left>id3.left");
}

#[test]
fn guarded_values_coexist() {
    let mut s = Session::default();
    let a = s.create_view();
    let v = s.create_view();
    s.set(
        v,
        Attribute::Left,
        ConstraintInput::Many(vec![a.right().into(), (portrait() & a.left()).into()]),
    )
    .unwrap();
    assert_eq!(ui4(&s, v), "left=id2.right;portrait?left=id2.left");
}

#[test]
fn none_clears_attribute() {
    let mut s = Session::default();
    let v = s.create_view();
    s.set(v, Attribute::Top, 5).unwrap();
    s.get_roots();
    s.set(v, Attribute::Top, None::<f64>).unwrap();
    assert_eq!(ui4(&s, v), "");
    assert!(s.is_dirty(v));
}

#[test]
fn unknown_anchor_view_is_rejected_before_mutation() {
    let mut s = Session::default();
    let v = s.create_view();
    s.get_roots();
    let err = s.set(v, Attribute::Left, ViewId(99).left()).unwrap_err();
    assert!(matches!(err, Ui4Error::UnknownView { .. }));
    assert!(s.constraints(v).unwrap().is_empty());
    assert!(!s.is_dirty(v));
}

#[test]
fn fit_attributes_cannot_be_targets() {
    let mut s = Session::default();
    let v = s.create_view();
    assert!(matches!(
        s.set(v, Attribute::FitWidth, 1),
        Err(Ui4Error::UnsupportedValue { .. })
    ));
}

#[test]
fn composite_sets_all_parts_or_none() {
    let mut s = Session::default();
    let a = s.create_view();
    let v = s.create_view();
    s.set_composite(v, Composite::Center, vec![a.center_x().into(), a.center_y().into()])
        .unwrap();
    assert_eq!(ui4(&s, v), "centerX=id2.centerX;centerY=id2.centerY");

    let err = s
        .set_composite(v, Composite::Size, vec![10.into()])
        .unwrap_err();
    assert!(matches!(err, Ui4Error::UnsupportedValue { .. }));
    let err = s
        .set_composite(v, Composite::Size, vec![10.into(), f64::NAN.into()])
        .unwrap_err();
    assert!(matches!(err, Ui4Error::UnsupportedValue { .. }));
    assert_eq!(ui4(&s, v), "centerX=id2.centerX;centerY=id2.centerY");
}

#[test]
fn named_targets_resolve_aliases_and_composites() {
    let mut s = Session::default();
    let v = s.create_view();
    s.set_named(v, "x", 5.into()).unwrap();
    s.set_named(v, "size", ConstraintInput::Many(vec![10.into(), 20.into()]))
        .unwrap();
    assert_eq!(ui4(&s, v), "left=5;width=10;height=20");
    assert!(matches!(
        s.set_named(v, "size", 10.into()),
        Err(Ui4Error::UnsupportedValue { .. })
    ));
    assert!(matches!(
        s.set_named(v, "diagonal", 10.into()),
        Err(Ui4Error::UnknownAttribute { .. })
    ));
}

#[test]
fn parent_dock_reparents_and_offsets() {
    let mut s = Session::default();
    let root = s.root();
    let host = s.create_child(root).unwrap();
    let v = s.create_view();
    s.dock(v, host.dock(Dock::Top) + 16.0).unwrap();
    assert_eq!(s.parent(v).unwrap(), Some(host));
    assert_eq!(
        ui4(&s, v),
        "top=id2.top+16;left=id2.left+16;right=id2.right-16"
    );
}

#[test]
fn top_left_dock_equals_manual_constraints() {
    let mut s = Session::default();
    let root = s.root();
    let a = s.create_child(root).unwrap();
    let docked = s.create_view();
    let manual = s.create_view();
    s.dock(docked, a.dock(Dock::TopLeft)).unwrap();
    s.set_parent(manual, Some(a)).unwrap();
    s.set(manual, Attribute::Top, a.top()).unwrap();
    s.set(manual, Attribute::Left, a.left()).unwrap();
    assert_eq!(ui4(&s, docked), ui4(&s, manual));
    assert_eq!(s.parent(docked).unwrap(), s.parent(manual).unwrap());
}

#[test]
fn sibling_dock_lands_next_to_reference() {
    let mut s = Session::default();
    let root = s.root();
    let host = s.create_child(root).unwrap();
    let sibling = s.create_child(host).unwrap();
    let v = s.create_view();
    s.dock(v, sibling.dock(Dock::Above) + 4.0).unwrap();
    assert_eq!(s.parent(v).unwrap(), Some(host));
    assert_eq!(ui4(&s, v), "bottom=id3.top-4;centerX=id3.centerX;width=id3.width");
}

#[test]
fn sibling_dock_needs_a_parent() {
    let mut s = Session::default();
    let lonely = s.create_view();
    let v = s.create_view();
    assert!(matches!(
        s.dock(v, lonely.dock(Dock::Below)),
        Err(Ui4Error::Validation(_))
    ));
    assert!(s.constraints(v).unwrap().is_empty());
    assert!(matches!(
        s.dock_named(v, lonely, "sideways"),
        Err(Ui4Error::UnknownDock { .. })
    ));
}

#[test]
fn docking_into_container_targets_container() {
    let mut s = Session::default();
    let root = s.root();
    let p = s.create_child(root).unwrap();
    let container = s.create_view();
    s.set_container(p, Some(container)).unwrap();
    let v = s.create_view();
    s.dock(v, p.dock(Dock::Center)).unwrap();
    assert_eq!(s.parent(v).unwrap(), Some(p));
    assert_eq!(s.structural_parent(v).unwrap(), Some(container));
    assert_eq!(ui4(&s, v), "centerX=id3.centerX;centerY=id3.centerY");
}

#[test]
fn fit_uses_client_fit_size() {
    let mut s = Session::default();
    let v = s.create_view();
    s.fit(v, Fit::Both(8.0)).unwrap();
    assert_eq!(ui4(&s, v), "width=id2.fitWidth+8;height=id2.fitHeight+8");
    s.fit(v, Fit::Height(0.0)).unwrap();
    assert_eq!(ui4(&s, v), "width=id2.fitWidth+8;height=id2.fitHeight+0");
}

#[test]
fn release_clears_everything() {
    let mut s = Session::default();
    let v = s.create_view();
    s.set(v, Attribute::Left, 1).unwrap();
    s.set(v, Attribute::Top, at_least([2.0])).unwrap();
    s.release(v).unwrap();
    assert!(s.constraints(v).unwrap().is_empty());
}
