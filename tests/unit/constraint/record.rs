use super::*;
use crate::animation::spec::AnimationSpec;
use crate::constraint::attribute::Attribute;
use crate::constraint::condition::portrait;
use crate::constraint::expr::{AnchorRef, maximum};
use crate::constraint::rule::Comparison;
use crate::foundation::ids::ViewId;
use serde_json::json;

#[test]
fn only_defined_fields_appear_at_fixed_keys() {
    let dict = AnchorRecord::target("bar").modifier(16.0).as_dict().unwrap();
    assert_eq!(serde_json::Value::Object(dict), json!({"a0": "bar", "a5": 16}));
}

#[test]
fn multiplier_and_animation_serialize_in_key_order() {
    let mut record = AnchorRecord::target("bar").multiplier(2.0);
    record.animation = AnimationSpec::new().duration(0.5).record();
    assert_eq!(record.as_json().unwrap(), r#"{"a0":"bar","a4":2,"a7":0.5}"#);
}

#[test]
fn linear_constraints_fold_multiplier_and_modifier() {
    let src = AnchorRef::new(ViewId(2), Attribute::Width);
    let c = Constraint::new(Attribute::Left, Comparison::Gt, src * 12.0 / 4.0 + 3.0 - 1.0)
        .with_condition(Some(portrait()));
    let r = c.record().unwrap();
    assert_eq!(r.source_view.as_deref(), Some("id2"));
    assert_eq!(r.source_attribute.as_deref(), Some("width"));
    assert_eq!(r.multiplier, Some(3.0));
    assert_eq!(r.modifier, Some(2.0));
    assert_eq!(r.comparison.as_deref(), Some(">"));
    assert_eq!(r.require.as_deref(), Some("portrait"));
}

#[test]
fn non_linear_values_have_no_record() {
    let a = AnchorRef::new(ViewId(2), Attribute::Width);
    let b = AnchorRef::new(ViewId(3), Attribute::Width);
    let c = Constraint::new(Attribute::Width, Comparison::Eq, maximum([a, b]));
    assert!(c.record().is_none());
    let g = Constraint::new(Attribute::Width, Comparison::Eq, Expr::gap() + 1.0);
    assert!(g.record().is_none());
}
