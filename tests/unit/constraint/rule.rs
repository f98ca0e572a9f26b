use super::*;
use crate::animation::spec::AnimationSpec;
use crate::constraint::condition::portrait;
use crate::constraint::expr::minimum;
use crate::foundation::ids::ViewId;

#[test]
fn expression_serializes_against_target() {
    assert_eq!((Expr::gap() + 1.0).serialize("foo"), "foo=gap+1");
    assert_eq!(at_most([minimum([1.0, 2.0])]).serialize("foo"), "foo<min(1,2)");
}

#[test]
fn bounds_render_one_clause_per_value() {
    assert_eq!(at_least([200.0]).to_string(), ">200");
    assert_eq!(
        at_least([Expr::gap() + 1.0, Expr::num(200.0)]).to_string(),
        ">gap+1;>200"
    );
    assert_eq!(
        at_least([Expr::gap() + 1.0, Expr::num(200.0)]).serialize("width"),
        "width>gap+1;width>200"
    );
}

#[test]
fn constraint_clause_carries_guard_and_animation() {
    let left = AnchorRef::new(ViewId(1), Attribute::Left);
    let c = Constraint::new(Attribute::Left, Comparison::Eq, left.into())
        .with_condition(Some(portrait()))
        .with_animation(Some(AnimationSpec::new().duration(0.3)));
    assert_eq!(c.serialize(), "portrait?left=id1.left:0.3s");
}

#[test]
fn many_expands_to_independent_constraints() {
    let a = AnchorRef::new(ViewId(1), Attribute::Right);
    let b = AnchorRef::new(ViewId(1), Attribute::Left);
    let input = ConstraintInput::Many(vec![a.into(), (portrait() & b).into()]);
    let out = input.expand(Attribute::Left, None).unwrap();
    let rendered: Vec<_> = out.iter().map(Constraint::serialize).collect();
    assert_eq!(rendered, ["left=id1.right", "portrait?left=id1.left"]);
}

#[test]
fn unsupported_inputs_are_type_errors() {
    let nan = ConstraintInput::from(f64::NAN).expand(Attribute::Left, None);
    assert!(matches!(nan, Err(Ui4Error::UnsupportedValue { .. })));

    let empty = ConstraintInput::Bounds(at_least(Vec::<Expr>::new())).expand(Attribute::Top, None);
    assert!(matches!(empty, Err(Ui4Error::UnsupportedValue { .. })));

    let nested = ConstraintInput::Many(vec![ConstraintInput::Many(vec![1.0.into()])])
        .expand(Attribute::Top, None);
    assert!(matches!(nested, Err(Ui4Error::UnsupportedValue { .. })));

    let fit = ConstraintInput::from(10.0).expand(Attribute::FitWidth, None);
    match fit {
        Err(Ui4Error::UnsupportedValue { attribute, .. }) => assert_eq!(attribute, "fit_width"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn guarded_bounds_keep_condition() {
    let b = portrait() & at_most([300.0]);
    let out = ConstraintInput::from(b).expand(Attribute::Width, None).unwrap();
    assert_eq!(out[0].serialize(), "portrait?width<300");
}
