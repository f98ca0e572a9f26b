use super::*;

fn full() -> AnimationSpec {
    AnimationSpec::new()
        .duration(1.0)
        .ease(Ease::Ease)
        .start_delay(2.0)
        .end_delay(3.0)
        .direction(Direction::Reverse)
        .iterations(Iterations::Count(4.0))
}

#[test]
fn render_is_positional() {
    assert_eq!(full().render(), "1s,ease,reverse,2s,3s,4");
    assert_eq!(AnimationSpec::new().duration(0.3).render(), "0.3s");
    assert_eq!(
        AnimationSpec::new()
            .duration(2.5)
            .iterations(Iterations::Infinite)
            .render(),
        "2.5s,inf"
    );
}

#[test]
fn merge_overlays_defined_values() {
    let overlay = AnimationSpec::new()
        .ease(Ease::EaseInOut)
        .iterations(Iterations::Count(5.0));
    assert_eq!(full().merge(&overlay).render(), "1s,ease-in-out,reverse,2s,3s,5");
    assert_eq!(full().merge(&AnimationSpec::new()), full());
}

#[test]
fn record_uses_positional_keys() {
    let json = serde_json::to_string(&AnimationSpec::new().duration(0.3).record()).unwrap();
    assert_eq!(json, r#"{"a7":0.3}"#);

    let spec = AnimationSpec::new()
        .duration(0.5)
        .ease(Ease::EaseIn)
        .start_delay(1.0)
        .end_delay(2.0)
        .direction(Direction::Alternate)
        .iterations(Iterations::Infinite);
    let json = serde_json::to_string(&spec.record()).unwrap();
    assert_eq!(
        json,
        r#"{"a7":0.5,"a8":"ease-in","a9":1,"a10":2,"a11":"alternate","a12":"infinite"}"#
    );
}

#[test]
fn empty_spec_is_detected() {
    assert!(AnimationSpec::new().is_empty());
    assert!(!AnimationSpec::new().direction(Direction::Normal).is_empty());
}

#[test]
fn delays_bring_earlier_times_along() {
    assert_eq!(AnimationSpec::new().start_delay(1.0).render(), "0.3s,1s");
    assert_eq!(AnimationSpec::new().end_delay(2.0).render(), "0.3s,0s,2s");
    assert_eq!(
        AnimationSpec::new().duration(1.0).end_delay(2.0).render(),
        "1s,0s,2s"
    );
}

#[test]
fn rendered_delays_parse_back_into_their_slots() {
    use crate::constraint::attribute::Attribute;
    use crate::constraint::rule::{Comparison, Constraint};
    use crate::wire::parse_ui4;

    for spec in [
        AnimationSpec::new().start_delay(1.0),
        AnimationSpec::new().end_delay(2.0).ease(Ease::Linear),
        AnimationSpec::new().start_delay(0.5).end_delay(2.0),
    ] {
        let c = Constraint::new(Attribute::Left, Comparison::Eq, 100.0.into())
            .with_animation(Some(spec.clone()));
        let parsed = parse_ui4(&c.serialize()).unwrap();
        let back = parsed[0].animation.clone().unwrap();
        if spec.start_delay.is_some() {
            assert_eq!(back.start_delay, spec.start_delay);
        }
        assert_eq!(back.end_delay, spec.end_delay);
        assert_eq!(back.ease, spec.ease);
        assert_eq!(back.render(), spec.render());
    }
}
