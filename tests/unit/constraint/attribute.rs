use super::*;

#[test]
fn names_resolve_through_table() {
    assert_eq!(Attribute::from_name("center_x").unwrap(), Attribute::CenterX);
    assert_eq!(Attribute::from_name("centerX").unwrap(), Attribute::CenterX);
    assert_eq!(Attribute::from_name("x").unwrap(), Attribute::Left);
    assert_eq!(Attribute::from_name("y").unwrap(), Attribute::Top);
    assert_eq!(
        Target::from_name("box").unwrap(),
        Target::Composite(Composite::Frame)
    );
}

#[test]
fn composite_name_is_not_a_single_attribute() {
    assert!(matches!(
        Attribute::from_name("center"),
        Err(Ui4Error::UnknownAttribute { .. })
    ));
    assert!(Target::from_name("middle").is_err());
}

#[test]
fn axis_checklists_cover_four_attributes_each() {
    for axis in [Axis::Horizontal, Axis::Vertical] {
        let prio = axis.priority();
        assert!(prio.iter().all(|a| a.axis() == axis));
    }
}

#[test]
fn fit_attributes_are_read_only() {
    assert!(!Attribute::FitWidth.is_settable());
    assert!(Attribute::Width.is_settable());
    assert_eq!(Attribute::FitHeight.wire_name(), "fitHeight");
}
