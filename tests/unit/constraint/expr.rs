use super::*;

fn gap() -> Expr {
    Expr::gap()
}

#[test]
fn build_up_renders_client_grammar() {
    assert_eq!((gap() + 1.0).to_string(), "gap+1");
    assert_eq!(((gap() - 1.0) * 2.0).to_string(), "(gap-1)*2");
    assert_eq!(minimum([1.0, 2.0]).to_string(), "min(1,2)");
    assert_eq!(
        minimum([(gap() + 1.0) / 2.0, Expr::num(2.0)]).to_string(),
        "min((gap+1)/2,2)"
    );
    assert_eq!((minimum([1.0, 2.0]) + gap()).to_string(), "min(1,2)+gap");
    assert_eq!(maximum([gap(), Expr::num(0.5)]).to_string(), "max(gap,0.5)");
}

#[test]
fn anchors_rebind_to_arithmetic() {
    let left = AnchorRef::new(ViewId(2), Attribute::Left);
    assert_eq!(Expr::from(left).to_string(), "id2.left");
    assert_eq!((left + 1.0).to_string(), "id2.left+1");
    let cx = AnchorRef::new(ViewId(4), Attribute::CenterX);
    assert_eq!((cx * 2.0 - 8.0).to_string(), "(id4.centerX*2)-8");
}

#[test]
fn invert_flips_top_level_sign_only() {
    assert_eq!((gap() + 1.0).invert_operator().to_string(), "gap-1");
    assert_eq!((gap() - 1.0).invert_operator().to_string(), "gap+1");
    assert_eq!((gap() * 2.0).invert_operator().to_string(), "gap*2");
    assert_eq!(gap().invert_operator(), gap());
}

#[test]
fn get_anchor_reports_absence_without_error() {
    assert_eq!(gap().get_anchor(), None);
    assert_eq!((gap() + 3.0).get_anchor(), None);

    let left = AnchorRef::new(ViewId(1), Attribute::Left);
    assert_eq!(Expr::from(left).get_anchor(), Some(left));
    assert_eq!((left + 1.0).get_anchor(), Some(left));
    assert_eq!(
        minimum([Expr::num(4.0), Expr::from(left)]).get_anchor(),
        Some(left)
    );
}

#[test]
fn map_anchors_rewrites_every_reference() {
    let a = AnchorRef::new(ViewId(1), Attribute::Left);
    let b = AnchorRef::new(ViewId(1), Attribute::Width);
    let mut e = maximum([Expr::from(a), b / 2.0]);
    e.map_anchors(&mut |r| r.view = ViewId(9));
    assert_eq!(e.to_string(), "max(id9.left,id9.width/2)");
    assert_eq!(e.anchors().len(), 2);
}
