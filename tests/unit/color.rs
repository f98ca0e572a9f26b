use super::*;

#[test]
fn css_uses_integer_channels_including_alpha() {
    assert_eq!(Color::rgb(1.0, 0.0, 0.0).css(), "rgba(255,0,0,255)");
    assert_eq!(Color::gray(0.5).with_alpha(0.5).css(), "rgba(128,128,128,128)");
    assert_eq!(Color::TRANSPARENT.to_string(), "rgba(0,0,0,0)");
}

#[test]
fn parses_hex_forms() {
    assert_eq!(Color::parse("#ff0000").unwrap(), Color::rgb(1.0, 0.0, 0.0));
    assert_eq!(Color::parse("#fff").unwrap(), Color::WHITE);
    assert_eq!(Color::parse("00000000").unwrap(), Color::TRANSPARENT);
    assert_eq!(Color::parse("Transparent").unwrap(), Color::TRANSPARENT);
}

#[test]
fn rejects_malformed_hex() {
    assert!(matches!(Color::parse("#12345"), Err(Ui4Error::Validation(_))));
    assert!(Color::parse("#gg0000").is_err());
    assert!(Color::parse("#ééé").is_err());
}

#[test]
fn deserializes_from_json_shapes() {
    let c: Color = serde_json::from_str("\"#0000ff\"").unwrap();
    assert_eq!(c, Color::rgb(0.0, 0.0, 1.0));
    let c: Color = serde_json::from_str("{\"r\":1,\"g\":1,\"b\":1}").unwrap();
    assert_eq!(c, Color::WHITE);
    let c: Color = serde_json::from_str("[0,0,0,0.5]").unwrap();
    assert_eq!(c.a, 0.5);
    assert!(serde_json::from_str::<Color>("[1,2]").is_err());
}
