use super::*;

#[test]
fn defaults_are_valid() {
    let opts = SessionOpts::default();
    opts.validate().unwrap();
    assert_eq!(opts.event_endpoint, "/event");
    assert_eq!(opts.continuation_ttl, Duration::from_secs(300));
    assert_eq!(opts.max_continuations, 64);
}

#[test]
fn partial_json_keeps_defaults() {
    let opts = SessionOpts::from_json_str(r#"{"continuation_ttl": 1.5, "debounce_delay": 0.25}"#)
        .unwrap();
    assert_eq!(opts.continuation_ttl, Duration::from_millis(1500));
    assert_eq!(opts.debounce_delay, 0.25);
    assert_eq!(opts.max_continuations, 64);
}

#[test]
fn rejects_zero_capacity_and_negative_durations() {
    assert!(matches!(
        SessionOpts::from_json_str(r#"{"max_continuations": 0}"#),
        Err(Ui4Error::Validation(_))
    ));
    assert!(SessionOpts::from_json_str(r#"{"continuation_ttl": -1}"#).is_err());
    assert!(SessionOpts::from_json_str(r#"{"default_animation_duration": -0.1}"#).is_err());
}

#[test]
fn rejects_unknown_keys() {
    let err = SessionOpts::from_json_str(r#"{"endpoint": "/x"}"#).unwrap_err();
    assert!(err.to_string().contains("parse session options JSON"));
}

#[test]
fn missing_file_is_a_validation_error() {
    let err = SessionOpts::from_json_file("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("open session options"));
}
