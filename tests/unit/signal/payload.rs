use super::*;

#[test]
fn empty_object_deserializes_to_defaults() {
    let payload: StrapPayload = serde_json::from_str("{}").unwrap();
    assert_eq!(payload, StrapPayload::default());
    assert_eq!(payload.strap_type, DEFAULT_STRAP_TYPE);
    assert!(payload.primary_text.is_empty());
    assert!(payload.display_duration_sec.is_none());

    let signal: PlayoutSignal = serde_json::from_str("{}").unwrap();
    assert!(!signal.is_playing);
    assert_eq!(signal.payload, StrapPayload::default());
}

#[test]
fn partial_payloads_fill_in() {
    let payload: StrapPayload =
        serde_json::from_str(r#"{"primary_text":"BREAKING","display_duration_sec":5}"#).unwrap();
    assert_eq!(payload.primary_text, "BREAKING");
    assert_eq!(payload.strap_type, "name super");
    assert_eq!(payload.display_duration_sec, Some(5.0));
}

#[test]
fn effective_duration_requires_a_positive_finite_value() {
    let mut payload = StrapPayload::default();
    assert_eq!(payload.effective_duration_sec(), None);

    payload.display_duration_sec = Some(0.0);
    assert_eq!(payload.effective_duration_sec(), None);

    payload.display_duration_sec = Some(-2.0);
    assert_eq!(payload.effective_duration_sec(), None);

    payload.display_duration_sec = Some(f64::NAN);
    assert_eq!(payload.effective_duration_sec(), None);

    payload.display_duration_sec = Some(5.0);
    assert_eq!(payload.effective_duration_sec(), Some(5.0));
}

#[test]
fn normalized_trims_string_fields() {
    let payload = StrapPayload {
        primary_text: "  BREAKING \n".to_string(),
        secondary_text: "\tdetails ".to_string(),
        strap_type: " breaking news ".to_string(),
        display_duration_sec: Some(5.0),
    };
    let normalized = payload.normalized();
    assert_eq!(normalized.primary_text, "BREAKING");
    assert_eq!(normalized.secondary_text, "details");
    assert_eq!(normalized.strap_type, "breaking news");
    assert_eq!(normalized.display_duration_sec, Some(5.0));
}

#[test]
fn signals_compare_by_value() {
    let a = PlayoutSignal {
        is_playing: true,
        payload: StrapPayload {
            primary_text: "x".to_string(),
            ..StrapPayload::default()
        },
    };
    let b = a.clone();
    assert_eq!(a, b);

    let mut c = a.clone();
    c.payload.display_duration_sec = Some(3.0);
    assert_ne!(a, c);
}
