use super::*;

#[test]
fn library_resolves_exact_then_fallback() {
    let lib = FontLibrary::new("regular")
        .with_font("black", vec![1, 2, 3])
        .with_font("regular", vec![4, 5, 6]);

    let (role, bytes) = lib.resolve("black").unwrap();
    assert_eq!(role, "black");
    assert_eq!(bytes.as_slice(), &[1, 2, 3]);

    let (role, bytes) = lib.resolve("unknown").unwrap();
    assert_eq!(role, "regular");
    assert_eq!(bytes.as_slice(), &[4, 5, 6]);
}

#[test]
fn empty_library_cannot_resolve() {
    let lib = FontLibrary::new("regular");
    assert!(lib.is_empty());
    let err = lib.resolve("black").unwrap_err();
    assert!(err.to_string().contains("no font registered"));
}

#[test]
fn registration_replaces_previous_bytes() {
    let lib = FontLibrary::new("regular")
        .with_font("black", vec![1])
        .with_font("black", vec![2]);
    let (_, bytes) = lib.resolve("black").unwrap();
    assert_eq!(bytes.as_slice(), &[2]);
}

#[test]
fn measurer_rejects_invalid_font_bytes() {
    let lib = FontLibrary::new("regular").with_font("black", vec![0; 16]);
    assert!(ParleyTextMeasurer::new(&lib).is_err());
}

#[test]
fn measurer_over_empty_library_degrades_per_call() {
    // Construction succeeds (nothing to register); measuring anything
    // non-empty fails, which the controller treats as scale 1.
    let mut measurer = ParleyTextMeasurer::new(&FontLibrary::new("regular")).unwrap();

    assert_eq!(measurer.measure_width_px("black", 80.0, "").unwrap(), 0.0);
    assert!(measurer.measure_width_px("black", 80.0, "hi").is_err());
}

#[test]
fn measurer_validates_size() {
    let mut measurer = ParleyTextMeasurer::new(&FontLibrary::new("regular")).unwrap();
    assert!(measurer.measure_width_px("black", 0.0, "hi").is_err());
    assert!(measurer.measure_width_px("black", f32::NAN, "hi").is_err());
}
