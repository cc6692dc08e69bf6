use super::*;

#[test]
fn endpoints_are_fixed() {
    for ease in [Ease::Linear, Ease::OutCubic, Ease::InOutCubic] {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::OutCubic.apply(-1.0), 0.0);
    assert_eq!(Ease::OutCubic.apply(2.0), 1.0);
}

#[test]
fn out_cubic_leads_linear() {
    assert_eq!(Ease::OutCubic.apply(0.5), 0.875);
    assert!(Ease::OutCubic.apply(0.25) > Ease::Linear.apply(0.25));
}

#[test]
fn in_out_cubic_is_symmetric() {
    assert_eq!(
        Ease::InOutCubic.apply(0.25) + Ease::InOutCubic.apply(0.75),
        1.0
    );
    assert_eq!(Ease::InOutCubic.apply(0.5), 0.5);
}
