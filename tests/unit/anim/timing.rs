use super::*;
use crate::config::table::{DEFAULT_STRAP_TYPE, PresetTable};

fn preset() -> LayoutPreset {
    PresetTable::builtin().lookup(DEFAULT_STRAP_TYPE).clone()
}

#[test]
fn entry_leads_from_the_top() {
    let p = preset();
    assert_eq!(wipe_in(&p, WipeSlot::TopLine).delay_sec, 0.0);
    assert_eq!(wipe_in(&p, WipeSlot::Panel).delay_sec, p.stagger_sec);
    assert_eq!(wipe_in(&p, WipeSlot::BottomLine).delay_sec, 2.0 * p.stagger_sec);
    for slot in [WipeSlot::TopLine, WipeSlot::Panel, WipeSlot::BottomLine] {
        let tr = wipe_in(&p, slot);
        assert_eq!(tr.duration_sec, p.wipe_in_sec);
        assert_eq!(tr.ease, Ease::OutCubic);
    }
}

#[test]
fn exit_retracts_from_the_bottom() {
    let p = preset();
    assert_eq!(wipe_out(&p, WipeSlot::BottomLine).delay_sec, 0.0);
    assert_eq!(wipe_out(&p, WipeSlot::Panel).delay_sec, p.stagger_sec);
    assert_eq!(wipe_out(&p, WipeSlot::TopLine).delay_sec, 2.0 * p.stagger_sec);
    for slot in [WipeSlot::TopLine, WipeSlot::Panel, WipeSlot::BottomLine] {
        assert_eq!(wipe_out(&p, slot).duration_sec, p.wipe_out_sec);
    }
}

#[test]
fn zero_stagger_collapses_delays() {
    let mut p = preset();
    p.stagger_sec = 0.0;
    assert_eq!(wipe_in(&p, WipeSlot::BottomLine).delay_sec, 0.0);
    assert_eq!(wipe_out(&p, WipeSlot::TopLine).delay_sec, 0.0);
}

#[test]
fn overlay_schedules_are_fixed() {
    let drift = overlay_drift();
    assert_eq!(drift.duration_sec, OVERLAY_DRIFT_DURATION_SEC);
    assert_eq!(drift.delay_sec, 0.0);
    assert_eq!(drift.ease, Ease::OutCubic);

    let retract = overlay_retract();
    assert_eq!(retract.duration_sec, OVERLAY_RETRACT_DURATION_SEC);
    assert_eq!(retract.ease, Ease::InOutCubic);
}
