use crate::{anim::ease::Ease, config::preset::LayoutPreset};

/// The three strap elements revealed and retracted by the staggered wipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WipeSlot {
    /// Accent line above the panel.
    TopLine,
    /// Masked background panel (text rides inside its mask).
    Panel,
    /// Accent line below the panel.
    BottomLine,
}

/// One scheduled wipe: duration, start delay, and easing.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct WipeTransition {
    /// Animation duration in seconds.
    pub duration_sec: f64,
    /// Start delay in seconds.
    pub delay_sec: f64,
    /// Easing curve.
    pub ease: Ease,
}

// Stagger units per slot: (slot, units on show, units on hide).
// Entry leads from the top line; exit retracts from the bottom line.
// The ordering is a fixed design contract; only the unit length and the
// wipe durations come from the active preset.
const STAGGER_UNITS: [(WipeSlot, u32, u32); 3] = [
    (WipeSlot::TopLine, 0, 2),
    (WipeSlot::Panel, 1, 1),
    (WipeSlot::BottomLine, 2, 0),
];

fn units_for(slot: WipeSlot) -> (u32, u32) {
    STAGGER_UNITS
        .iter()
        .find(|(s, _, _)| *s == slot)
        .map(|(_, show, hide)| (*show, *hide))
        .unwrap_or((0, 0))
}

/// Entry wipe schedule for `slot` under `preset`.
pub fn wipe_in(preset: &LayoutPreset, slot: WipeSlot) -> WipeTransition {
    let (show_units, _) = units_for(slot);
    WipeTransition {
        duration_sec: preset.wipe_in_sec,
        delay_sec: f64::from(show_units) * preset.stagger_sec,
        ease: Ease::OutCubic,
    }
}

/// Exit wipe schedule for `slot` under `preset`.
pub fn wipe_out(preset: &LayoutPreset, slot: WipeSlot) -> WipeTransition {
    let (_, hide_units) = units_for(slot);
    WipeTransition {
        duration_sec: preset.wipe_out_sec,
        delay_sec: f64::from(hide_units) * preset.stagger_sec,
        ease: Ease::OutCubic,
    }
}

/// Target x offset of the overlay's slow drift while the strap is shown.
pub const OVERLAY_DRIFT_TARGET_X_PX: f64 = -100.0;
/// Duration of the overlay drift in seconds.
pub const OVERLAY_DRIFT_DURATION_SEC: f64 = 10.0;
/// Target x offset of the overlay retract on hide.
pub const OVERLAY_RETRACT_TARGET_X_PX: f64 = -200.0;
/// Duration of the overlay retract in seconds.
pub const OVERLAY_RETRACT_DURATION_SEC: f64 = 1.0;

/// Schedule for the overlay's slow drift while shown.
pub fn overlay_drift() -> WipeTransition {
    WipeTransition {
        duration_sec: OVERLAY_DRIFT_DURATION_SEC,
        delay_sec: 0.0,
        ease: Ease::OutCubic,
    }
}

/// Schedule for the overlay retract on hide.
pub fn overlay_retract() -> WipeTransition {
    WipeTransition {
        duration_sec: OVERLAY_RETRACT_DURATION_SEC,
        delay_sec: 0.0,
        ease: Ease::InOutCubic,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/anim/timing.rs"]
mod tests;
