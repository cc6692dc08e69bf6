//! Strapline is a broadcast lower-third ("strap") graphics engine.
//!
//! It turns push-based playout host signals into a declarative description
//! of what a rendering/animation engine should draw:
//!
//! 1. **Signal**: the host delivers a [`PlayoutSignal`] (text payload plus
//!    a play flag) at arbitrary frequency, repeats included.
//! 2. **Derive**: the [`StrapController`] state machine
//!    (`Hidden -> Entering -> Visible -> Exiting`) selects a
//!    [`LayoutPreset`] from the [`PresetTable`], measures text through a
//!    [`TextMeasurer`], and maintains the [`VisibilityState`] (visible
//!    flag plus two autofit scale factors).
//! 3. **Describe**: [`describe`] maps preset + state to a
//!    [`RenderDescription`]: per-element geometry, paints, and animated
//!    property targets with the staggered wipe schedule.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Level-triggered**: only the latest signal matters; identical
//!   repeats are no-ops and never re-arm the auto-hide timer.
//! - **Host-driven time**: the controller never sleeps or spawns; the
//!   host's UI loop supplies monotonic seconds to `apply`/`tick`, and the
//!   single one-shot auto-hide timer is a stored deadline.
//! - **No failure paths in the controller**: missing payload data and
//!   measurement failures degrade to defaults (empty field, fallback
//!   preset, neutral scale).
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod anim;
mod config;
mod controller;
mod foundation;
mod measure;
mod render;
mod signal;

pub use anim::ease::Ease;
pub use anim::timing::{
    OVERLAY_DRIFT_DURATION_SEC, OVERLAY_DRIFT_TARGET_X_PX, OVERLAY_RETRACT_DURATION_SEC,
    OVERLAY_RETRACT_TARGET_X_PX, WipeSlot, WipeTransition, overlay_drift, overlay_retract,
    wipe_in, wipe_out,
};
pub use config::preset::{
    FieldConfig, LayoutPreset, PanelGeometry, TextAlign, TextRole, VerticalAnchor,
};
pub use config::table::{DEFAULT_STRAP_TYPE, FALLBACK_STRAP_TYPE, PresetTable};
pub use controller::machine::{StrapController, StrapPhase, VisibilityState};
pub use foundation::core::{Canvas, Paint, Point, Rect, Rgba8, Vec2};
pub use foundation::error::{StraplineError, StraplineResult};
pub use measure::text::{FontLibrary, ParleyTextMeasurer, TextMeasurer};
pub use render::describe::{
    AnimatedProperty, BlendMode, LineElement, LineRole, MASK_SOLID_WIDTH_PX, OVERLAY_ASSET_ROLE,
    OverlayElement, PanelElement, PropertyAnim, RenderDescription, RenderElement, ResolvedAnchorY,
    TextElement, WIPE_TRACK_WIDTH_PX, WipeMask, describe,
};
pub use signal::payload::{PlayoutSignal, StrapPayload};
