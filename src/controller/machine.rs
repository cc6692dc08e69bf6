use crate::{
    config::preset::{LayoutPreset, TextRole},
    config::table::PresetTable,
    foundation::core::Canvas,
    measure::text::TextMeasurer,
    render::describe::{RenderDescription, describe},
    signal::payload::{PlayoutSignal, StrapPayload},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Lifecycle phase of the strap.
///
/// `Entering` and `Exiting` are duration-bounded sub-states of the logical
/// shown state; they end when [`StrapController::tick`] passes the wipe
/// schedule's completion time.
pub enum StrapPhase {
    /// Off air, nothing scheduled.
    Hidden,
    /// Entry wipes are running.
    Entering,
    /// Fully on air.
    Visible,
    /// Exit wipes are running.
    Exiting,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Derived visual state consumed by the render description.
///
/// Exactly one writer (the controller); scales never exceed 1, since text
/// only shrinks to fit, never grows.
pub struct VisibilityState {
    /// Whether the strap is (or is animating) on air.
    pub visible: bool,
    /// Horizontal autofit factor for the primary text, in `(0, 1]`.
    pub primary_scale: f64,
    /// Horizontal autofit factor for the secondary text, in `(0, 1]`.
    pub secondary_scale: f64,
}

impl Default for VisibilityState {
    fn default() -> Self {
        Self {
            visible: false,
            primary_scale: 1.0,
            secondary_scale: 1.0,
        }
    }
}

/// Level-triggered strap state machine.
///
/// The host delivers [`PlayoutSignal`] observations via
/// [`StrapController::apply`] and advances time via
/// [`StrapController::tick`]; both take the host's monotonic clock in
/// seconds. The only scheduling primitive is a stored one-shot auto-hide
/// deadline: arming overwrites the previous deadline and stopping clears
/// it, so a stale timer can never fire after a re-show.
pub struct StrapController {
    table: PresetTable,
    measurer: Box<dyn TextMeasurer>,
    canvas: Canvas,
    phase: StrapPhase,
    state: VisibilityState,
    payload: StrapPayload,
    last_signal: Option<PlayoutSignal>,
    auto_hide_at_sec: Option<f64>,
    phase_ends_at_sec: Option<f64>,
}

impl StrapController {
    /// Build a controller over a preset table, a text measurer, and the
    /// output canvas.
    pub fn new(table: PresetTable, measurer: Box<dyn TextMeasurer>, canvas: Canvas) -> Self {
        Self {
            table,
            measurer,
            canvas,
            phase: StrapPhase::Hidden,
            state: VisibilityState::default(),
            payload: StrapPayload::default(),
            last_signal: None,
            auto_hide_at_sec: None,
            phase_ends_at_sec: None,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> StrapPhase {
        self.phase
    }

    /// Current derived visual state.
    pub fn visibility(&self) -> VisibilityState {
        self.state
    }

    /// The last applied (normalized) payload.
    pub fn active_payload(&self) -> &StrapPayload {
        &self.payload
    }

    /// Preset selected for the active payload's strap type.
    pub fn preset(&self) -> &LayoutPreset {
        self.table.lookup(&self.payload.strap_type)
    }

    /// Pending auto-hide deadline on the host clock, if one is armed.
    pub fn auto_hide_deadline_sec(&self) -> Option<f64> {
        self.auto_hide_at_sec
    }

    /// Apply one signal observation at host time `now_sec`.
    ///
    /// Repeats of the previous signal are no-ops: the state machine is
    /// level-triggered, and an unchanged signal must not re-arm the
    /// auto-hide deadline.
    #[tracing::instrument(skip(self, signal))]
    pub fn apply(&mut self, signal: &PlayoutSignal, now_sec: f64) {
        if self.last_signal.as_ref() == Some(signal) {
            return;
        }
        self.last_signal = Some(signal.clone());

        if signal.is_playing {
            self.show(signal.payload.normalized(), now_sec);
        } else {
            self.begin_exit(now_sec);
        }
    }

    /// Advance the machine to host time `now_sec`, resolving the auto-hide
    /// deadline and any entry/exit wipe completion.
    pub fn tick(&mut self, now_sec: f64) {
        if let Some(at) = self.auto_hide_at_sec
            && now_sec >= at
        {
            tracing::debug!(now_sec, "auto-hide deadline reached");
            self.begin_exit(now_sec);
        }

        if let Some(end) = self.phase_ends_at_sec
            && now_sec >= end
        {
            self.phase_ends_at_sec = None;
            match self.phase {
                StrapPhase::Entering => self.phase = StrapPhase::Visible,
                StrapPhase::Exiting => self.phase = StrapPhase::Hidden,
                StrapPhase::Hidden | StrapPhase::Visible => {}
            }
        }
    }

    /// Declarative description of what the host should draw right now.
    pub fn render_description(&self) -> RenderDescription {
        describe(self.preset(), &self.payload, &self.state, self.canvas)
    }

    fn show(&mut self, payload: StrapPayload, now_sec: f64) {
        let preset = self.table.lookup(&payload.strap_type).clone();

        let primary_scale = self.fit_scale(&preset, TextRole::Primary, &payload.primary_text);
        let secondary_scale = self.fit_scale(&preset, TextRole::Secondary, &payload.secondary_text);
        self.state = VisibilityState {
            visible: true,
            primary_scale,
            secondary_scale,
        };

        if matches!(self.phase, StrapPhase::Hidden | StrapPhase::Exiting) {
            self.phase = StrapPhase::Entering;
            self.phase_ends_at_sec =
                Some(now_sec + preset.wipe_in_sec + 2.0 * preset.stagger_sec);
            tracing::debug!(strap_type = %payload.strap_type, "strap entering");
        }

        // One-shot auto-hide: any previously armed deadline is replaced,
        // and an indefinite payload disarms it.
        self.auto_hide_at_sec = payload
            .effective_duration_sec()
            .map(|duration| now_sec + duration);

        self.payload = payload;
    }

    fn begin_exit(&mut self, now_sec: f64) {
        self.auto_hide_at_sec = None;
        if matches!(self.phase, StrapPhase::Hidden | StrapPhase::Exiting) {
            return;
        }

        let (wipe_out_sec, stagger_sec) = {
            let preset = self.preset();
            (preset.wipe_out_sec, preset.stagger_sec)
        };
        self.phase_ends_at_sec = Some(now_sec + wipe_out_sec + 2.0 * stagger_sec);
        self.phase = StrapPhase::Exiting;
        self.state.visible = false;
        tracing::debug!("strap exiting");
    }

    /// Autofit factor for one field: `min(1, max_width / natural_width)`.
    ///
    /// Empty text, a preset without the field, and measurement failure all
    /// leave the scale neutral; a failed measurement is retried on the
    /// next recompute rather than surfaced as an error.
    fn fit_scale(&mut self, preset: &LayoutPreset, role: TextRole, text: &str) -> f64 {
        if text.is_empty() {
            return 1.0;
        }
        let Some(field) = preset.field(role) else {
            return 1.0;
        };

        match self
            .measurer
            .measure_width_px(&field.font_role, field.size_px, text)
        {
            Ok(width) if width > 0.0 => (preset.max_width_px(role) / width).min(1.0),
            Ok(_) => 1.0,
            Err(err) => {
                tracing::warn!(%err, ?role, "text measurement failed, leaving scale neutral");
                1.0
            }
        }
    }
}

impl std::fmt::Debug for StrapController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrapController")
            .field("phase", &self.phase)
            .field("state", &self.state)
            .field("payload", &self.payload)
            .field("auto_hide_at_sec", &self.auto_hide_at_sec)
            .field("phase_ends_at_sec", &self.phase_ends_at_sec)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/controller/machine.rs"]
mod tests;
