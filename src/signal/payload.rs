use crate::config::table::DEFAULT_STRAP_TYPE;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Text/state payload pushed by the playout host alongside the play flag.
///
/// Every field defaults so a host may send any subset; missing data is a
/// degraded render, never an error.
pub struct StrapPayload {
    /// Headline text; empty means the primary field is not rendered.
    #[serde(default)]
    pub primary_text: String,
    /// Supporting text; empty means the secondary field is not rendered.
    #[serde(default)]
    pub secondary_text: String,
    /// Strap type key into the preset table.
    #[serde(default = "default_strap_type")]
    pub strap_type: String,
    /// Seconds to stay on air before auto-hiding; absent or <= 0 means
    /// "stay until an explicit stop".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_duration_sec: Option<f64>,
}

fn default_strap_type() -> String {
    DEFAULT_STRAP_TYPE.to_string()
}

impl Default for StrapPayload {
    fn default() -> Self {
        Self {
            primary_text: String::new(),
            secondary_text: String::new(),
            strap_type: default_strap_type(),
            display_duration_sec: None,
        }
    }
}

impl StrapPayload {
    /// Copy of the payload with surrounding whitespace trimmed from all
    /// string fields, matching the playout hook's trim behavior.
    pub fn normalized(&self) -> Self {
        Self {
            primary_text: self.primary_text.trim().to_string(),
            secondary_text: self.secondary_text.trim().to_string(),
            strap_type: self.strap_type.trim().to_string(),
            display_duration_sec: self.display_duration_sec,
        }
    }

    /// Auto-hide duration, if one is actually in effect.
    pub fn effective_duration_sec(&self) -> Option<f64> {
        self.display_duration_sec
            .filter(|d| d.is_finite() && *d > 0.0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// One observation of the playout host's state.
///
/// Delivered at arbitrary frequency, including unchanged repeats; the
/// controller is level-triggered and only the latest value matters.
pub struct PlayoutSignal {
    /// Whether the host is playing the template.
    #[serde(default)]
    pub is_playing: bool,
    /// Current text/state payload.
    #[serde(default)]
    pub payload: StrapPayload,
}

#[cfg(test)]
#[path = "../../tests/unit/signal/payload.rs"]
mod tests;
