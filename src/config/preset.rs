use crate::{
    foundation::core::Paint,
    foundation::error::{StraplineError, StraplineResult},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A complete lower-third layout preset.
///
/// A preset is a pure data model keyed by strap type in a
/// [`crate::PresetTable`]. It carries the panel geometry, the wipe timing
/// constants, the autofit width limits, and the per-field text
/// configuration. Presets hold no behavior; the controller and the render
/// description derive everything from them.
pub struct LayoutPreset {
    /// Human-readable summary for authoring/debugging.
    pub description: String,
    /// Background panel placement.
    pub panel: PanelGeometry,
    /// Thickness of the two accent lines in pixels.
    pub line_thickness_px: f64,
    /// Duration of each element's entry wipe in seconds.
    pub wipe_in_sec: f64,
    /// Duration of each element's exit wipe in seconds.
    pub wipe_out_sec: f64,
    /// Stagger unit between consecutive element wipes in seconds.
    pub stagger_sec: f64,
    /// Maximum rendered width of the primary text before autofit kicks in.
    pub max_width_primary_px: f64,
    /// Maximum rendered width of the secondary text before autofit kicks in.
    pub max_width_secondary_px: f64,
    /// Ordered text field configuration; at most one field per role.
    pub fields: Vec<FieldConfig>,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Placement of the background panel, measured from the canvas bottom.
pub struct PanelGeometry {
    /// Distance from the canvas bottom edge to the panel bottom edge.
    pub bottom_px: f64,
    /// Panel height in pixels.
    pub height_px: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Configuration for one text field inside the strap panel.
pub struct FieldConfig {
    /// Which payload text this field renders.
    pub role: TextRole,
    /// Font role name resolved by the host's font library ("black", "bold", ...).
    pub font_role: String,
    /// Font size in pixels.
    pub size_px: f32,
    /// Horizontal alignment within the canvas.
    pub align: TextAlign,
    /// Fill style for the glyphs.
    pub paint: Paint,
    /// Horizontal inset from the aligned canvas edge; ignored for centered text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inset_px: Option<f64>,
    /// Vertical placement within the panel.
    pub anchor: VerticalAnchor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Payload text slot a field is bound to.
pub enum TextRole {
    /// The headline text.
    Primary,
    /// The smaller supporting text.
    Secondary,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Horizontal text alignment.
pub enum TextAlign {
    /// Inset from the left canvas edge.
    Left,
    /// Centered on the canvas.
    Center,
    /// Inset from the right canvas edge.
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Vertical placement of a text field relative to the panel edges.
///
/// Offsets may be negative; the production "name super" headline sits
/// slightly above the panel's top edge.
pub enum VerticalAnchor {
    /// Top edge of the text box, offset from the panel top edge.
    FromTop {
        /// Offset in pixels, positive downward.
        offset_px: f64,
    },
    /// Bottom edge of the text box, offset from the panel bottom edge.
    FromBottom {
        /// Offset in pixels, positive upward.
        offset_px: f64,
    },
}

impl LayoutPreset {
    /// Validate preset invariants.
    pub fn validate(&self) -> StraplineResult<()> {
        if !self.panel.bottom_px.is_finite() || self.panel.bottom_px < 0.0 {
            return Err(StraplineError::validation(
                "panel bottom_px must be finite and >= 0",
            ));
        }
        if !self.panel.height_px.is_finite() || self.panel.height_px <= 0.0 {
            return Err(StraplineError::validation(
                "panel height_px must be finite and > 0",
            ));
        }
        if !self.line_thickness_px.is_finite() || self.line_thickness_px <= 0.0 {
            return Err(StraplineError::validation(
                "line_thickness_px must be finite and > 0",
            ));
        }
        for (name, value) in [
            ("wipe_in_sec", self.wipe_in_sec),
            ("wipe_out_sec", self.wipe_out_sec),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(StraplineError::validation(format!(
                    "{name} must be finite and > 0",
                )));
            }
        }
        if !self.stagger_sec.is_finite() || self.stagger_sec < 0.0 {
            return Err(StraplineError::validation(
                "stagger_sec must be finite and >= 0",
            ));
        }
        for (name, value) in [
            ("max_width_primary_px", self.max_width_primary_px),
            ("max_width_secondary_px", self.max_width_secondary_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(StraplineError::validation(format!(
                    "{name} must be finite and > 0",
                )));
            }
        }

        let mut seen = [false; 2];
        for field in &self.fields {
            field.validate()?;
            let slot = match field.role {
                TextRole::Primary => 0,
                TextRole::Secondary => 1,
            };
            if seen[slot] {
                return Err(StraplineError::validation(format!(
                    "duplicate field for role {:?}",
                    field.role
                )));
            }
            seen[slot] = true;
        }

        Ok(())
    }

    /// Find the field configured for `role`, if the preset has one.
    pub fn field(&self, role: TextRole) -> Option<&FieldConfig> {
        self.fields.iter().find(|f| f.role == role)
    }

    /// Autofit width limit for `role`.
    pub fn max_width_px(&self, role: TextRole) -> f64 {
        match role {
            TextRole::Primary => self.max_width_primary_px,
            TextRole::Secondary => self.max_width_secondary_px,
        }
    }
}

impl FieldConfig {
    /// Validate field invariants.
    pub fn validate(&self) -> StraplineResult<()> {
        if self.font_role.trim().is_empty() {
            return Err(StraplineError::validation(
                "field font_role must be non-empty",
            ));
        }
        if !self.size_px.is_finite() || self.size_px <= 0.0 {
            return Err(StraplineError::validation(
                "field size_px must be finite and > 0",
            ));
        }
        if let Some(inset) = self.inset_px
            && (!inset.is_finite() || inset < 0.0)
        {
            return Err(StraplineError::validation(
                "field inset_px must be finite and >= 0 when set",
            ));
        }
        let offset = match self.anchor {
            VerticalAnchor::FromTop { offset_px } => offset_px,
            VerticalAnchor::FromBottom { offset_px } => offset_px,
        };
        if !offset.is_finite() {
            return Err(StraplineError::validation(
                "field anchor offset_px must be finite",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/preset.rs"]
mod tests;
