use std::collections::BTreeMap;

use crate::{
    config::preset::{
        FieldConfig, LayoutPreset, PanelGeometry, TextAlign, TextRole, VerticalAnchor,
    },
    foundation::core::{Paint, Rgba8},
    foundation::error::{StraplineError, StraplineResult},
};

/// Strap type requested when the payload does not name one.
pub const DEFAULT_STRAP_TYPE: &str = "name super";

/// Table key of the designated fallback preset in [`PresetTable::builtin`].
pub const FALLBACK_STRAP_TYPE: &str = "single line";

#[derive(Clone, Debug, PartialEq)]
/// Immutable mapping from strap type to [`LayoutPreset`].
///
/// Lookup is total by construction: [`PresetTable::new`] requires the
/// fallback key to resolve, and [`PresetTable::lookup`] answers every
/// strap type with either its preset or the fallback.
pub struct PresetTable {
    presets: BTreeMap<String, LayoutPreset>,
    fallback_key: String,
    fallback: LayoutPreset,
}

#[derive(serde::Serialize, serde::Deserialize)]
struct PresetTableFile {
    fallback: String,
    presets: BTreeMap<String, LayoutPreset>,
}

impl PresetTable {
    /// Build a table from presets and a fallback key.
    ///
    /// Every preset is validated and the fallback key must be present in
    /// `presets`; errors here are what make [`PresetTable::lookup`]
    /// infallible.
    pub fn new(
        presets: BTreeMap<String, LayoutPreset>,
        fallback_key: impl Into<String>,
    ) -> StraplineResult<Self> {
        let fallback_key = fallback_key.into();
        for (key, preset) in &presets {
            if key.trim().is_empty() {
                return Err(StraplineError::validation("preset key must be non-empty"));
            }
            preset.validate()?;
        }
        let fallback = presets
            .get(&fallback_key)
            .cloned()
            .ok_or_else(|| {
                StraplineError::validation(format!(
                    "fallback key '{fallback_key}' is not in the preset table"
                ))
            })?;
        Ok(Self {
            presets,
            fallback_key,
            fallback,
        })
    }

    /// The production preset table.
    pub fn builtin() -> Self {
        let blue_gradient = Paint::VerticalGradient {
            top: Rgba8::rgb(8, 115, 202),
            bottom: Rgba8::rgb(13, 45, 146),
        };
        let red_gradient = Paint::VerticalGradient {
            top: Rgba8::rgb(202, 8, 8),
            bottom: Rgba8::rgb(146, 13, 13),
        };

        let mut presets = BTreeMap::new();
        presets.insert(
            DEFAULT_STRAP_TYPE.to_string(),
            base_preset(
                "Two lines: primary text on top, smaller secondary text underneath",
                vec![
                    FieldConfig {
                        role: TextRole::Primary,
                        font_role: "black".to_string(),
                        size_px: 80.0,
                        align: TextAlign::Left,
                        paint: blue_gradient,
                        inset_px: Some(290.0),
                        anchor: VerticalAnchor::FromTop { offset_px: -3.0 },
                    },
                    FieldConfig {
                        role: TextRole::Secondary,
                        font_role: "bold".to_string(),
                        size_px: 38.0,
                        align: TextAlign::Left,
                        paint: Paint::Solid(Rgba8::rgb(87, 102, 135)),
                        inset_px: Some(292.0),
                        anchor: VerticalAnchor::FromBottom { offset_px: 6.0 },
                    },
                ],
            ),
        );
        presets.insert(
            FALLBACK_STRAP_TYPE.to_string(),
            base_preset(
                "Single line: primary text in the vertical centre of the strap",
                vec![FieldConfig {
                    role: TextRole::Primary,
                    font_role: "black".to_string(),
                    size_px: 96.0,
                    align: TextAlign::Left,
                    paint: blue_gradient,
                    inset_px: Some(290.0),
                    anchor: VerticalAnchor::FromBottom { offset_px: 5.0 },
                }],
            ),
        );
        presets.insert(
            "breaking news".to_string(),
            base_preset(
                "Single centered line with the breaking-news red gradient",
                vec![FieldConfig {
                    role: TextRole::Primary,
                    font_role: "black".to_string(),
                    size_px: 96.0,
                    align: TextAlign::Center,
                    paint: red_gradient,
                    inset_px: None,
                    anchor: VerticalAnchor::FromBottom { offset_px: 5.0 },
                }],
            ),
        );

        let fallback = presets[FALLBACK_STRAP_TYPE].clone();
        Self {
            presets,
            fallback_key: FALLBACK_STRAP_TYPE.to_string(),
            fallback,
        }
    }

    /// Resolve `strap_type` to a preset; unknown types get the fallback.
    pub fn lookup(&self, strap_type: &str) -> &LayoutPreset {
        match self.presets.get(strap_type) {
            Some(preset) => preset,
            None => {
                tracing::debug!(strap_type, "unknown strap type, using fallback preset");
                &self.fallback
            }
        }
    }

    /// Key of the fallback preset.
    pub fn fallback_key(&self) -> &str {
        &self.fallback_key
    }

    /// Iterate over the configured strap type keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }

    /// Load a table from its JSON form.
    pub fn from_json(json: &str) -> StraplineResult<Self> {
        let file: PresetTableFile = serde_json::from_str(json)
            .map_err(|e| StraplineError::serde(format!("invalid preset table JSON: {e}")))?;
        Self::new(file.presets, file.fallback)
    }

    /// Serialize the table to its JSON form.
    pub fn to_json(&self) -> StraplineResult<String> {
        let file = PresetTableFile {
            fallback: self.fallback_key.clone(),
            presets: self.presets.clone(),
        };
        serde_json::to_string_pretty(&file)
            .map_err(|e| StraplineError::serde(format!("preset table serialization: {e}")))
    }
}

fn base_preset(description: &str, fields: Vec<FieldConfig>) -> LayoutPreset {
    LayoutPreset {
        description: description.to_string(),
        panel: PanelGeometry {
            bottom_px: 68.0,
            height_px: 130.0,
        },
        line_thickness_px: 8.0,
        wipe_in_sec: 0.8,
        wipe_out_sec: 0.6,
        stagger_sec: 0.05,
        max_width_primary_px: 1200.0,
        max_width_secondary_px: 1200.0,
        fields,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/table.rs"]
mod tests;
