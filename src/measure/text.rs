use std::{collections::BTreeMap, sync::Arc};

use crate::foundation::error::{StraplineError, StraplineResult};

/// Measures the natural (unscaled, single-line) width of a text passage.
///
/// The controller needs the pre-scale width to derive autofit factors; the
/// seam lets hosts substitute the measurement of whatever text engine they
/// render with, and lets tests supply fixed widths.
pub trait TextMeasurer {
    /// Advance width in pixels of `text` shaped at `size_px` with the font
    /// registered under `font_role`.
    fn measure_width_px(
        &mut self,
        font_role: &str,
        size_px: f32,
        text: &str,
    ) -> StraplineResult<f64>;
}

#[derive(Clone, Debug)]
/// Font bytes keyed by role name, with a designated fallback role.
///
/// Fields reference fonts by role ("black", "bold"); a field naming an
/// unregistered role resolves to the fallback role, mirroring the
/// production template's regular-font fallback.
pub struct FontLibrary {
    fonts: BTreeMap<String, Arc<Vec<u8>>>,
    fallback_role: String,
}

impl FontLibrary {
    /// Empty library with `fallback_role` as the designated fallback.
    pub fn new(fallback_role: impl Into<String>) -> Self {
        Self {
            fonts: BTreeMap::new(),
            fallback_role: fallback_role.into(),
        }
    }

    /// Register `bytes` under `role`, replacing any previous registration.
    pub fn with_font(mut self, role: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.fonts.insert(role.into(), Arc::new(bytes));
        self
    }

    /// Resolve `role` to registered font bytes, falling back to the
    /// designated fallback role when `role` is unregistered.
    pub fn resolve(&self, role: &str) -> StraplineResult<(&str, &Arc<Vec<u8>>)> {
        if let Some((key, bytes)) = self.fonts.get_key_value(role) {
            return Ok((key.as_str(), bytes));
        }
        self.fonts
            .get_key_value(&self.fallback_role)
            .map(|(key, bytes)| (key.as_str(), bytes))
            .ok_or_else(|| {
                StraplineError::measure(format!(
                    "no font registered for role '{role}' and no fallback '{}'",
                    self.fallback_role
                ))
            })
    }

    /// Role name used when a requested role is unregistered.
    pub fn fallback_role(&self) -> &str {
        &self.fallback_role
    }

    /// Whether any fonts are registered.
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Iterate over registered `(role, bytes)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<Vec<u8>>)> {
        self.fonts.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct MeasureBrush;

/// Parley-backed [`TextMeasurer`].
///
/// Registers every library font up front and shapes each passage with no
/// max width, so the reported width is the natural single-line advance.
pub struct ParleyTextMeasurer {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<MeasureBrush>,
    families: BTreeMap<String, String>, // role -> registered family name
    fallback_role: String,
}

impl ParleyTextMeasurer {
    /// Build a measurer over `library`, registering each font with Parley.
    pub fn new(library: &FontLibrary) -> StraplineResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let mut families = BTreeMap::new();

        for (role, bytes) in library.iter() {
            let registered = font_ctx
                .collection
                .register_fonts(parley::fontique::Blob::from(bytes.as_ref().clone()), None);
            let family_id = registered.first().map(|(id, _)| *id).ok_or_else(|| {
                StraplineError::validation(format!(
                    "no font families registered from bytes for role '{role}'"
                ))
            })?;
            let family_name = font_ctx
                .collection
                .family_name(family_id)
                .ok_or_else(|| {
                    StraplineError::validation(format!(
                        "registered font for role '{role}' has no family name"
                    ))
                })?
                .to_string();
            families.insert(role.to_string(), family_name);
        }

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            families,
            fallback_role: library.fallback_role().to_string(),
        })
    }

    fn family_for(&self, role: &str) -> StraplineResult<String> {
        if let Some(family) = self.families.get(role) {
            return Ok(family.clone());
        }
        self.families
            .get(&self.fallback_role)
            .cloned()
            .ok_or_else(|| {
                StraplineError::measure(format!(
                    "no font registered for role '{role}' and no fallback '{}'",
                    self.fallback_role
                ))
            })
    }
}

impl TextMeasurer for ParleyTextMeasurer {
    fn measure_width_px(
        &mut self,
        font_role: &str,
        size_px: f32,
        text: &str,
    ) -> StraplineResult<f64> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(StraplineError::validation(
                "text size_px must be finite and > 0",
            ));
        }
        if text.is_empty() {
            return Ok(0.0);
        }

        let family_name = self.family_for(font_role)?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(MeasureBrush));

        let mut layout: parley::Layout<MeasureBrush> = builder.build(text);
        layout.break_all_lines(None);

        Ok(f64::from(layout.width()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/measure/text.rs"]
mod tests;
