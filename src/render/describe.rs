use crate::{
    anim::ease::Ease,
    anim::timing::{self, WipeSlot},
    config::preset::{LayoutPreset, TextAlign, TextRole, VerticalAnchor},
    controller::machine::VisibilityState,
    foundation::core::{Canvas, Paint, Rect, Rgba8},
    signal::payload::StrapPayload,
};

/// Width of the off-screen track the wipe mask and accent lines travel.
pub const WIPE_TRACK_WIDTH_PX: f64 = 2200.0;

/// Width of the fully opaque span of the panel wipe mask; the mask fades
/// to transparent between here and the end of the track.
pub const MASK_SOLID_WIDTH_PX: f64 = 1920.0;

/// Asset role naming the decorative overlay image.
pub const OVERLAY_ASSET_ROLE: &str = "strap-overlay";

const PANEL_GRADIENT_TOP: Rgba8 = Rgba8::rgb(255, 255, 255);
const PANEL_GRADIENT_BOTTOM: Rgba8 = Rgba8::rgb(233, 232, 232);
const PANEL_OPACITY: f64 = 0.95;
const TOP_LINE_COLOR: Rgba8 = Rgba8::rgba(255, 255, 255, 128);
const BOTTOM_LINE_COLOR: Rgba8 = Rgba8::rgb(220, 0, 0);

#[derive(Clone, Debug, serde::Serialize)]
/// Declarative description of the strap for the host rendering engine.
///
/// Produced by [`describe`] whenever the derived state changes; the host
/// binds each element's animated property to its own motion primitives.
pub struct RenderDescription {
    /// Whether the elements are animating toward their shown targets.
    pub visible: bool,
    /// Elements in paint order.
    pub elements: Vec<RenderElement>,
}

#[derive(Clone, Debug, serde::Serialize)]
/// One visual element of the strap.
pub enum RenderElement {
    /// Accent line above or below the panel.
    Line(LineElement),
    /// Masked background panel.
    Panel(PanelElement),
    /// Decorative overlay image riding inside the panel.
    Overlay(OverlayElement),
    /// One configured text field with non-empty content.
    Text(TextElement),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
/// Which accent line an element is.
pub enum LineRole {
    /// The line above the panel; leads the entry wipe.
    Top,
    /// The line below the panel; leads the exit wipe.
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Animated property target for one element.
///
/// The machine is level-triggered, so only the target matters; the host's
/// animation engine tweens from wherever the property currently is.
pub enum AnimatedProperty {
    /// Horizontal scale with the transform origin at the left edge.
    ScaleX {
        /// Target scale factor.
        target: f64,
    },
    /// Horizontal offset of the panel wipe mask.
    MaskOffsetX {
        /// Target mask offset in pixels.
        target_px: f64,
    },
    /// Horizontal translation.
    TranslateX {
        /// Target offset in pixels.
        target_px: f64,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// One scheduled property animation.
pub struct PropertyAnim {
    /// Property and target.
    pub property: AnimatedProperty,
    /// Animation duration in seconds.
    pub duration_sec: f64,
    /// Start delay in seconds.
    pub delay_sec: f64,
    /// Easing curve.
    pub ease: Ease,
}

#[derive(Clone, Debug, serde::Serialize)]
/// Accent line geometry and animation.
pub struct LineElement {
    /// Which line this is.
    pub role: LineRole,
    /// Line bounds in canvas coordinates (top-left origin).
    pub rect: Rect,
    /// Line color.
    pub color: Rgba8,
    /// Scheduled wipe.
    pub anim: PropertyAnim,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Horizontal wipe mask over the panel.
pub struct WipeMask {
    /// Fully opaque span of the mask in pixels.
    pub solid_width_px: f64,
    /// Total travel width of the mask in pixels.
    pub track_width_px: f64,
}

#[derive(Clone, Debug, serde::Serialize)]
/// Background panel geometry, fill, and mask animation.
pub struct PanelElement {
    /// Panel bounds in canvas coordinates.
    pub rect: Rect,
    /// Panel fill.
    pub paint: Paint,
    /// Panel opacity in `[0, 1]`.
    pub opacity: f64,
    /// Wipe mask the panel (and the text inside it) is revealed through.
    pub mask: WipeMask,
    /// Scheduled mask wipe.
    pub anim: PropertyAnim,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
/// Compositing hint for the overlay image.
pub enum BlendMode {
    /// Standard source-over.
    Normal,
    /// Screen blend, as the production overlay uses.
    Screen,
}

#[derive(Clone, Debug, serde::Serialize)]
/// Decorative overlay image inside the panel.
pub struct OverlayElement {
    /// Asset role the host resolves to image data.
    pub asset_role: String,
    /// Bounds the image is clipped to (the panel rect).
    pub rect: Rect,
    /// Compositing hint.
    pub blend: BlendMode,
    /// Scheduled drift/retract motion.
    pub anim: PropertyAnim,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Vertical placement of a text box resolved to canvas coordinates.
pub enum ResolvedAnchorY {
    /// The text box's top edge sits at `y_px`.
    TopEdge {
        /// Canvas y coordinate in pixels.
        y_px: f64,
    },
    /// The text box's bottom edge sits at `y_px`.
    BottomEdge {
        /// Canvas y coordinate in pixels.
        y_px: f64,
    },
}

#[derive(Clone, Debug, serde::Serialize)]
/// One text field ready for the host text engine.
///
/// Text rides inside the panel mask and carries no wipe of its own; the
/// autofit factor is applied as a horizontal scale about the alignment
/// edge.
pub struct TextElement {
    /// Which payload slot this text came from.
    pub role: TextRole,
    /// The text content.
    pub content: String,
    /// Font role name for the host's font library.
    pub font_role: String,
    /// Font size in pixels.
    pub size_px: f32,
    /// Horizontal alignment; also the transform origin for `scale_x`.
    pub align: TextAlign,
    /// Glyph fill.
    pub paint: Paint,
    /// Horizontal reference coordinate: the aligned edge for left/right
    /// text, the centerline for centered text.
    pub x_px: f64,
    /// Resolved vertical placement.
    pub anchor_y: ResolvedAnchorY,
    /// Autofit scale factor in `(0, 1]`.
    pub scale_x: f64,
}

/// Derive the declarative render description from the current state.
///
/// Pure: same preset/payload/visibility/canvas always yields the same
/// description. Empty text fields are excluded entirely.
pub fn describe(
    preset: &LayoutPreset,
    payload: &StrapPayload,
    vis: &VisibilityState,
    canvas: Canvas,
) -> RenderDescription {
    let height = f64::from(canvas.height);
    let width = f64::from(canvas.width);
    let panel_top_y = height - (preset.panel.bottom_px + preset.panel.height_px);
    let panel_bottom_y = height - preset.panel.bottom_px;

    let line = |role: LineRole, y0: f64| {
        let slot = match role {
            LineRole::Top => WipeSlot::TopLine,
            LineRole::Bottom => WipeSlot::BottomLine,
        };
        let color = match role {
            LineRole::Top => TOP_LINE_COLOR,
            LineRole::Bottom => BOTTOM_LINE_COLOR,
        };
        RenderElement::Line(LineElement {
            role,
            rect: Rect::new(0.0, y0, WIPE_TRACK_WIDTH_PX, y0 + preset.line_thickness_px),
            color,
            anim: wipe_anim(
                preset,
                slot,
                vis.visible,
                AnimatedProperty::ScaleX {
                    target: if vis.visible { 1.0 } else { 0.0 },
                },
            ),
        })
    };

    let panel_rect = Rect::new(0.0, panel_top_y, width, panel_bottom_y);
    let panel = RenderElement::Panel(PanelElement {
        rect: panel_rect,
        paint: Paint::VerticalGradient {
            top: PANEL_GRADIENT_TOP,
            bottom: PANEL_GRADIENT_BOTTOM,
        },
        opacity: PANEL_OPACITY,
        mask: WipeMask {
            solid_width_px: MASK_SOLID_WIDTH_PX,
            track_width_px: WIPE_TRACK_WIDTH_PX,
        },
        anim: wipe_anim(
            preset,
            WipeSlot::Panel,
            vis.visible,
            AnimatedProperty::MaskOffsetX {
                target_px: if vis.visible { 0.0 } else { -WIPE_TRACK_WIDTH_PX },
            },
        ),
    });

    let overlay_transition = if vis.visible {
        timing::overlay_drift()
    } else {
        timing::overlay_retract()
    };
    let overlay = RenderElement::Overlay(OverlayElement {
        asset_role: OVERLAY_ASSET_ROLE.to_string(),
        rect: panel_rect,
        blend: BlendMode::Screen,
        anim: PropertyAnim {
            property: AnimatedProperty::TranslateX {
                target_px: if vis.visible {
                    timing::OVERLAY_DRIFT_TARGET_X_PX
                } else {
                    timing::OVERLAY_RETRACT_TARGET_X_PX
                },
            },
            duration_sec: overlay_transition.duration_sec,
            delay_sec: overlay_transition.delay_sec,
            ease: overlay_transition.ease,
        },
    });

    let mut elements = vec![line(LineRole::Top, panel_top_y - preset.line_thickness_px)];
    elements.push(panel);
    elements.push(overlay);

    for field in &preset.fields {
        let (content, scale_x) = match field.role {
            TextRole::Primary => (&payload.primary_text, vis.primary_scale),
            TextRole::Secondary => (&payload.secondary_text, vis.secondary_scale),
        };
        if content.is_empty() {
            continue;
        }

        let inset = field.inset_px.unwrap_or(0.0);
        let x_px = match field.align {
            TextAlign::Left => inset,
            TextAlign::Center => width / 2.0,
            TextAlign::Right => width - inset,
        };
        let anchor_y = match field.anchor {
            VerticalAnchor::FromTop { offset_px } => ResolvedAnchorY::TopEdge {
                y_px: panel_top_y + offset_px,
            },
            VerticalAnchor::FromBottom { offset_px } => ResolvedAnchorY::BottomEdge {
                y_px: panel_bottom_y - offset_px,
            },
        };

        elements.push(RenderElement::Text(TextElement {
            role: field.role,
            content: content.clone(),
            font_role: field.font_role.clone(),
            size_px: field.size_px,
            align: field.align,
            paint: field.paint,
            x_px,
            anchor_y,
            scale_x,
        }));
    }

    elements.push(line(LineRole::Bottom, panel_bottom_y));

    RenderDescription {
        visible: vis.visible,
        elements,
    }
}

fn wipe_anim(
    preset: &LayoutPreset,
    slot: WipeSlot,
    visible: bool,
    property: AnimatedProperty,
) -> PropertyAnim {
    let transition = if visible {
        timing::wipe_in(preset, slot)
    } else {
        timing::wipe_out(preset, slot)
    };
    PropertyAnim {
        property,
        duration_sec: transition.duration_sec,
        delay_sec: transition.delay_sec,
        ease: transition.ease,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/describe.rs"]
mod tests;
