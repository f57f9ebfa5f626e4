//! Stateless geometry helpers: clamping, panel bounds and viewport centering.

use crate::types::{PanelBounds, PanelState};
use eframe::egui;

/// Clamps `value` into `[min, max]`.
///
/// Unlike [`f32::clamp`] this never panics: an inverted range resolves to `max`
/// and a NaN input resolves to `min`.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Computes the axis-aligned bounding box over `panels`.
///
/// Returns `None` for an empty collection.
pub fn compute_bounds<'a>(panels: impl IntoIterator<Item = &'a PanelState>) -> Option<PanelBounds> {
    panels.into_iter().fold(None, |acc, panel| {
        let panel_bounds = PanelBounds::of_panel(panel);
        Some(match acc {
            None => panel_bounds,
            Some(b) => PanelBounds {
                min_x: b.min_x.min(panel_bounds.min_x),
                min_y: b.min_y.min(panel_bounds.min_y),
                max_x: b.max_x.max(panel_bounds.max_x),
                max_y: b.max_y.max(panel_bounds.max_y),
            },
        })
    })
}

/// Computes the pan offset that puts the center of `bounds` at the center of a
/// viewport of `viewport_size`, at the given `scale`.
///
/// Panel coordinates are measured from the world canvas corner, so the world
/// point `half_extent` maps to screen `offset` (see [`crate::viewport::ViewportState`]).
pub fn compute_centered_offset(
    bounds: &PanelBounds,
    viewport_size: egui::Vec2,
    half_extent: f32,
    scale: f32,
) -> egui::Vec2 {
    let center = bounds.center();
    let centered = egui::vec2(center.x - half_extent, center.y - half_extent);
    viewport_size * 0.5 - centered * scale
}
