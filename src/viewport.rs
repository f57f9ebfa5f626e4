//! Viewport pan/zoom state and zoom-to-cursor arithmetic.
//!
//! Screen positions are relative to the workspace viewport's top-left corner.
//! Panel coordinates are measured from the world canvas corner, so a world point `w`
//! lands on screen at `(w - H) * scale + offset`, where `H` is the world canvas
//! half-extent.

use crate::config::{WorkspaceConfig, ZoomLimits};
use crate::geometry::clamp;
use crate::types::ZoomDirection;
use eframe::egui;

/// Pan offset and zoom scale of the workspace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    /// Screen-space translation of the world origin
    pub offset: egui::Vec2,
    /// Screen pixels per world unit
    pub scale: f32,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            offset: egui::Vec2::ZERO,
            scale: 1.0,
        }
    }
}

/// Viewport state plus the limits and lock flag that govern how input changes it.
#[derive(Debug, Clone)]
pub struct Viewport {
    state: ViewportState,
    zoom_limits: ZoomLimits,
    wheel_zoom_factor: f32,
    button_zoom_factor: f32,
    half_extent: f32,
    /// When set, wheel zoom and background panning are ignored
    pub locked: bool,
}

impl Viewport {
    /// Creates a viewport at scale 1 with zero offset.
    pub fn new(config: &WorkspaceConfig) -> Self {
        Self {
            state: ViewportState::default(),
            zoom_limits: config.zoom,
            wheel_zoom_factor: config.wheel_zoom_factor,
            button_zoom_factor: config.button_zoom_factor,
            half_extent: config.world_half_extent(),
            locked: false,
        }
    }

    /// Current offset and scale.
    pub fn state(&self) -> ViewportState {
        self.state
    }

    /// Current pan offset.
    pub fn offset(&self) -> egui::Vec2 {
        self.state.offset
    }

    /// Current zoom scale.
    pub fn scale(&self) -> f32 {
        self.state.scale
    }

    /// Half of the world canvas extent.
    pub fn half_extent(&self) -> f32 {
        self.half_extent
    }

    /// Sets the pan offset directly.
    pub fn set_offset(&mut self, offset: egui::Vec2) {
        self.state.offset = offset;
    }

    /// Converts a viewport-local screen position to world coordinates.
    pub fn screen_to_world(&self, screen_pos: egui::Pos2) -> egui::Pos2 {
        (screen_pos - self.state.offset) / self.state.scale
            + egui::vec2(self.half_extent, self.half_extent)
    }

    /// Converts world coordinates to a viewport-local screen position.
    pub fn world_to_screen(&self, world_pos: egui::Pos2) -> egui::Pos2 {
        let centered = world_pos - egui::vec2(self.half_extent, self.half_extent);
        centered * self.state.scale + self.state.offset
    }

    /// Converts a world-space rectangle to a viewport-local screen rectangle.
    pub fn world_rect_to_screen(&self, rect: egui::Rect) -> egui::Rect {
        egui::Rect::from_min_max(self.world_to_screen(rect.min), self.world_to_screen(rect.max))
    }

    /// World-space rectangle visible in a viewport of `viewport_size`.
    pub fn visible_world_rect(&self, viewport_size: egui::Vec2) -> egui::Rect {
        egui::Rect::from_min_max(
            self.screen_to_world(egui::Pos2::ZERO),
            self.screen_to_world(viewport_size.to_pos2()),
        )
    }

    /// Sets the scale to `next_scale_raw` (clamped), keeping the world point under
    /// `anchor` fixed on screen.
    ///
    /// Returns whether the viewport changed.
    pub fn apply_zoom(&mut self, next_scale_raw: f32, anchor: egui::Pos2) -> bool {
        let next_scale = clamp(next_scale_raw, self.zoom_limits.min, self.zoom_limits.max);
        let before = self.state;

        let world_under_anchor = (anchor - before.offset).to_vec2() / before.scale;
        self.state = ViewportState {
            offset: anchor.to_vec2() - world_under_anchor * next_scale,
            scale: next_scale,
        };

        self.state != before
    }

    /// Handles a wheel event. Positive `delta_y` zooms out, negative zooms in,
    /// each tick by a constant multiplicative factor anchored at `cursor`.
    ///
    /// Ignored while locked. Returns whether the viewport changed.
    pub fn wheel(&mut self, delta_y: f32, cursor: egui::Pos2) -> bool {
        if self.locked || delta_y == 0.0 || !delta_y.is_finite() {
            return false;
        }
        let next = if delta_y > 0.0 {
            self.state.scale / self.wheel_zoom_factor
        } else {
            self.state.scale * self.wheel_zoom_factor
        };
        self.apply_zoom(next, cursor)
    }

    /// Zoom button action, anchored at the center of a viewport of `viewport_size`.
    ///
    /// Returns whether the viewport changed.
    pub fn zoom_step(&mut self, direction: ZoomDirection, viewport_size: egui::Vec2) -> bool {
        let next = match direction {
            ZoomDirection::In => self.state.scale * self.button_zoom_factor,
            ZoomDirection::Out => self.state.scale / self.button_zoom_factor,
        };
        self.apply_zoom(next, (viewport_size * 0.5).to_pos2())
    }

    /// Returns to scale 1, anchored at the viewport center.
    pub fn reset_zoom(&mut self, viewport_size: egui::Vec2) -> bool {
        self.apply_zoom(1.0, (viewport_size * 0.5).to_pos2())
    }

    /// CSS-equivalent transform of the world canvas wrapper:
    /// center the logical origin, translate by the offset, then scale.
    pub fn css_transform(&self) -> String {
        let h = self.half_extent;
        let ViewportState { offset, scale } = self.state;
        format!(
            "translate(-{h}px, -{h}px) translate({}px, {}px) scale({scale})",
            offset.x, offset.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-2;

    fn viewport_at(offset: egui::Vec2, scale: f32) -> Viewport {
        let mut viewport = Viewport::new(&WorkspaceConfig::default());
        viewport.state = ViewportState { offset, scale };
        viewport
    }

    fn centered_world(viewport: &Viewport, p: egui::Pos2) -> egui::Vec2 {
        (p - viewport.offset()).to_vec2() / viewport.scale()
    }

    #[test]
    fn screen_world_conversion_is_inverse() {
        let viewport = viewport_at(egui::vec2(120.0, -40.0), 1.75);
        let world = egui::pos2(4100.0, 3900.0);
        let back = viewport.screen_to_world(viewport.world_to_screen(world));
        assert!((back - world).length() < EPS);
    }

    #[test]
    fn world_origin_maps_to_offset() {
        let viewport = viewport_at(egui::vec2(300.0, 200.0), 2.0);
        let h = viewport.half_extent();
        assert_eq!(viewport.world_to_screen(egui::pos2(h, h)), egui::pos2(300.0, 200.0));
    }

    #[test]
    fn zoom_keeps_point_under_anchor() {
        let starts = [
            (egui::vec2(0.0, 0.0), 1.0),
            (egui::vec2(-250.0, 80.0), 0.5),
            (egui::vec2(640.0, 400.0), 3.0),
        ];
        let anchors = [egui::pos2(0.0, 0.0), egui::pos2(333.0, 777.0), egui::pos2(-50.0, 20.0)];
        let targets = [0.25, 0.8, 1.0, 2.5, 4.0];

        for (offset, scale) in starts {
            for anchor in anchors {
                for target in targets {
                    let mut viewport = viewport_at(offset, scale);
                    let before = centered_world(&viewport, anchor);
                    viewport.apply_zoom(target, anchor);
                    let after = centered_world(&viewport, anchor);
                    assert!(
                        (before - after).length() < EPS,
                        "anchor drifted from {before:?} to {after:?}"
                    );
                    assert_eq!(viewport.scale(), target);
                }
            }
        }
    }

    #[test]
    fn zoom_clamps_to_limits() {
        let mut viewport = viewport_at(egui::Vec2::ZERO, 1.0);
        viewport.apply_zoom(100.0, egui::pos2(10.0, 10.0));
        assert_eq!(viewport.scale(), crate::constants::MAX_ZOOM);
        viewport.apply_zoom(0.0001, egui::pos2(10.0, 10.0));
        assert_eq!(viewport.scale(), crate::constants::MIN_ZOOM);
        viewport.apply_zoom(-3.0, egui::pos2(10.0, 10.0));
        assert_eq!(viewport.scale(), crate::constants::MIN_ZOOM);
    }

    #[test]
    fn clamped_zoom_still_preserves_anchor() {
        let mut viewport = viewport_at(egui::vec2(50.0, 60.0), 2.0);
        let anchor = egui::pos2(400.0, 300.0);
        let before = centered_world(&viewport, anchor);
        viewport.apply_zoom(1000.0, anchor);
        assert!((centered_world(&viewport, anchor) - before).length() < EPS);
    }

    #[test]
    fn wheel_zoom_is_multiplicative() {
        let mut viewport = viewport_at(egui::Vec2::ZERO, 1.0);
        let cursor = egui::pos2(100.0, 100.0);
        assert!(viewport.wheel(-1.0, cursor));
        assert!(viewport.wheel(-120.0, cursor));
        let factor = crate::constants::WHEEL_ZOOM_FACTOR;
        assert!((viewport.scale() - factor * factor).abs() < EPS);

        assert!(viewport.wheel(3.0, cursor));
        assert!((viewport.scale() - factor).abs() < EPS);
    }

    #[test]
    fn zero_wheel_delta_is_ignored() {
        let mut viewport = viewport_at(egui::vec2(5.0, 5.0), 1.0);
        let before = viewport.state();
        assert!(!viewport.wheel(0.0, egui::pos2(1.0, 1.0)));
        assert_eq!(viewport.state(), before);
    }

    #[test]
    fn locked_viewport_ignores_wheel() {
        let mut viewport = viewport_at(egui::vec2(5.0, 5.0), 1.0);
        viewport.locked = true;
        let before = viewport.state();
        assert!(!viewport.wheel(-1.0, egui::pos2(1.0, 1.0)));
        assert_eq!(viewport.state(), before);
    }

    #[test]
    fn zoom_buttons_anchor_at_viewport_center() {
        let mut viewport = viewport_at(egui::vec2(10.0, 20.0), 1.0);
        let size = egui::vec2(800.0, 600.0);
        let center = egui::pos2(400.0, 300.0);
        let before = centered_world(&viewport, center);

        assert!(viewport.zoom_step(ZoomDirection::In, size));
        assert!((viewport.scale() - crate::constants::BUTTON_ZOOM_FACTOR).abs() < EPS);
        assert!((centered_world(&viewport, center) - before).length() < EPS);

        assert!(viewport.zoom_step(ZoomDirection::Out, size));
        assert!((viewport.scale() - 1.0).abs() < EPS);
    }

    #[test]
    fn zoom_buttons_work_while_locked() {
        let mut viewport = viewport_at(egui::Vec2::ZERO, 1.0);
        viewport.locked = true;
        assert!(viewport.zoom_step(ZoomDirection::In, egui::vec2(800.0, 600.0)));
    }

    #[test]
    fn zoom_at_limit_reports_no_change() {
        let mut viewport = viewport_at(egui::Vec2::ZERO, crate::constants::MAX_ZOOM);
        assert!(!viewport.zoom_step(ZoomDirection::In, egui::vec2(800.0, 600.0)));
    }

    #[test]
    fn css_transform_formats_state() {
        let viewport = viewport_at(egui::vec2(12.5, -3.0), 1.5);
        assert_eq!(
            viewport.css_transform(),
            "translate(-4000px, -4000px) translate(12.5px, -3px) scale(1.5)"
        );
    }

    #[test]
    fn visible_world_rect_tracks_scale() {
        let viewport = viewport_at(egui::Vec2::ZERO, 2.0);
        let rect = viewport.visible_world_rect(egui::vec2(800.0, 600.0));
        assert!((rect.width() - 400.0).abs() < EPS);
        assert!((rect.height() - 300.0).abs() < EPS);
    }
}
