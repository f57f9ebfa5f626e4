//! One-shot auto-centering of the viewport on the first viewport measurement.

use crate::geometry::compute_centered_offset;
use crate::layout::PanelLayout;
use crate::types::{PanelBounds, PanelId};
use crate::viewport::Viewport;
use eframe::egui;

/// Resolves what the viewport should center on: the `anchor` panel when present,
/// otherwise the bounding box of every panel.
pub fn centering_target(layout: &PanelLayout, anchor: PanelId) -> Option<PanelBounds> {
    layout
        .get(anchor)
        .map(|panel| PanelBounds::of_panel(&panel))
        .or_else(|| layout.bounds())
}

/// Centers `viewport` on the target for `anchor` at its current scale.
///
/// Returns whether there was anything to center on.
pub fn center_viewport(
    viewport: &mut Viewport,
    layout: &PanelLayout,
    anchor: PanelId,
    viewport_size: egui::Vec2,
) -> bool {
    match centering_target(layout, anchor) {
        Some(bounds) => {
            let offset = compute_centered_offset(
                &bounds,
                viewport_size,
                viewport.half_extent(),
                viewport.scale(),
            );
            viewport.set_offset(offset);
            true
        }
        None => false,
    }
}

/// Guard that lets the centering run at most once per workspace.
#[derive(Debug, Default)]
pub struct AutoCenter {
    done: bool,
}

impl AutoCenter {
    /// Creates an armed controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the controller has already fired or been disarmed.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Prevents any future centering, e.g. once the user starts interacting.
    pub fn disarm(&mut self) {
        self.done = true;
    }

    /// Reports a viewport measurement. The first measurement with a positive, finite
    /// size centers the viewport; every later call is a no-op.
    ///
    /// Returns whether the viewport offset was written.
    pub fn on_viewport_measured(
        &mut self,
        viewport_size: egui::Vec2,
        viewport: &mut Viewport,
        layout: &PanelLayout,
        anchor: PanelId,
    ) -> bool {
        let measured = viewport_size.x > 0.0
            && viewport_size.y > 0.0
            && viewport_size.x.is_finite()
            && viewport_size.y.is_finite();
        if self.done || !measured {
            return false;
        }
        self.done = true;

        let written = center_viewport(viewport, layout, anchor, viewport_size);
        if written {
            log::info!(
                "auto-centered viewport on {anchor} ({}x{}): offset {:?}",
                viewport_size.x,
                viewport_size.y,
                viewport.offset()
            );
        }
        written
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorkspaceConfig;
    use crate::types::PanelState;

    fn setup() -> (WorkspaceConfig, Viewport, PanelLayout) {
        let config = WorkspaceConfig::default();
        let viewport = Viewport::new(&config);
        let layout = PanelLayout::initial(&config);
        (config, viewport, layout)
    }

    #[test]
    fn centers_anchor_panel_on_first_measurement() {
        let (_, mut viewport, layout) = setup();
        let mut auto = AutoCenter::new();
        let size = egui::vec2(1000.0, 700.0);

        assert!(auto.on_viewport_measured(size, &mut viewport, &layout, PanelId::Modeling));
        let panel = layout.get(PanelId::Modeling).unwrap();
        let center_on_screen = viewport.world_to_screen(panel.rect().center());
        assert!((center_on_screen - egui::pos2(500.0, 350.0)).length() < 1e-2);
    }

    #[test]
    fn falls_back_to_bounds_of_all_panels() {
        let config = WorkspaceConfig::default();
        let mut viewport = Viewport::new(&config);
        let layout = PanelLayout::from_panels(
            config.panel_limits,
            [(PanelId::NodeGraph, PanelState::new(4000.0, 4000.0, 400.0, 300.0))],
        );
        let mut auto = AutoCenter::new();

        assert!(auto.on_viewport_measured(
            egui::vec2(800.0, 600.0),
            &mut viewport,
            &layout,
            PanelId::Modeling
        ));
        // Panel center (4200, 4150) is (200, 150) from the world origin.
        assert_eq!(viewport.offset(), egui::vec2(200.0, 150.0));
    }

    #[test]
    fn runs_only_once() {
        let (_, mut viewport, mut layout) = setup();
        let mut auto = AutoCenter::new();
        assert!(auto.on_viewport_measured(
            egui::vec2(800.0, 600.0),
            &mut viewport,
            &layout,
            PanelId::Modeling
        ));
        let first = viewport.offset();

        layout.update(PanelId::Modeling, PanelState::new(0.0, 0.0, 400.0, 400.0));
        assert!(!auto.on_viewport_measured(
            egui::vec2(1600.0, 1200.0),
            &mut viewport,
            &layout,
            PanelId::Modeling
        ));
        assert_eq!(viewport.offset(), first);
    }

    #[test]
    fn waits_for_a_real_measurement() {
        let (_, mut viewport, layout) = setup();
        let mut auto = AutoCenter::new();
        assert!(!auto.on_viewport_measured(egui::Vec2::ZERO, &mut viewport, &layout, PanelId::Modeling));
        assert!(!auto.is_done());
        assert!(auto.on_viewport_measured(
            egui::vec2(640.0, 480.0),
            &mut viewport,
            &layout,
            PanelId::Modeling
        ));
    }

    #[test]
    fn disarmed_controller_never_writes() {
        let (_, mut viewport, layout) = setup();
        let mut auto = AutoCenter::new();
        auto.disarm();
        let before = viewport.offset();
        assert!(!auto.on_viewport_measured(
            egui::vec2(800.0, 600.0),
            &mut viewport,
            &layout,
            PanelId::Modeling
        ));
        assert_eq!(viewport.offset(), before);
    }

    #[test]
    fn empty_layout_has_no_target() {
        let config = WorkspaceConfig::default();
        let layout = PanelLayout::new(config.panel_limits);
        assert!(centering_target(&layout, PanelId::Modeling).is_none());
    }
}
