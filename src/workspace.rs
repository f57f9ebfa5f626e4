//! The workspace model: panels, viewport, the active drag session and the one-shot
//! centering, wired together behind the input operations the render layer calls.

use crate::centering::{center_viewport, AutoCenter};
use crate::config::WorkspaceConfig;
use crate::drag::{DragOutcome, DragSession, DragSessionManager};
use crate::hit::hit_test;
use crate::layout::PanelLayout;
use crate::types::{HitTarget, PanelId, PointerEvent, ZoomDirection};
use crate::viewport::Viewport;
use eframe::egui;

/// Infinite pan/zoom surface hosting the floating panels.
#[derive(Debug)]
pub struct Workspace {
    config: WorkspaceConfig,
    layout: PanelLayout,
    viewport: Viewport,
    drag: DragSessionManager,
    auto_center: AutoCenter,
    viewport_size: egui::Vec2,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(WorkspaceConfig::default())
    }
}

impl Workspace {
    /// Creates the initial layout, already centered on the anchor panel for the
    /// configured assumed viewport size so the first frame needs no jump.
    pub fn new(config: WorkspaceConfig) -> Self {
        let layout = PanelLayout::initial(&config);
        let mut viewport = Viewport::new(&config);
        let (w, h) = config.assumed_viewport_size;
        let viewport_size = egui::vec2(w, h);
        center_viewport(&mut viewport, &layout, config.anchor_panel, viewport_size);

        Self {
            config,
            layout,
            viewport,
            drag: DragSessionManager::new(),
            auto_center: AutoCenter::new(),
            viewport_size,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    /// Panel layout store.
    pub fn layout(&self) -> &PanelLayout {
        &self.layout
    }

    /// Viewport state and helpers.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The gesture in progress, if any.
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.session()
    }

    /// Whether global pointer move/up listeners should currently be routed here.
    pub fn captures_pointer(&self) -> bool {
        self.drag.listeners().is_active()
    }

    /// Last measured (or assumed) viewport size.
    pub fn viewport_size(&self) -> egui::Vec2 {
        self.viewport_size
    }

    /// Whether the auto-centering has fired or been disarmed.
    pub fn auto_center_done(&self) -> bool {
        self.auto_center.is_done()
    }

    /// Whether wheel zoom and background panning are suppressed.
    pub fn is_locked(&self) -> bool {
        self.viewport.locked
    }

    /// Sets the lock flag.
    pub fn set_locked(&mut self, locked: bool) {
        if self.viewport.locked != locked {
            log::debug!("viewport lock set to {locked}");
        }
        self.viewport.locked = locked;
    }

    /// Flips the lock flag.
    pub fn toggle_lock(&mut self) {
        self.set_locked(!self.viewport.locked);
    }

    /// Reports the on-screen size of the workspace viewport. The first positive
    /// measurement triggers the one-shot centering.
    ///
    /// Returns whether the viewport offset was written.
    pub fn viewport_measured(&mut self, size: egui::Vec2) -> bool {
        if size.x > 0.0 && size.y > 0.0 {
            self.viewport_size = size;
        }
        self.auto_center.on_viewport_measured(
            size,
            &mut self.viewport,
            &self.layout,
            self.config.anchor_panel,
        )
    }

    /// Classifies a viewport-local screen position.
    pub fn hit_test(&self, screen_pos: egui::Pos2) -> HitTarget {
        hit_test(screen_pos, &self.layout, &self.viewport)
    }

    /// Feeds one pointer event to the drag session manager.
    pub fn pointer(&mut self, event: PointerEvent) -> DragOutcome {
        let outcome = self.drag.dispatch(event, &mut self.viewport, &mut self.layout);
        if let DragOutcome::Started(_) = outcome {
            self.auto_center.disarm();
        }
        outcome
    }

    /// Wheel zoom anchored at `cursor`. Positive `delta_y` zooms out.
    pub fn wheel(&mut self, delta_y: f32, cursor: egui::Pos2) -> bool {
        let changed = self.viewport.wheel(delta_y, cursor);
        if changed {
            self.auto_center.disarm();
        }
        changed
    }

    /// Zoom button action anchored at the viewport center.
    pub fn zoom(&mut self, direction: ZoomDirection) -> bool {
        self.auto_center.disarm();
        self.viewport.zoom_step(direction, self.viewport_size)
    }

    /// Returns to 100% zoom anchored at the viewport center.
    pub fn reset_zoom(&mut self) -> bool {
        self.auto_center.disarm();
        self.viewport.reset_zoom(self.viewport_size)
    }

    /// Explicitly recenters on the anchor panel at the current scale.
    pub fn recenter(&mut self) -> bool {
        self.auto_center.disarm();
        center_viewport(
            &mut self.viewport,
            &self.layout,
            self.config.anchor_panel,
            self.viewport_size,
        )
    }

    /// Viewport-local screen rectangle of a panel.
    pub fn panel_screen_rect(&self, id: PanelId) -> Option<egui::Rect> {
        self.layout
            .get(id)
            .map(|panel| self.viewport.world_rect_to_screen(panel.rect()))
    }

    /// CSS-equivalent transform of the world canvas wrapper.
    pub fn css_transform(&self) -> String {
        self.viewport.css_transform()
    }

    /// CSS-equivalent inline style of a panel inside the transformed world canvas.
    pub fn panel_style(&self, id: PanelId) -> Option<String> {
        self.layout.get(id).map(|panel| {
            format!(
                "position: absolute; left: {}px; top: {}px; width: {}px; height: {}px",
                panel.x, panel.y, panel.width, panel.height
            )
        })
    }
}
