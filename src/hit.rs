//! Classification of pointer presses into background, panel chrome and exempt regions.

use crate::constants::{HEADER_HEIGHT, PANEL_PADDING, RESIZE_HANDLE_SIZE};
use crate::layout::PanelLayout;
use crate::types::{HitTarget, PanelState};
use crate::viewport::Viewport;
use eframe::egui;

/// World-space regions of one panel's chrome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelRegions {
    /// Whole panel
    pub frame: egui::Rect,
    /// Header strip along the top edge
    pub header: egui::Rect,
    /// Area handed to the panel content
    pub content: egui::Rect,
    /// Square in the bottom-right corner
    pub resize_handle: egui::Rect,
}

impl PanelRegions {
    /// Splits `panel` into its chrome regions.
    pub fn of(panel: &PanelState) -> Self {
        let frame = panel.rect();
        let header = egui::Rect::from_min_max(
            frame.min,
            egui::pos2(frame.max.x, frame.min.y + HEADER_HEIGHT),
        );
        let content = egui::Rect::from_min_max(
            egui::pos2(frame.min.x + PANEL_PADDING, header.max.y + PANEL_PADDING),
            egui::pos2(
                frame.max.x - PANEL_PADDING,
                frame.max.y - PANEL_PADDING.max(RESIZE_HANDLE_SIZE),
            ),
        );
        let resize_handle = egui::Rect::from_min_max(
            frame.max - egui::vec2(RESIZE_HANDLE_SIZE, RESIZE_HANDLE_SIZE),
            frame.max,
        );
        Self {
            frame,
            header,
            content,
            resize_handle,
        }
    }
}

/// Classifies a viewport-local screen position, checking the top-most panel first.
pub fn hit_test(screen_pos: egui::Pos2, layout: &PanelLayout, viewport: &Viewport) -> HitTarget {
    let world = viewport.screen_to_world(screen_pos);
    for (id, panel) in layout.iter().rev() {
        let regions = PanelRegions::of(&panel);
        if !regions.frame.contains(world) {
            continue;
        }
        return if regions.resize_handle.contains(world) {
            HitTarget::ResizeHandle(id)
        } else if regions.header.contains(world) {
            HitTarget::DragHandle(id)
        } else if regions.content.contains(world) {
            HitTarget::Exempt
        } else {
            HitTarget::PanelSurface(id)
        };
    }
    HitTarget::Background
}
