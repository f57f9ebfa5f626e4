//! Workspace canvas input handling.
//!
//! Translates egui's raw pointer and scroll input into viewport-local workspace
//! events. Presses are only accepted inside the canvas; once a drag session holds the
//! pointer listeners, moves and releases are routed from anywhere in the window.

use super::state::WorkspaceApp;
use crate::drag::DragSession;
use crate::types::{HitTarget, PointerEvent};
use eframe::egui;

impl WorkspaceApp {
    /// Allocates the workspace canvas, processes its input and renders it.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI the canvas fills
    pub fn draw_workspace(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let canvas_rect = response.rect;
        self.canvas_rect = Some(canvas_rect);

        // The first real measurement centers the viewport once
        self.workspace.viewport_measured(canvas_rect.size());

        self.handle_pointer_events(ui, canvas_rect);
        self.handle_wheel_zoom(ui, canvas_rect);
        self.update_cursor_icon(ui, &response);

        self.render_workspace(ui, &painter, canvas_rect);
    }

    /// Feeds this frame's pointer events to the workspace in order.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI context
    /// * `canvas_rect` - Screen rectangle of the workspace viewport
    pub fn handle_pointer_events(&mut self, ui: &egui::Ui, canvas_rect: egui::Rect) {
        let origin = canvas_rect.min;
        let local = |pos: egui::Pos2| (pos - origin).to_pos2();
        let events = ui.input(|i| i.events.clone());

        for event in events {
            let captured = self.workspace.captures_pointer();
            let pointer_event = match event {
                egui::Event::PointerButton {
                    pos,
                    button,
                    pressed: true,
                    ..
                } => {
                    if !canvas_rect.contains(pos) {
                        continue;
                    }
                    let pos = local(pos);
                    PointerEvent::Down {
                        pos,
                        button: button.into(),
                        target: self.workspace.hit_test(pos),
                    }
                }
                egui::Event::PointerButton {
                    pos,
                    pressed: false,
                    ..
                } if captured => PointerEvent::Up { pos: local(pos) },
                egui::Event::PointerMoved(pos) if captured => PointerEvent::Move { pos: local(pos) },
                egui::Event::PointerGone | egui::Event::WindowFocused(false) if captured => {
                    PointerEvent::Cancel
                }
                _ => continue,
            };
            self.workspace.pointer(pointer_event);
        }
    }

    /// Zooms around the cursor on wheel input over the canvas.
    ///
    /// egui reports upward scrolling as positive `y`; the workspace follows the
    /// browser convention where a positive delta zooms out, so the sign is flipped.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI context
    /// * `canvas_rect` - Screen rectangle of the workspace viewport
    pub fn handle_wheel_zoom(&mut self, ui: &egui::Ui, canvas_rect: egui::Rect) {
        let (scroll_y, hover) = ui.input(|i| (i.raw_scroll_delta.y, i.pointer.hover_pos()));
        if scroll_y == 0.0 {
            return;
        }
        if let Some(mouse_pos) = hover.filter(|pos| canvas_rect.contains(*pos)) {
            let cursor = (mouse_pos - canvas_rect.min).to_pos2();
            self.workspace.wheel(-scroll_y, cursor);
        }
    }

    /// Shows a cursor matching what a press at the hover position would do.
    fn update_cursor_icon(&self, ui: &egui::Ui, response: &egui::Response) {
        let icon = if let Some(session) = self.workspace.drag_session() {
            match session {
                DragSession::ResizePanel { .. } => egui::CursorIcon::ResizeNwSe,
                _ => egui::CursorIcon::Grabbing,
            }
        } else if let Some(pos) = response.hover_pos() {
            match self.workspace.hit_test((pos - response.rect.min).to_pos2()) {
                HitTarget::ResizeHandle(_) => egui::CursorIcon::ResizeNwSe,
                HitTarget::DragHandle(_) => egui::CursorIcon::Grab,
                HitTarget::Background if !self.workspace.is_locked() => egui::CursorIcon::Grab,
                _ => return,
            }
        } else {
            return;
        };
        ui.ctx().set_cursor_icon(icon);
    }
}
