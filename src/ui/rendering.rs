//! Workspace rendering: background grid, panel chrome and hosted panel content.
//!
//! Everything is drawn from the workspace model; nothing here writes geometry back.

use super::state::WorkspaceApp;
use crate::constants::{GRID_SIZE, HEADER_HEIGHT, PANEL_CORNER_RADIUS};
use crate::hit::PanelRegions;
use crate::types::{PanelId, PanelState};
use eframe::egui;
use eframe::epaint::StrokeKind;

impl WorkspaceApp {
    /// Renders the grid and then every panel bottom-most first.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI hosting the canvas (panel contents get child UIs of it)
    /// * `painter` - Painter clipped to the canvas
    /// * `canvas_rect` - Screen rectangle of the workspace viewport
    pub fn render_workspace(
        &mut self,
        ui: &mut egui::Ui,
        painter: &egui::Painter,
        canvas_rect: egui::Rect,
    ) {
        if self.preferences.show_grid {
            self.draw_grid(painter, canvas_rect);
        }

        let panels: Vec<(PanelId, PanelState)> = self.workspace.layout().iter().collect();
        for (id, panel) in panels {
            self.draw_panel(ui, painter, canvas_rect, id, &panel);
        }
    }

    /// Draws a zoom-aware grid in world units.
    ///
    /// Lines are skipped entirely once they would be closer than a few pixels apart.
    ///
    /// # Arguments
    ///
    /// * `painter` - The egui painter for drawing operations
    /// * `canvas_rect` - The screen-space rectangle defining visible area
    pub fn draw_grid(&self, painter: &egui::Painter, canvas_rect: egui::Rect) {
        let viewport = self.workspace.viewport();
        let screen_grid_size = GRID_SIZE * viewport.scale();
        if screen_grid_size < 4.0 {
            return;
        }

        let color = if self.preferences.dark_mode {
            egui::Color32::from_rgba_unmultiplied(128, 128, 128, 32)
        } else {
            egui::Color32::from_rgba_unmultiplied(64, 64, 64, 32)
        };
        let stroke = egui::Stroke::new(1.0, color);
        let origin = canvas_rect.min.to_vec2();
        let visible = viewport.visible_world_rect(canvas_rect.size());

        let mut x = (visible.min.x / GRID_SIZE).floor() * GRID_SIZE;
        while x <= visible.max.x {
            let screen_x = viewport.world_to_screen(egui::pos2(x, 0.0)).x + origin.x;
            painter.line_segment(
                [
                    egui::pos2(screen_x, canvas_rect.min.y),
                    egui::pos2(screen_x, canvas_rect.max.y),
                ],
                stroke,
            );
            x += GRID_SIZE;
        }

        let mut y = (visible.min.y / GRID_SIZE).floor() * GRID_SIZE;
        while y <= visible.max.y {
            let screen_y = viewport.world_to_screen(egui::pos2(0.0, y)).y + origin.y;
            painter.line_segment(
                [
                    egui::pos2(canvas_rect.min.x, screen_y),
                    egui::pos2(canvas_rect.max.x, screen_y),
                ],
                stroke,
            );
            y += GRID_SIZE;
        }
    }

    /// Draws one panel's frame, header, resize grip and content.
    fn draw_panel(
        &mut self,
        ui: &mut egui::Ui,
        painter: &egui::Painter,
        canvas_rect: egui::Rect,
        id: PanelId,
        panel: &PanelState,
    ) {
        let viewport = self.workspace.viewport();
        let origin = canvas_rect.min.to_vec2();
        let to_screen = |rect: egui::Rect| viewport.world_rect_to_screen(rect).translate(origin);

        let regions = PanelRegions::of(panel);
        let frame = to_screen(regions.frame);
        if !frame.intersects(canvas_rect) {
            return;
        }
        let header = to_screen(regions.header);
        let content_rect = to_screen(regions.content);
        let grip = to_screen(regions.resize_handle);

        let visuals = ui.visuals();
        let active = self
            .workspace
            .drag_session()
            .and_then(|session| session.panel())
            == Some(id);
        let radius = PANEL_CORNER_RADIUS * viewport.scale().min(1.0);

        painter.rect_filled(frame, radius, visuals.window_fill());
        painter.rect_filled(header, radius, visuals.faint_bg_color);
        let stroke = if active {
            egui::Stroke::new(2.0, visuals.selection.stroke.color)
        } else {
            visuals.window_stroke()
        };
        painter.rect_stroke(frame, radius, stroke, StrokeKind::Inside);

        let font_size = (14.0 * viewport.scale()).clamp(8.0, 24.0);
        let title_pos = egui::pos2(
            header.min.x + 8.0 * viewport.scale(),
            header.min.y + HEADER_HEIGHT * 0.5 * viewport.scale(),
        );
        let title = self.contents.title(id).unwrap_or(id.title()).to_owned();
        painter.text(
            title_pos,
            egui::Align2::LEFT_CENTER,
            title,
            egui::FontId::proportional(font_size),
            visuals.text_color(),
        );

        // Diagonal grip lines in the resize corner
        let grip_stroke = egui::Stroke::new(1.0, visuals.weak_text_color());
        for step in 1..=3 {
            let t = step as f32 / 4.0;
            painter.line_segment(
                [
                    egui::pos2(grip.max.x - grip.width() * t, grip.max.y),
                    egui::pos2(grip.max.x, grip.max.y - grip.height() * t),
                ],
                grip_stroke,
            );
        }

        let clip = content_rect.intersect(canvas_rect);
        if clip.is_positive() {
            if let Some(content) = self.contents.get_mut(id) {
                let mut child = ui.new_child(egui::UiBuilder::new().max_rect(content_rect));
                child.set_clip_rect(clip);
                content.ui(&mut child, &self.project);
            }
        }
    }
}
