//! User interface components and rendering logic for the panel workspace.
//!
//! # Module Organization
//!
//! - `state` - Persisted preferences and the main WorkspaceApp
//! - `canvas` - Translating egui input into workspace pointer/wheel events
//! - `rendering` - Drawing the grid, panel chrome and hosted panel content

mod canvas;
mod rendering;
mod state;

pub use state::{PanelContents, Preferences, WorkspaceApp, STORAGE_KEY};

use crate::types::ZoomDirection;
use eframe::egui;

impl eframe::App for WorkspaceApp {
    /// Persist the preferences between restarts.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match self.to_json() {
            Ok(json) => {
                storage.set_string(STORAGE_KEY, json);
            }
            Err(err) => {
                log::error!("failed to serialize app state: {err}");
            }
        }
    }

    /// Main update function called by egui for each frame.
    ///
    /// Lays out the toolbar and the workspace canvas and handles keyboard shortcuts.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let visuals = if self.preferences.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        ctx.set_visuals(visuals);

        self.handle_shortcuts(ctx);

        egui::TopBottomPanel::top("top_toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::default())
            .show(ctx, |ui| {
                self.draw_workspace(ui);
            });
    }
}

impl WorkspaceApp {
    /// Handles zoom and lock keyboard shortcuts (Cmd/Ctrl with `+`, `-`, `0`, `L`).
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        // Consuming the keys keeps egui's own keyboard UI zoom from also reacting
        let pressed = |key: egui::Key| {
            ctx.input_mut(|i| {
                i.consume_key(egui::Modifiers::COMMAND, key)
                    || i.consume_key(egui::Modifiers::CTRL, key)
            })
        };

        let zoom_in = pressed(egui::Key::Plus) | pressed(egui::Key::Equals);
        let zoom_out = pressed(egui::Key::Minus);
        let reset = pressed(egui::Key::Num0);
        if zoom_in {
            self.workspace.zoom(ZoomDirection::In);
        } else if zoom_out {
            self.workspace.zoom(ZoomDirection::Out);
        } else if reset {
            self.workspace.reset_zoom();
        }
        if pressed(egui::Key::L) {
            self.toggle_lock();
        }
    }

    /// Draws the top toolbar: zoom controls, recenter, lock and display toggles.
    fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("−").on_hover_text("Zoom out").clicked() {
                self.workspace.zoom(ZoomDirection::Out);
            }
            ui.label(format!("{:.0}%", self.workspace.viewport().scale() * 100.0));
            if ui.button("+").on_hover_text("Zoom in").clicked() {
                self.workspace.zoom(ZoomDirection::In);
            }
            if ui.button("100%").clicked() {
                self.workspace.reset_zoom();
            }
            if ui.button("Center").on_hover_text("Center on the main panel").clicked() {
                self.workspace.recenter();
            }

            ui.separator();

            let mut locked = self.workspace.is_locked();
            if ui
                .checkbox(&mut locked, "Lock view")
                .on_hover_text("Ignore wheel zoom and background panning")
                .changed()
            {
                self.toggle_lock();
            }
            ui.checkbox(&mut self.preferences.show_grid, "Grid");
            ui.checkbox(&mut self.preferences.dark_mode, "Dark mode");
        });
    }
}
