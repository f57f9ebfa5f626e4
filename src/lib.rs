//! # Panel Workspace
//!
//! An infinite, zoomable and pannable 2D workspace hosting independently movable
//! and resizable floating panels. Each panel renders a separate sub-application:
//! - **Modeling**: a direct-modeling viewport
//! - **Node Graph**: a node-graph editor
//!
//! ## Features
//! - Zoom-to-cursor that keeps the world point under the pointer fixed
//! - One gesture at a time: pan the canvas, move a panel or resize a panel
//! - Zoom-independent panel dragging (pointer deltas are converted to world units)
//! - One-shot centering on the main panel when the workspace first appears
//! - A lock mode that freezes wheel zoom and background panning

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod centering;
pub mod config;
pub mod constants;
pub mod content;
pub mod drag;
pub mod geometry;
pub mod hit;
pub mod layout;
mod types;
pub mod viewport;
pub mod workspace;
mod ui;

// Re-export public types and functions
pub use config::{ConfigError, WorkspaceConfig};
pub use types::*;
pub use ui::{Preferences, WorkspaceApp};
pub use workspace::Workspace;

/// Runs the workspace application with the given configuration.
///
/// This function initializes the egui application window and starts the main event loop.
/// Stored preferences from a previous session are restored; panel and viewport geometry
/// always start from a freshly centered layout.
///
/// # Returns
///
/// Returns `Ok(())` if the application runs successfully, or an `eframe::Error` if
/// initialization fails.
///
/// # Example
///
/// ```no_run
/// use panel_workspace::{run_app, WorkspaceConfig};
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app(WorkspaceConfig::default())
/// }
/// ```
pub fn run_app(config: WorkspaceConfig) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Panel Workspace",
        options,
        Box::new(move |cc| {
            // Cmd/Ctrl zoom keys drive the workspace zoom, not the UI scale
            cc.egui_ctx.options_mut(|o| o.zoom_with_keyboard = false);
            let stored = cc
                .storage
                .and_then(|storage| storage.get_string(ui::STORAGE_KEY));
            Ok(Box::new(WorkspaceApp::restore(stored.as_deref(), config)))
        }),
    )
}
