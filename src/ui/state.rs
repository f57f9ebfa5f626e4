//! Application state management structures.
//!
//! This module contains the persisted UI preferences and the main application struct.
//! Workspace geometry is deliberately never persisted: every session starts from a
//! freshly centered layout.

use crate::config::WorkspaceConfig;
use crate::content::{default_content, PanelContent, ProjectState};
use crate::types::PanelId;
use crate::workspace::Workspace;
use eframe::egui;
use serde::{Deserialize, Serialize};

/// Storage key under which the preferences are persisted.
pub const STORAGE_KEY: &str = "app_state";

/// User preferences that survive restarts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Preferences {
    /// Whether dark mode visuals are enabled
    pub dark_mode: bool,
    /// Whether the background grid is drawn
    pub show_grid: bool,
    /// Whether wheel zoom and background panning are locked
    pub locked: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            dark_mode: true,
            show_grid: true,
            locked: false,
        }
    }
}

/// The sub-applications hosted in the panels, keyed by panel.
pub struct PanelContents {
    entries: Vec<(PanelId, Box<dyn PanelContent>)>,
}

impl Default for PanelContents {
    fn default() -> Self {
        Self {
            entries: PanelId::ALL
                .iter()
                .map(|id| (*id, default_content(*id)))
                .collect(),
        }
    }
}

impl PanelContents {
    /// Header title of the content hosted in panel `id`.
    pub fn title(&self, id: PanelId) -> Option<&str> {
        self.entries
            .iter()
            .find(|(panel, _)| *panel == id)
            .map(|(_, content)| content.title())
    }

    /// Content hosted in panel `id`.
    pub fn get_mut(&mut self, id: PanelId) -> Option<&mut (dyn PanelContent + 'static)> {
        self.entries
            .iter_mut()
            .find(|(panel, _)| *panel == id)
            .map(|(_, content)| content.as_mut())
    }

    /// Replaces the content hosted in panel `id`.
    pub fn set(&mut self, id: PanelId, content: Box<dyn PanelContent>) {
        match self.entries.iter_mut().find(|(panel, _)| *panel == id) {
            Some(entry) => entry.1 = content,
            None => self.entries.push((id, content)),
        }
    }
}

/// The main application structure.
///
/// This struct implements the `eframe::App` trait and owns the workspace model, the
/// hosted panel contents and the persisted preferences.
#[derive(Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WorkspaceApp {
    /// Preferences persisted between sessions
    pub preferences: Preferences,
    /// Panels, viewport and the active drag session
    #[serde(skip)]
    pub workspace: Workspace,
    /// Project data passed through to the panel contents
    #[serde(skip)]
    pub project: ProjectState,
    /// Sub-applications rendered inside the panels
    #[serde(skip)]
    pub contents: PanelContents,
    /// Screen rectangle of the workspace viewport as of the last frame
    #[serde(skip)]
    pub canvas_rect: Option<egui::Rect>,
}

impl WorkspaceApp {
    /// Creates the app with an explicit configuration.
    pub fn with_config(config: WorkspaceConfig) -> Self {
        Self {
            workspace: Workspace::new(config),
            ..Default::default()
        }
    }

    /// Restores persisted preferences (if any) on top of a fresh workspace.
    pub fn restore(stored: Option<&str>, config: WorkspaceConfig) -> Self {
        let preferences = match stored.map(Self::from_json) {
            Some(Ok(app)) => app.preferences,
            Some(Err(err)) => {
                log::warn!("ignoring unreadable stored preferences: {err}");
                Preferences::default()
            }
            None => Preferences::default(),
        };
        let mut app = Self::with_config(config);
        app.workspace.set_locked(preferences.locked);
        app.preferences = preferences;
        app
    }

    /// Serializes the persisted part of the application state to JSON.
    ///
    /// # Returns
    ///
    /// A JSON string representation of the app state, or an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes application state from JSON.
    ///
    /// # Arguments
    ///
    /// * `json` - JSON string containing the serialized app state
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Flips the lock and keeps the preference in sync.
    pub fn toggle_lock(&mut self) {
        self.workspace.toggle_lock();
        self.preferences.locked = self.workspace.is_locked();
    }
}
