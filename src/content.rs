//! Interface to the sub-applications hosted inside panels.
//!
//! The workspace treats panel content as opaque: it hands each panel a child `Ui`
//! clipped to the panel's content area plus a shared, read-only [`ProjectState`].

use crate::types::PanelId;
use eframe::egui;
use serde::{Deserialize, Serialize};

/// Project data shared by the sub-applications. The workspace never inspects it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProjectState(serde_json::Value);

impl ProjectState {
    /// Wraps an arbitrary project document.
    pub fn new(document: serde_json::Value) -> Self {
        Self(document)
    }

    /// The wrapped document.
    pub fn document(&self) -> &serde_json::Value {
        &self.0
    }
}

/// A sub-application rendered inside a floating panel.
pub trait PanelContent {
    /// Title shown in the panel header.
    fn title(&self) -> &str;

    /// Draws the content into `ui`, which is clipped to the panel's content area.
    fn ui(&mut self, ui: &mut egui::Ui, project: &ProjectState);
}

/// Stand-in for the direct-modeling viewport.
#[derive(Debug, Default)]
pub struct ModelingViewport;

impl PanelContent for ModelingViewport {
    fn title(&self) -> &str {
        PanelId::Modeling.title()
    }

    fn ui(&mut self, ui: &mut egui::Ui, _project: &ProjectState) {
        let rect = ui.max_rect();
        let painter = ui.painter();
        let stroke = egui::Stroke::new(1.0, ui.visuals().weak_text_color());
        painter.line_segment(
            [
                egui::pos2(rect.min.x, rect.center().y),
                egui::pos2(rect.max.x, rect.center().y),
            ],
            stroke,
        );
        painter.line_segment(
            [
                egui::pos2(rect.center().x, rect.min.y),
                egui::pos2(rect.center().x, rect.max.y),
            ],
            stroke,
        );
        ui.label("3D viewport");
    }
}

/// Stand-in for the node-graph editor.
#[derive(Debug, Default)]
pub struct NodeGraphEditor;

impl PanelContent for NodeGraphEditor {
    fn title(&self) -> &str {
        PanelId::NodeGraph.title()
    }

    fn ui(&mut self, ui: &mut egui::Ui, _project: &ProjectState) {
        ui.label("Node graph");
    }
}

/// Builds the default content for `id`.
pub fn default_content(id: PanelId) -> Box<dyn PanelContent> {
    match id {
        PanelId::Modeling => Box::new(ModelingViewport),
        PanelId::NodeGraph => Box::new(NodeGraphEditor),
    }
}
