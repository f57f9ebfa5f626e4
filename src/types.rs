//! Core data types for the panel workspace.
//!
//! This module defines the panel identifiers, panel geometry records, bounding boxes,
//! and the input events consumed by the workspace.

use eframe::egui;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a floating panel.
///
/// The set of panels is closed; panels are never created or destroyed at runtime.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PanelId {
    /// The direct-modeling viewport
    Modeling,
    /// The node-graph editor
    NodeGraph,
}

impl PanelId {
    /// Every panel identifier, in default paint order (bottom first).
    pub const ALL: [PanelId; 2] = [PanelId::Modeling, PanelId::NodeGraph];

    /// Human-readable panel title.
    pub fn title(self) -> &'static str {
        match self {
            PanelId::Modeling => "Modeling",
            PanelId::NodeGraph => "Node Graph",
        }
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Position and extent of one floating panel, in world units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PanelState {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl PanelState {
    /// Creates a panel record from its top-left corner and extent.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left corner.
    pub fn min(&self) -> egui::Pos2 {
        egui::pos2(self.x, self.y)
    }

    /// Bottom-right corner.
    pub fn max(&self) -> egui::Pos2 {
        egui::pos2(self.x + self.width, self.y + self.height)
    }

    /// The panel as a world-space rectangle.
    pub fn rect(&self) -> egui::Rect {
        egui::Rect::from_min_max(self.min(), self.max())
    }
}

/// Axis-aligned bounding box over one or more panels. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelBounds {
    /// Smallest left edge
    pub min_x: f32,
    /// Smallest top edge
    pub min_y: f32,
    /// Largest right edge
    pub max_x: f32,
    /// Largest bottom edge
    pub max_y: f32,
}

impl PanelBounds {
    /// Bounds covering exactly one panel.
    pub fn of_panel(panel: &PanelState) -> Self {
        Self {
            min_x: panel.x,
            min_y: panel.y,
            max_x: panel.x + panel.width,
            max_y: panel.y + panel.height,
        }
    }

    /// Center point of the box.
    pub fn center(&self) -> egui::Pos2 {
        egui::pos2(
            (self.min_x + self.max_x) * 0.5,
            (self.min_y + self.max_y) * 0.5,
        )
    }

    /// Width of the box.
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    /// Height of the box.
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
}

/// Pointer button that initiated a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Left mouse button, pen contact or single touch
    Primary,
    /// Middle mouse button
    Middle,
    /// Right mouse button
    Secondary,
    /// Any other button (back/forward, etc.)
    Other,
}

impl From<egui::PointerButton> for PointerButton {
    fn from(button: egui::PointerButton) -> Self {
        match button {
            egui::PointerButton::Primary => PointerButton::Primary,
            egui::PointerButton::Middle => PointerButton::Middle,
            egui::PointerButton::Secondary => PointerButton::Secondary,
            _ => PointerButton::Other,
        }
    }
}

/// What a pointer press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Empty workspace background
    Background,
    /// A region that handles its own input (panel content, toolbar)
    Exempt,
    /// A panel's frame outside its header, content and resize corner
    PanelSurface(PanelId),
    /// A panel's header strip
    DragHandle(PanelId),
    /// A panel's bottom-right resize corner
    ResizeHandle(PanelId),
}

/// Pointer input in viewport-local screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// A button was pressed
    Down {
        /// Pointer position
        pos: egui::Pos2,
        /// Which button was pressed
        button: PointerButton,
        /// What the press landed on
        target: HitTarget,
    },
    /// The pointer moved
    Move {
        /// Pointer position
        pos: egui::Pos2,
    },
    /// A button was released
    Up {
        /// Pointer position
        pos: egui::Pos2,
    },
    /// The gesture was interrupted (pointer left, touch cancel, focus lost)
    Cancel,
}

/// Direction of a discrete zoom step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Magnify
    In,
    /// Shrink
    Out,
}
