//! Shared application-wide constants.
//! Centralizes tweakable values used by the workspace geometry and interactions.
//! Most of these are defaults for [`crate::config::WorkspaceConfig`].

// Zoom
/// Smallest allowed viewport scale.
pub const MIN_ZOOM: f32 = 0.25;
/// Largest allowed viewport scale.
pub const MAX_ZOOM: f32 = 4.0;
/// Multiplicative zoom step applied per wheel tick.
pub const WHEEL_ZOOM_FACTOR: f32 = 1.1;
/// Multiplicative zoom step applied per zoom button press.
pub const BUTTON_ZOOM_FACTOR: f32 = 1.25;

// World canvas
/// Edge length of the square logical world canvas, in world units.
///
/// Only used to place the coordinate origin; panels may move outside it.
pub const WORLD_CANVAS_SIZE: f32 = 8000.0;

// Panel size limits (world units)
/// Minimum panel width.
pub const MIN_PANEL_WIDTH: f32 = 320.0;
/// Maximum panel width.
pub const MAX_PANEL_WIDTH: f32 = 2400.0;
/// Minimum panel height.
pub const MIN_PANEL_HEIGHT: f32 = 240.0;
/// Maximum panel height.
pub const MAX_PANEL_HEIGHT: f32 = 1600.0;

// Initial layout
/// Default width of the modeling viewport panel.
pub const MODELING_PANEL_WIDTH: f32 = 960.0;
/// Default height of the modeling viewport panel.
pub const MODELING_PANEL_HEIGHT: f32 = 640.0;
/// Default width of the node graph panel.
pub const NODE_GRAPH_PANEL_WIDTH: f32 = 720.0;
/// Default height of the node graph panel.
pub const NODE_GRAPH_PANEL_HEIGHT: f32 = 640.0;
/// Horizontal gap between the two initial panels.
pub const PANEL_GAP: f32 = 48.0;
/// Viewport size assumed before the first real measurement arrives.
pub const ASSUMED_VIEWPORT_SIZE: (f32, f32) = (1280.0, 800.0);

// Panel chrome (world units)
/// Height of the draggable header strip.
pub const HEADER_HEIGHT: f32 = 32.0;
/// Inset between the panel frame and its content area.
pub const PANEL_PADDING: f32 = 8.0;
/// Edge length of the square resize affordance in the bottom-right corner.
pub const RESIZE_HANDLE_SIZE: f32 = 16.0;
/// Corner radius for panel frames (in screen pixels).
pub const PANEL_CORNER_RADIUS: f32 = 6.0;

// Grid/drawing
/// Grid cell size in world units.
pub const GRID_SIZE: f32 = 40.0;
