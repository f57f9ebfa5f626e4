//! Workspace configuration.
//!
//! Every tunable has a default from [`crate::constants`]; a JSON file may override
//! any subset of them.

use crate::constants::*;
use crate::types::PanelId;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a [`WorkspaceConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// The config file is not valid JSON for this schema
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// The values parsed but violate a constraint
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Inclusive lower and upper limits for panel dimensions, in world units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PanelLimits {
    /// Minimum width
    pub min_width: f32,
    /// Maximum width
    pub max_width: f32,
    /// Minimum height
    pub min_height: f32,
    /// Maximum height
    pub max_height: f32,
}

impl Default for PanelLimits {
    fn default() -> Self {
        Self {
            min_width: MIN_PANEL_WIDTH,
            max_width: MAX_PANEL_WIDTH,
            min_height: MIN_PANEL_HEIGHT,
            max_height: MAX_PANEL_HEIGHT,
        }
    }
}

/// Inclusive scale limits for the viewport.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ZoomLimits {
    /// Smallest scale
    pub min: f32,
    /// Largest scale
    pub max: f32,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: MIN_ZOOM,
            max: MAX_ZOOM,
        }
    }
}

/// All tunables of the workspace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Allowed viewport scale range
    pub zoom: ZoomLimits,
    /// Multiplicative step per wheel tick
    pub wheel_zoom_factor: f32,
    /// Multiplicative step per zoom button press
    pub button_zoom_factor: f32,
    /// Allowed panel dimensions
    pub panel_limits: PanelLimits,
    /// Initial (width, height) of the modeling panel
    pub modeling_size: (f32, f32),
    /// Initial (width, height) of the node graph panel
    pub node_graph_size: (f32, f32),
    /// Horizontal gap between the initial panels
    pub panel_gap: f32,
    /// Edge length of the logical world canvas
    pub world_canvas_size: f32,
    /// Panel the viewport centers on when the workspace opens
    pub anchor_panel: PanelId,
    /// Viewport size used for the initial layout before a real measurement
    pub assumed_viewport_size: (f32, f32),
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            zoom: ZoomLimits::default(),
            wheel_zoom_factor: WHEEL_ZOOM_FACTOR,
            button_zoom_factor: BUTTON_ZOOM_FACTOR,
            panel_limits: PanelLimits::default(),
            modeling_size: (MODELING_PANEL_WIDTH, MODELING_PANEL_HEIGHT),
            node_graph_size: (NODE_GRAPH_PANEL_WIDTH, NODE_GRAPH_PANEL_HEIGHT),
            panel_gap: PANEL_GAP,
            world_canvas_size: WORLD_CANVAS_SIZE,
            anchor_panel: PanelId::Modeling,
            assumed_viewport_size: ASSUMED_VIEWPORT_SIZE,
        }
    }
}

impl WorkspaceConfig {
    /// Half of the world canvas extent; the logical origin of panel placement.
    pub fn world_half_extent(&self) -> f32 {
        self.world_canvas_size * 0.5
    }

    /// Parses and validates a config from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Serializes the config to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Checks that every limit is positive and every range is ordered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.zoom.min > 0.0 && self.zoom.min <= self.zoom.max) {
            return Err(ConfigError::Invalid(format!(
                "zoom range {}..{} must be positive and ordered",
                self.zoom.min, self.zoom.max
            )));
        }
        if self.wheel_zoom_factor <= 1.0 || self.button_zoom_factor <= 1.0 {
            return Err(ConfigError::Invalid(
                "zoom factors must be greater than 1".into(),
            ));
        }
        let limits = &self.panel_limits;
        if !(limits.min_width > 0.0 && limits.min_width <= limits.max_width) {
            return Err(ConfigError::Invalid(format!(
                "panel width range {}..{} must be positive and ordered",
                limits.min_width, limits.max_width
            )));
        }
        if !(limits.min_height > 0.0 && limits.min_height <= limits.max_height) {
            return Err(ConfigError::Invalid(format!(
                "panel height range {}..{} must be positive and ordered",
                limits.min_height, limits.max_height
            )));
        }
        if self.world_canvas_size <= 0.0 {
            return Err(ConfigError::Invalid(
                "world canvas size must be positive".into(),
            ));
        }
        if self.panel_gap < 0.0 {
            return Err(ConfigError::Invalid("panel gap must not be negative".into()));
        }
        let (width, height) = self.assumed_viewport_size;
        if !(width > 0.0 && height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "assumed viewport size {width}x{height} must be positive"
            )));
        }
        Ok(())
    }
}
