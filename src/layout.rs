//! Panel layout store.
//!
//! Holds the authoritative position and size of every panel plus their paint order.
//! All mutation goes through [`PanelLayout::update`], which replaces the whole record
//! for one panel and enforces the size limits.

use crate::config::{PanelLimits, WorkspaceConfig};
use crate::geometry::{clamp, compute_bounds};
use crate::types::{PanelBounds, PanelId, PanelState};
use std::collections::BTreeMap;

/// Position/size of every panel, keyed by identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelLayout {
    panels: BTreeMap<PanelId, PanelState>,
    /// Paint order, bottom-most first
    order: Vec<PanelId>,
    limits: PanelLimits,
}

impl PanelLayout {
    /// Creates an empty layout enforcing `limits`.
    pub fn new(limits: PanelLimits) -> Self {
        Self {
            panels: BTreeMap::new(),
            order: Vec::new(),
            limits,
        }
    }

    /// Creates a layout from explicit panel records, painted in iteration order.
    pub fn from_panels(
        limits: PanelLimits,
        panels: impl IntoIterator<Item = (PanelId, PanelState)>,
    ) -> Self {
        let mut layout = Self::new(limits);
        for (id, state) in panels {
            layout.update(id, state);
        }
        layout
    }

    /// The default layout: modeling and node graph panels side by side,
    /// separated by the configured gap and centered on the world origin.
    pub fn initial(config: &WorkspaceConfig) -> Self {
        let half = config.world_half_extent();
        let limits = &config.panel_limits;
        let fit = |(w, h): (f32, f32)| {
            (
                clamp(w, limits.min_width, limits.max_width),
                clamp(h, limits.min_height, limits.max_height),
            )
        };
        let (mw, mh) = fit(config.modeling_size);
        let (gw, gh) = fit(config.node_graph_size);
        let left = half - (mw + config.panel_gap + gw) * 0.5;

        Self::from_panels(
            config.panel_limits,
            [
                (PanelId::Modeling, PanelState::new(left, half - mh * 0.5, mw, mh)),
                (
                    PanelId::NodeGraph,
                    PanelState::new(left + mw + config.panel_gap, half - gh * 0.5, gw, gh),
                ),
            ],
        )
    }

    /// Returns the current record for `id`, if that panel is present.
    pub fn get(&self, id: PanelId) -> Option<PanelState> {
        self.panels.get(&id).copied()
    }

    /// Replaces the full record for `id`, clamping its size into the limits.
    ///
    /// A panel that was not present is inserted on top of the paint order.
    pub fn update(&mut self, id: PanelId, state: PanelState) {
        let limits = &self.limits;
        let clamped = PanelState {
            width: clamp(state.width, limits.min_width, limits.max_width),
            height: clamp(state.height, limits.min_height, limits.max_height),
            ..state
        };
        if self.panels.insert(id, clamped).is_none() {
            self.order.push(id);
        }
    }

    /// Whether `id` is part of the collection.
    pub fn contains(&self, id: PanelId) -> bool {
        self.panels.contains_key(&id)
    }

    /// Number of panels.
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Whether the collection holds no panels.
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Size limits enforced on every update.
    pub fn limits(&self) -> &PanelLimits {
        &self.limits
    }

    /// Panel identifiers, bottom-most first.
    pub fn paint_order(&self) -> &[PanelId] {
        &self.order
    }

    /// Iterates panels in paint order, bottom-most first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (PanelId, PanelState)> + '_ {
        self.order
            .iter()
            .filter_map(|id| self.panels.get(id).map(|state| (*id, *state)))
    }

    /// Moves `id` to the top of the paint order. Returns whether the order changed.
    pub fn raise(&mut self, id: PanelId) -> bool {
        match self.order.iter().position(|p| *p == id) {
            Some(idx) if idx + 1 != self.order.len() => {
                let raised = self.order.remove(idx);
                self.order.push(raised);
                true
            }
            _ => false,
        }
    }

    /// Bounding box over every panel, or `None` when empty.
    pub fn bounds(&self) -> Option<PanelBounds> {
        compute_bounds(self.panels.values())
    }
}
