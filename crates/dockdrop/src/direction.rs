//! Drop direction classification.
//!
//! Turns a pointer position over a panel's drop-edge rect into a
//! [`DirectionResolution`]. The minimum distance from the pointer to any of
//! the four edges is compared against a ladder of thresholds: the closer to
//! an edge, the further up the tree the split is requested. Past the edge
//! zones the pointer either merges into the panel as tabs, floats the
//! dragged panel, or still splits at the nearest edge.

use crate::config::DropZoneConfig;
use crate::types::{DirectionResolution, DropDirection, TabGroup};
use dockdrop_core::geometry::Rect;
use dockdrop_core::math::Vec2;
use dockdrop_core::profiling::profile_function;

/// Everything the resolver looks at for one pointer sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionRequest {
    pub pointer: Vec2,
    /// Bounding rect of the drop target, measured for this sample.
    pub rect: Rect,
    /// The dragged panel currently lives in a floating box.
    pub floating_source: bool,
    /// Policy of the group being dragged from.
    pub from_group: TabGroup,
    /// Policy of the group being dragged onto.
    pub to_group: TabGroup,
    /// Source and target are the same panel.
    pub same_panel: bool,
    /// Number of tabs carried by the dragged panel.
    pub source_tab_count: usize,
}

impl DirectionRequest {
    pub fn new(pointer: Vec2, rect: Rect) -> Self {
        Self {
            pointer,
            rect,
            floating_source: false,
            from_group: TabGroup::default(),
            to_group: TabGroup::default(),
            same_panel: false,
            source_tab_count: 1,
        }
    }

    pub fn floating_source(mut self, floating_source: bool) -> Self {
        self.floating_source = floating_source;
        self
    }

    pub fn groups(mut self, from_group: TabGroup, to_group: TabGroup) -> Self {
        self.from_group = from_group;
        self.to_group = to_group;
        self
    }

    pub fn same_panel(mut self, same_panel: bool) -> Self {
        self.same_panel = same_panel;
        self
    }

    pub fn source_tab_count(mut self, count: usize) -> Self {
        self.source_tab_count = count;
        self
    }
}

/// Distance from the pointer to each edge of the target rect.
#[derive(Debug, Clone, Copy, PartialEq)]
struct EdgeDistances {
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
}

impl EdgeDistances {
    fn measure(pointer: Vec2, rect: &Rect) -> Self {
        Self {
            left: pointer.x - rect.left(),
            right: rect.right() - pointer.x,
            top: pointer.y - rect.top(),
            bottom: rect.bottom() - pointer.y,
        }
    }

    fn normalized(self, width_rate: f32, height_rate: f32) -> Self {
        Self {
            left: self.left / width_rate,
            right: self.right / width_rate,
            top: self.top / height_rate,
            bottom: self.bottom / height_rate,
        }
    }

    fn min(&self) -> f32 {
        nan_min(nan_min(self.left, self.right), nan_min(self.top, self.bottom))
    }

    /// Edge whose distance is exactly `m`, checked left, right, top, bottom.
    fn edge_at(&self, m: f32) -> Option<DropDirection> {
        if m == self.left {
            Some(DropDirection::Left)
        } else if m == self.right {
            Some(DropDirection::Right)
        } else if m == self.top {
            Some(DropDirection::Top)
        } else if m == self.bottom {
            Some(DropDirection::Bottom)
        } else {
            None
        }
    }
}

/// `f32::min` that lets NaN win, so malformed geometry stays malformed.
#[inline]
fn nan_min(a: f32, b: f32) -> f32 {
    if a.is_nan() || b.is_nan() {
        f32::NAN
    } else {
        a.min(b)
    }
}

/// Classifies pointer samples into drop directions.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectionResolver {
    config: DropZoneConfig,
}

impl DirectionResolver {
    pub fn new(config: DropZoneConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DropZoneConfig {
        &self.config
    }

    /// Resolve one pointer sample.
    ///
    /// Never fails: invalid positions, degenerate rects and disabled docking
    /// all come back as a resolution without a direction.
    pub fn resolve(&self, request: &DirectionRequest) -> DirectionResolution {
        profile_function!();

        let resolution = self.classify(request);
        tracing::trace!(
            pointer = ?request.pointer,
            direction = ?resolution.direction,
            depth = resolution.depth,
            "resolved drop direction"
        );
        resolution
    }

    fn classify(&self, request: &DirectionRequest) -> DirectionResolution {
        let thresholds = self.config.thresholds(request.floating_source);

        let mut distances = EdgeDistances::measure(request.pointer, &request.rect);
        if !request.floating_source {
            // Floating sources use the thresholds as absolute pixels
            let width_rate = nan_min(request.rect.width, self.config.max_zone_extent);
            let height_rate = nan_min(request.rect.height, self.config.max_zone_extent);
            distances = distances.normalized(width_rate, height_rate);
        }

        // Docking disabled: a distance past every edge zone, so only the
        // float branch can still produce a drop.
        let dock_disabled = request.from_group.disable_dock || request.same_panel;
        let m = if dock_disabled { 1.0 } else { distances.min() };

        let depth = if m < 0.0 {
            return DirectionResolution::none();
        } else if m < thresholds.outer {
            3
        } else if m < thresholds.inner {
            1
        } else if m < thresholds.split {
            0
        } else {
            if let Some(middle) = thresholds.middle
                && m < middle
                && !request.to_group.disable_dock
            {
                return DirectionResolution::middle(0);
            }
            if request.from_group.floatable.allows(request.source_tab_count) {
                return DirectionResolution::float();
            }
            0
        };

        if dock_disabled {
            return DirectionResolution::none();
        }

        match distances.edge_at(m) {
            Some(direction) => DirectionResolution::edge(direction, depth),
            // NaN distances match nothing
            None => DirectionResolution::none(),
        }
    }
}
