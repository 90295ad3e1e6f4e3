//! Drop zone thresholds.

/// Upper bounds of the zones along the minimum edge distance.
///
/// The innermost bound (exact zero) is fixed. Values are ratios of the
/// normalized rect extent for docked sources and absolute pixels for
/// floating sources.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropThresholds {
    /// Outer edge zone, requests depth 3.
    pub outer: f32,
    /// Inner edge zone, requests depth 1.
    pub inner: f32,
    /// Plain split zone, requests depth 0.
    pub split: f32,
    /// Tab merge zone. `None` disables it.
    pub middle: Option<f32>,
}

impl DropThresholds {
    pub const DOCKED: Self = Self {
        outer: 0.075,
        inner: 0.15,
        split: 0.3,
        middle: Some(0.75),
    };

    pub const FLOATING: Self = Self {
        outer: 10.0,
        inner: 20.0,
        split: 30.0,
        middle: None,
    };
}

/// Cap, in pixels, on the extent used to normalize docked edge distances.
pub const DEFAULT_MAX_ZONE_EXTENT: f32 = 500.0;

/// Drop zone configuration for the direction resolver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropZoneConfig {
    /// Ladder used when the dragged panel is docked.
    pub docked: DropThresholds,
    /// Ladder used when the dragged panel is floating.
    pub floating: DropThresholds,
    /// Rects larger than this behave like a rect of this size, so edge
    /// zones stop growing on very large panels.
    pub max_zone_extent: f32,
}

impl Default for DropZoneConfig {
    fn default() -> Self {
        Self {
            docked: DropThresholds::DOCKED,
            floating: DropThresholds::FLOATING,
            max_zone_extent: DEFAULT_MAX_ZONE_EXTENT,
        }
    }
}

impl DropZoneConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the docked ladder.
    pub fn docked(mut self, thresholds: DropThresholds) -> Self {
        self.docked = thresholds;
        self
    }

    /// Set the floating ladder.
    pub fn floating(mut self, thresholds: DropThresholds) -> Self {
        self.floating = thresholds;
        self
    }

    /// Set the normalization cap.
    pub fn max_zone_extent(mut self, extent: f32) -> Self {
        self.max_zone_extent = extent;
        self
    }

    pub fn thresholds(&self, floating_source: bool) -> &DropThresholds {
        if floating_source {
            &self.floating
        } else {
            &self.docked
        }
    }
}
