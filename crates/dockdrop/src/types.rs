//! Shared types for drop resolution.

/// Where a dragged panel or tab lands relative to the drop target.
///
/// "No valid drop" is expressed as `Option::<DropDirection>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropDirection {
    /// Split and insert before the target, horizontally.
    Left,
    /// Split and insert after the target, horizontally.
    Right,
    /// Split and insert before the target, vertically.
    Top,
    /// Split and insert after the target, vertically.
    Bottom,
    /// Merge into the target as tabs.
    Middle,
    /// Detach into a floating box.
    Float,
}

impl DropDirection {
    /// Check if this is one of the four split edges.
    pub fn is_edge(&self) -> bool {
        matches!(
            self,
            DropDirection::Left | DropDirection::Right | DropDirection::Top | DropDirection::Bottom
        )
    }

    /// Check if the new node goes after the existing one along the split axis.
    pub fn is_after(&self) -> bool {
        matches!(self, DropDirection::Right | DropDirection::Bottom)
    }

    /// Box orientation implied by this direction.
    pub fn dock_mode(&self) -> Option<DockMode> {
        match self {
            DropDirection::Left | DropDirection::Right => Some(DockMode::Horizontal),
            DropDirection::Top | DropDirection::Bottom => Some(DockMode::Vertical),
            DropDirection::Float => Some(DockMode::Float),
            DropDirection::Middle => None,
        }
    }
}

/// Orientation of a layout box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DockMode {
    /// Children laid out left to right.
    #[default]
    Horizontal,
    /// Children laid out top to bottom.
    Vertical,
    /// Floating panels, not laid out along an axis.
    Float,
}

/// Whether panels of a group may be torn off into floating boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Floatable {
    #[default]
    Never,
    Always,
    /// Only a panel carrying exactly one tab may float.
    SingleTab,
}

impl Floatable {
    pub fn is_floatable(&self) -> bool {
        !matches!(self, Floatable::Never)
    }

    /// Check if a panel carrying `tab_count` tabs may float.
    pub fn allows(&self, tab_count: usize) -> bool {
        match self {
            Floatable::Never => false,
            Floatable::Always => true,
            Floatable::SingleTab => tab_count == 1,
        }
    }
}

/// Dock and float policy shared by every panel in a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabGroup {
    /// Panels of this group cannot be split or merged into.
    pub disable_dock: bool,
    pub floatable: Floatable,
}

impl TabGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn disable_dock(mut self, disable_dock: bool) -> Self {
        self.disable_dock = disable_dock;
        self
    }

    pub fn floatable(mut self, floatable: Floatable) -> Self {
        self.floatable = floatable;
        self
    }
}

/// Output of the direction resolver.
///
/// `depth` is a request, not a tree position: 0 means "at the target",
/// 1 asks for roughly one or two levels up, 3 for three or four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectionResolution {
    pub direction: Option<DropDirection>,
    pub mode: Option<DockMode>,
    pub depth: u32,
}

impl DirectionResolution {
    /// No valid drop at this position.
    pub const fn none() -> Self {
        Self {
            direction: None,
            mode: None,
            depth: 0,
        }
    }

    pub const fn middle(depth: u32) -> Self {
        Self {
            direction: Some(DropDirection::Middle),
            mode: None,
            depth,
        }
    }

    pub const fn float() -> Self {
        Self {
            direction: Some(DropDirection::Float),
            mode: Some(DockMode::Float),
            depth: 0,
        }
    }

    /// Split along `direction`'s axis with the requested depth.
    pub fn edge(direction: DropDirection, depth: u32) -> Self {
        Self {
            direction: Some(direction),
            mode: direction.dock_mode(),
            depth,
        }
    }

    pub fn is_none(&self) -> bool {
        self.direction.is_none()
    }
}
