//! Interfaces to the environment hosting the drop edges.
//!
//! The resolver and corrector are pure; everything they read or trigger
//! outside themselves goes through these traits. A host typically owns the
//! layout, the drag sessions and the rendered elements, and implements
//! [`DockHost`] once for the whole dock.

use crate::layout::{LayoutTree, NodeId};
use crate::session::{DockId, DragSessionStore, DragSource};
use crate::types::{DropDirection, TabGroup};
use dockdrop_core::geometry::Rect;
use dockdrop_core::math::Vec2;

/// Measures drop-edge rects.
pub trait GeometrySource {
    /// Current bounding rect of the drop edge over `panel`.
    ///
    /// Called on every pointer event; implementations must not cache across
    /// layout changes. `None` when the panel is not rendered.
    fn drop_edge_rect(&self, panel: NodeId) -> Option<Rect>;
}

/// Looks up dock and float policy by group name.
pub trait GroupPolicy {
    fn group(&self, name: &str) -> TabGroup;
}

/// Drop highlight request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropIndicator {
    /// Highlight `target` for a drop in `direction`.
    Show {
        target: NodeId,
        direction: DropDirection,
        pointer: Vec2,
        panel_size: Option<Vec2>,
    },
    /// Remove the highlight.
    Clear,
}

/// Receives drop highlight requests.
pub trait DropIndicatorSink {
    /// `owner` is the panel whose drop edge issued the request; a `Clear`
    /// from one owner must not hide a highlight set by another.
    fn set_drop_indicator(&mut self, owner: NodeId, indicator: DropIndicator);
}

/// Performs the tree restructuring for a finished drop.
pub trait MoveCommitSink {
    fn dock_move(&mut self, source: DragSource, target: NodeId, direction: DropDirection);
}

/// Everything a [`DropEdge`](crate::edge::DropEdge) needs from its dock.
pub trait DockHost: GeometrySource + GroupPolicy + DropIndicatorSink + MoveCommitSink {
    fn dock_id(&self) -> DockId;

    fn layout(&self) -> &LayoutTree;

    fn drag_sessions(&self) -> &DragSessionStore;
}
