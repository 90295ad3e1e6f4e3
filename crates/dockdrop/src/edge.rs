//! Drop edge event handling.
//!
//! A [`DropEdge`] sits over one panel while something is being dragged and
//! turns drag events into drop indicator updates and, on release, a move
//! commit. It holds no state between events; the dock host supplies the
//! layout, the drag session and the measured rect each time.

use crate::direction::{DirectionRequest, DirectionResolver};
use crate::host::{DockHost, DropIndicator};
use crate::layout::NodeId;
use crate::types::{DirectionResolution, DropDirection};
use dockdrop_core::math::Vec2;
use dockdrop_core::profiling::profile_function;

/// Drop target covering one panel.
#[derive(Debug, Clone, Copy)]
pub struct DropEdge {
    panel: NodeId,
    drop_from_panel: NodeId,
    resolver: DirectionResolver,
}

impl DropEdge {
    /// `panel` is the panel under the edge; `drop_from_panel` is the panel
    /// whose group policy governs what is being dragged onto it.
    pub fn new(panel: NodeId, drop_from_panel: NodeId) -> Self {
        Self {
            panel,
            drop_from_panel,
            resolver: DirectionResolver::default(),
        }
    }

    pub fn with_resolver(mut self, resolver: DirectionResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn panel(&self) -> NodeId {
        self.panel
    }

    pub fn drop_from_panel(&self) -> NodeId {
        self.drop_from_panel
    }

    /// Gather the resolver input for the current drag.
    fn request<H: DockHost>(&self, host: &H, pointer: Vec2) -> Option<DirectionRequest> {
        let tree = host.layout();
        let (Some(panel), Some(from_panel)) =
            (tree.panel(self.panel), tree.panel(self.drop_from_panel))
        else {
            tracing::warn!(
                panel = ?self.panel,
                drop_from_panel = ?self.drop_from_panel,
                "drop edge refers to a missing panel"
            );
            return None;
        };

        let Some(rect) = host.drop_edge_rect(self.panel) else {
            tracing::debug!(panel = ?self.panel, "drop edge has no rect");
            return None;
        };

        let dragging_panel = host
            .drag_sessions()
            .get(host.dock_id())
            .and_then(|session| session.dragging_panel());

        // A lone tab counts as one, whatever its owner holds
        let source_tab_count = dragging_panel
            .and_then(|id| tree.panel(id))
            .map_or(1, |dragged| dragged.tabs.len());

        Some(DirectionRequest {
            pointer,
            rect,
            floating_source: dragging_panel.is_some_and(|id| tree.is_floating(id)),
            from_group: host.group(&from_panel.group),
            to_group: host.group(&panel.group),
            same_panel: dragging_panel == Some(self.panel),
            source_tab_count,
        })
    }

    /// Resolve and correct; `None` when there is nothing to drop here.
    fn target<H: DockHost>(&self, host: &H, resolution: &DirectionResolution) -> Option<(NodeId, DropDirection)> {
        let direction = resolution.direction?;
        let depth = resolution.corrected_depth(host.layout(), self.panel);
        let target = host.layout().ancestor(self.panel, depth);
        if target.is_none() {
            tracing::warn!(panel = ?self.panel, depth, "drop depth walks past the layout root");
        }
        target.map(|target| (target, direction))
    }

    /// Handle a pointer move over the edge.
    ///
    /// Returns true when the drag is accepted here.
    pub fn on_drag_over<H: DockHost>(&self, host: &mut H, pointer: Vec2) -> bool {
        profile_function!();

        let Some(request) = self.request(host, pointer) else {
            host.set_drop_indicator(self.panel, DropIndicator::Clear);
            return false;
        };
        let resolution = self.resolver.resolve(&request);

        // Floating panels only dock through the four edges
        if request.floating_source && !resolution.direction.is_some_and(|d| d.is_edge()) {
            return false;
        }

        let panel_locked = host
            .layout()
            .panel(self.drop_from_panel)
            .is_some_and(|p| p.panel_lock.is_some());
        let target = match self.target(host, &resolution) {
            Some((_, DropDirection::Float)) if panel_locked => None,
            target => target,
        };

        let Some((target, direction)) = target else {
            host.set_drop_indicator(self.panel, DropIndicator::Clear);
            return false;
        };

        let panel_size = host
            .drag_sessions()
            .get(host.dock_id())
            .and_then(|session| session.panel_size);

        host.set_drop_indicator(
            self.panel,
            DropIndicator::Show {
                target,
                direction,
                pointer,
                panel_size,
            },
        );
        true
    }

    /// Handle the pointer leaving the edge.
    pub fn on_drag_leave<H: DockHost>(&self, host: &mut H) {
        host.set_drop_indicator(self.panel, DropIndicator::Clear);
    }

    /// Handle a release over the edge.
    ///
    /// Returns true when a move was committed.
    pub fn on_drop<H: DockHost>(&self, host: &mut H, pointer: Vec2) -> bool {
        profile_function!();

        let Some(source) = host
            .drag_sessions()
            .get(host.dock_id())
            .and_then(|session| session.source())
        else {
            return false;
        };

        let Some(request) = self.request(host, pointer) else {
            return false;
        };
        let resolution = self.resolver.resolve(&request);
        let Some((target, direction)) = self.target(host, &resolution) else {
            return false;
        };

        tracing::debug!(?source, ?target, ?direction, "committing dock move");
        host.dock_move(source, target, direction);
        true
    }

    /// Drop any highlight this edge still owns, e.g. when its panel goes away.
    pub fn release<H: DockHost>(&self, host: &mut H) {
        host.set_drop_indicator(self.panel, DropIndicator::Clear);
    }
}
