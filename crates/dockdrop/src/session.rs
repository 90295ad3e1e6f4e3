//! Drag session bookkeeping.
//!
//! A drag started in one dock is visible to every drop edge of that dock
//! through the [`DragSessionStore`], keyed by [`DockId`]. Sessions live for
//! exactly one gesture.

use crate::layout::{NodeId, TabId};
use dockdrop_core::alloc::HashMap;
use dockdrop_core::math::Vec2;

/// Identifier of a dock layout instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DockId(pub u32);

/// What a drop moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragSource {
    /// A single tab, taken out of its panel.
    Tab(TabId),
    /// A whole panel with all its tabs.
    Panel(NodeId),
}

/// Data carried by an in-progress drag.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DragSession {
    /// Panel being dragged, or the panel owning the dragged tab.
    pub panel: Option<NodeId>,
    /// Tab being dragged, when only one tab moves.
    pub tab: Option<TabId>,
    /// Size of the dragged panel, forwarded to the drop indicator.
    pub panel_size: Option<Vec2>,
}

impl DragSession {
    /// Session dragging a whole panel.
    pub fn panel(panel: NodeId) -> Self {
        Self {
            panel: Some(panel),
            ..Default::default()
        }
    }

    /// Session dragging one tab out of `panel`.
    pub fn tab(panel: NodeId, tab: impl Into<TabId>) -> Self {
        Self {
            panel: Some(panel),
            tab: Some(tab.into()),
            panel_size: None,
        }
    }

    pub fn with_panel_size(mut self, size: Vec2) -> Self {
        self.panel_size = Some(size);
        self
    }

    /// The panel moving as a whole, if any.
    ///
    /// A tab drag moves a single tab, so it has no dragged panel even though
    /// `panel` names the tab's owner.
    pub fn dragging_panel(&self) -> Option<NodeId> {
        self.tab.is_none().then_some(self.panel).flatten()
    }

    /// The entity a drop should move: the tab if there is one, else the panel.
    pub fn source(&self) -> Option<DragSource> {
        self.tab
            .clone()
            .map(DragSource::Tab)
            .or(self.panel.map(DragSource::Panel))
    }
}

/// Active drag sessions, one per dock.
#[derive(Debug, Default)]
pub struct DragSessionStore {
    sessions: HashMap<DockId, DragSession>,
}

impl DragSessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a drag in `dock`, replacing any session already there.
    pub fn begin(&mut self, dock: DockId, session: DragSession) {
        if self.sessions.insert(dock, session).is_some() {
            tracing::debug!(?dock, "replaced unfinished drag session");
        }
    }

    pub fn get(&self, dock: DockId) -> Option<&DragSession> {
        self.sessions.get(&dock)
    }

    /// Finish the drag in `dock` and hand back its session.
    pub fn end(&mut self, dock: DockId) -> Option<DragSession> {
        self.sessions.remove(&dock)
    }

    pub fn is_dragging(&self, dock: DockId) -> bool {
        self.sessions.contains_key(&dock)
    }

    /// Drop every session.
    pub fn clear(&mut self) {
        self.sessions.clear();
    }
}
