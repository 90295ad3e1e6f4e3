//! Layout tree storage.
//!
//! Boxes and panels live in a generational arena and refer to each other by
//! [`NodeId`]. Every attached node appears exactly once in its parent's
//! `children`, and the mutation methods here are the only way to change
//! those links, so the two directions never disagree.

use crate::error::{DockError, DockResult};
use crate::types::DockMode;
use dockdrop_core::alloc::{Arena, IndexSlot};

/// Node identifier in the layout tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(IndexSlot);

/// Identifier of a tab, unique within a dock.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TabId(pub String);

impl From<&str> for TabId {
    fn from(id: &str) -> Self {
        TabId(id.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TabData {
    pub id: TabId,
    pub title: String,
}

impl TabData {
    pub fn new(id: impl Into<TabId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Size lock carried by a panel.
///
/// Locked panels refuse to be torn off into floating boxes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanelLock {
    pub min_width: f32,
    pub min_height: f32,
}

/// Leaf of the layout: a tab strip showing one of its tabs.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelData {
    parent: Option<NodeId>,
    pub tabs: Vec<TabData>,
    /// Name of the [`TabGroup`](crate::types::TabGroup) governing this panel.
    pub group: String,
    pub panel_lock: Option<PanelLock>,
}

impl PanelData {
    pub fn new(group: impl Into<String>) -> Self {
        Self {
            parent: None,
            tabs: Vec::new(),
            group: group.into(),
            panel_lock: None,
        }
    }

    pub fn with_tab(mut self, tab: TabData) -> Self {
        self.tabs.push(tab);
        self
    }

    pub fn with_panel_lock(mut self, lock: PanelLock) -> Self {
        self.panel_lock = Some(lock);
        self
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// Internal node: lays out its children along `mode`.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxData {
    parent: Option<NodeId>,
    pub mode: DockMode,
    children: Vec<NodeId>,
}

impl BoxData {
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutNode {
    Box(BoxData),
    Panel(PanelData),
}

impl LayoutNode {
    pub fn parent(&self) -> Option<NodeId> {
        match self {
            LayoutNode::Box(b) => b.parent,
            LayoutNode::Panel(p) => p.parent,
        }
    }

    fn set_parent(&mut self, parent: Option<NodeId>) {
        match self {
            LayoutNode::Box(b) => b.parent = parent,
            LayoutNode::Panel(p) => p.parent = parent,
        }
    }

    pub fn as_box(&self) -> Option<&BoxData> {
        match self {
            LayoutNode::Box(b) => Some(b),
            LayoutNode::Panel(_) => None,
        }
    }

    pub fn as_panel(&self) -> Option<&PanelData> {
        match self {
            LayoutNode::Panel(p) => Some(p),
            LayoutNode::Box(_) => None,
        }
    }
}

/// Arena-backed dock layout.
#[derive(Debug, Clone, Default)]
pub struct LayoutTree {
    nodes: Arena<LayoutNode>,
}

impl LayoutTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an unattached box.
    pub fn add_box(&mut self, mode: DockMode) -> NodeId {
        NodeId(self.nodes.insert(LayoutNode::Box(BoxData {
            parent: None,
            mode,
            children: Vec::new(),
        })))
    }

    /// Add an unattached panel. Any parent set on `panel` is discarded.
    pub fn add_panel(&mut self, mut panel: PanelData) -> NodeId {
        panel.parent = None;
        NodeId(self.nodes.insert(LayoutNode::Panel(panel)))
    }

    /// Attach `child` as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DockResult<()> {
        let len = self.children(parent).len();
        self.insert_child(parent, len, child)
    }

    /// Attach `child` to `parent` at `index` (clamped to the child count).
    pub fn insert_child(&mut self, parent: NodeId, index: usize, child: NodeId) -> DockResult<()> {
        let child_node = self.get(child).ok_or(DockError::NodeNotFound(child))?;
        if child_node.parent().is_some() {
            return Err(DockError::AlreadyParented(child));
        }
        self.box_data(parent)
            .ok_or(match self.get(parent) {
                Some(_) => DockError::NotABox(parent),
                None => DockError::NodeNotFound(parent),
            })?;

        let mut cursor = Some(parent);
        while let Some(id) = cursor {
            if id == child {
                return Err(DockError::CycleDetected(child));
            }
            cursor = self.parent(id);
        }

        if let Some(LayoutNode::Box(b)) = self.nodes.get_mut(parent.0) {
            let index = index.min(b.children.len());
            b.children.insert(index, child);
        }
        if let Some(node) = self.nodes.get_mut(child.0) {
            node.set_parent(Some(parent));
        }
        Ok(())
    }

    /// Unlink `child` from its parent. The child stays in the tree.
    pub fn detach(&mut self, child: NodeId) -> DockResult<()> {
        let parent = self
            .get(child)
            .ok_or(DockError::NodeNotFound(child))?
            .parent()
            .ok_or(DockError::NotParented(child))?;

        if let Some(LayoutNode::Box(b)) = self.nodes.get_mut(parent.0) {
            b.children.retain(|id| *id != child);
        }
        if let Some(node) = self.nodes.get_mut(child.0) {
            node.set_parent(None);
        }
        Ok(())
    }

    /// Remove a node. Children of a removed box become unattached roots.
    pub fn remove(&mut self, node: NodeId) -> DockResult<LayoutNode> {
        match self.detach(node) {
            Ok(()) | Err(DockError::NotParented(_)) => {}
            Err(e) => return Err(e),
        }

        let children = self.children(node).to_vec();
        for child in children {
            if let Some(child_node) = self.nodes.get_mut(child.0) {
                child_node.set_parent(None);
            }
        }

        self.nodes.remove(node.0).ok_or(DockError::NodeNotFound(node))
    }

    pub fn get(&self, node: NodeId) -> Option<&LayoutNode> {
        self.nodes.get(node.0)
    }

    pub fn panel(&self, node: NodeId) -> Option<&PanelData> {
        self.get(node).and_then(LayoutNode::as_panel)
    }

    pub fn panel_mut(&mut self, node: NodeId) -> Option<&mut PanelData> {
        match self.nodes.get_mut(node.0) {
            Some(LayoutNode::Panel(p)) => Some(p),
            _ => None,
        }
    }

    pub fn box_data(&self, node: NodeId) -> Option<&BoxData> {
        self.get(node).and_then(LayoutNode::as_box)
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.get(node).and_then(LayoutNode::parent)
    }

    /// Children of a box; empty for panels and stale handles.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.box_data(node).map(BoxData::children).unwrap_or(&[])
    }

    pub fn box_mode(&self, node: NodeId) -> Option<DockMode> {
        self.box_data(node).map(|b| b.mode)
    }

    /// Walk `hops` parent links up from `node`.
    pub fn ancestor(&self, node: NodeId, hops: u32) -> Option<NodeId> {
        let mut current = node;
        for _ in 0..hops {
            current = self.parent(current)?;
        }
        self.get(current).map(|_| current)
    }

    /// Check if `node` sits directly in a floating box.
    pub fn is_floating(&self, node: NodeId) -> bool {
        self.parent(node)
            .and_then(|parent| self.box_mode(parent))
            .is_some_and(|mode| mode == DockMode::Float)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
