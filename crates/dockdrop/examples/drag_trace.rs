//! Drag Trace - Logging the drop decisions of a simulated drag
//!
//! Builds a small layout (editor on the left, a vertical stack of tools on
//! the right), drags the bottom tool panel across the editor and logs every
//! indicator change, then drops it near the editor's left edge.
//!
//! Run with `RUST_LOG=dockdrop=trace` to also see every resolution.

use dockdrop::{
    DockHost, DockId, DockMode, DragSession, DragSessionStore, DragSource, DropDirection, DropEdge,
    DropIndicator, DropIndicatorSink, Floatable, GeometrySource, GroupPolicy, GroupRegistry,
    LayoutTree, MoveCommitSink, NodeId, PanelData, TabData, TabGroup,
};
use dockdrop_core::alloc::HashMap;
use dockdrop_core::geometry::Rect;
use dockdrop_core::logging;
use dockdrop_core::math::Vec2;
use dockdrop_core::profiling::{ProfilingBackend, init_profiling, new_frame};

struct TraceHost {
    tree: LayoutTree,
    groups: GroupRegistry,
    sessions: DragSessionStore,
    rects: HashMap<NodeId, Rect>,
    names: HashMap<NodeId, &'static str>,
}

impl TraceHost {
    fn name(&self, node: NodeId) -> &'static str {
        self.names.get(&node).copied().unwrap_or("<box>")
    }
}

impl GeometrySource for TraceHost {
    fn drop_edge_rect(&self, panel: NodeId) -> Option<Rect> {
        self.rects.get(&panel).copied()
    }
}

impl GroupPolicy for TraceHost {
    fn group(&self, name: &str) -> TabGroup {
        self.groups.group(name)
    }
}

impl DropIndicatorSink for TraceHost {
    fn set_drop_indicator(&mut self, owner: NodeId, indicator: DropIndicator) {
        match indicator {
            DropIndicator::Show {
                target,
                direction,
                pointer,
                ..
            } => tracing::info!(
                owner = self.name(owner),
                target = self.name(target),
                ?direction,
                x = pointer.x,
                y = pointer.y,
                "show drop indicator"
            ),
            DropIndicator::Clear => tracing::info!(owner = self.name(owner), "clear drop indicator"),
        }
    }
}

impl MoveCommitSink for TraceHost {
    fn dock_move(&mut self, source: DragSource, target: NodeId, direction: DropDirection) {
        tracing::info!(?source, target = self.name(target), ?direction, "dock move");
    }
}

impl DockHost for TraceHost {
    fn dock_id(&self) -> DockId {
        DockId(0)
    }

    fn layout(&self) -> &LayoutTree {
        &self.tree
    }

    fn drag_sessions(&self) -> &DragSessionStore {
        &self.sessions
    }
}

fn main() {
    logging::init();
    init_profiling(ProfilingBackend::InProcess);

    let mut tree = LayoutTree::new();
    let root = tree.add_box(DockMode::Horizontal);
    let tools = tree.add_box(DockMode::Vertical);
    let editor = tree.add_panel(
        PanelData::new("documents")
            .with_tab(TabData::new("main.rs", "main.rs"))
            .with_tab(TabData::new("lib.rs", "lib.rs")),
    );
    let outline = tree.add_panel(PanelData::new("tools").with_tab(TabData::new("outline", "Outline")));
    let terminal = tree.add_panel(PanelData::new("tools").with_tab(TabData::new("terminal", "Terminal")));

    let attached = [(root, editor), (root, tools), (tools, outline), (tools, terminal)]
        .into_iter()
        .try_for_each(|(parent, child)| tree.append_child(parent, child));
    if let Err(e) = attached {
        tracing::error!("Failed to build layout: {}", e);
        return;
    }

    let mut rects = HashMap::new();
    rects.insert(editor, Rect::new(0.0, 0.0, 800.0, 600.0));
    rects.insert(outline, Rect::new(800.0, 0.0, 300.0, 300.0));
    rects.insert(terminal, Rect::new(800.0, 300.0, 300.0, 300.0));

    let mut names = HashMap::new();
    names.insert(editor, "editor");
    names.insert(outline, "outline");
    names.insert(terminal, "terminal");

    let mut host = TraceHost {
        tree,
        groups: GroupRegistry::new()
            .with_group("documents", TabGroup::new())
            .with_group("tools", TabGroup::new().floatable(Floatable::SingleTab)),
        sessions: DragSessionStore::new(),
        rects,
        names,
    };

    let dock = host.dock_id();
    host.sessions.begin(
        dock,
        DragSession::panel(terminal).with_panel_size(Vec2::new(300.0, 300.0)),
    );

    let edge = DropEdge::new(editor, terminal);
    for x in [790.0, 760.0, 700.0, 400.0, 100.0, 40.0, 10.0] {
        new_frame();
        edge.on_drag_over(&mut host, Vec2::new(x, 300.0));
    }

    let dropped = edge.on_drop(&mut host, Vec2::new(10.0, 300.0));
    edge.on_drag_leave(&mut host);
    host.sessions.end(dock);

    tracing::info!(dropped, "drag finished");
}
