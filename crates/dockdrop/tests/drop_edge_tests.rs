//! Drop edge tests against an in-memory dock host.
//!
//! The host records every indicator request and move commit so the tests can
//! check what a drop edge asks its environment to do.

use dockdrop::{
    DockHost, DockId, DockMode, DragSession, DragSessionStore, DragSource, DropDirection, DropEdge,
    DropIndicator, DropIndicatorSink, Floatable, GeometrySource, GroupPolicy, GroupRegistry,
    LayoutTree, MoveCommitSink, NodeId, PanelData, PanelLock, TabData, TabGroup, TabId,
};
use dockdrop_core::alloc::HashMap;
use dockdrop_core::geometry::Rect;
use dockdrop_core::logging;
use dockdrop_core::math::Vec2;

const DOCK: DockId = DockId(7);

#[derive(Default)]
struct TestHost {
    tree: LayoutTree,
    groups: GroupRegistry,
    sessions: DragSessionStore,
    rects: HashMap<NodeId, Rect>,
    indicators: Vec<(NodeId, DropIndicator)>,
    moves: Vec<(DragSource, NodeId, DropDirection)>,
}

impl GeometrySource for TestHost {
    fn drop_edge_rect(&self, panel: NodeId) -> Option<Rect> {
        self.rects.get(&panel).copied()
    }
}

impl GroupPolicy for TestHost {
    fn group(&self, name: &str) -> TabGroup {
        self.groups.group(name)
    }
}

impl DropIndicatorSink for TestHost {
    fn set_drop_indicator(&mut self, owner: NodeId, indicator: DropIndicator) {
        self.indicators.push((owner, indicator));
    }
}

impl MoveCommitSink for TestHost {
    fn dock_move(&mut self, source: DragSource, target: NodeId, direction: DropDirection) {
        self.moves.push((source, target, direction));
    }
}

impl DockHost for TestHost {
    fn dock_id(&self) -> DockId {
        DOCK
    }

    fn layout(&self) -> &LayoutTree {
        &self.tree
    }

    fn drag_sessions(&self) -> &DragSessionStore {
        &self.sessions
    }
}

impl TestHost {
    fn last_indicator(&self) -> Option<DropIndicator> {
        self.indicators.last().map(|(_, indicator)| *indicator)
    }
}

struct Layout {
    host: TestHost,
    root: NodeId,
    left: NodeId,
    right: NodeId,
}

fn panel(group: &str, tabs: &[&str]) -> PanelData {
    tabs.iter()
        .fold(PanelData::new(group), |p, id| p.with_tab(TabData::new(*id, *id)))
}

/// Horizontal root holding two panels side by side, 400x300 each.
fn side_by_side() -> Layout {
    logging::init_for_tests();

    let mut host = TestHost::default();
    let root = host.tree.add_box(DockMode::Horizontal);
    let left = host.tree.add_panel(panel("default", &["a", "b"]));
    let right = host.tree.add_panel(panel("default", &["c"]));
    host.tree.append_child(root, left).unwrap();
    host.tree.append_child(root, right).unwrap();
    host.rects.insert(left, Rect::new(0.0, 0.0, 400.0, 300.0));
    host.rects.insert(right, Rect::new(400.0, 0.0, 400.0, 300.0));

    Layout {
        host,
        root,
        left,
        right,
    }
}

#[test]
fn test_drag_over_edge_shows_indicator() {
    let mut layout = side_by_side();
    let size = Vec2::new(400.0, 300.0);
    layout
        .host
        .sessions
        .begin(DOCK, DragSession::panel(layout.left).with_panel_size(size));

    let edge = DropEdge::new(layout.right, layout.left);
    let pointer = Vec2::new(405.0, 150.0);
    assert!(edge.on_drag_over(&mut layout.host, pointer));

    // Left edge of the right panel; it is not the first child, so no climbing
    assert_eq!(
        layout.host.last_indicator(),
        Some(DropIndicator::Show {
            target: layout.right,
            direction: DropDirection::Left,
            pointer,
            panel_size: Some(size),
        })
    );
    assert_eq!(layout.host.indicators[0].0, layout.right);
}

#[test]
fn test_drag_over_middle_merges() {
    let mut layout = side_by_side();
    layout.host.sessions.begin(DOCK, DragSession::panel(layout.left));

    let edge = DropEdge::new(layout.right, layout.left);
    assert!(edge.on_drag_over(&mut layout.host, Vec2::new(600.0, 150.0)));

    match layout.host.last_indicator() {
        Some(DropIndicator::Show {
            target, direction, ..
        }) => {
            assert_eq!(target, layout.right);
            assert_eq!(direction, DropDirection::Middle);
        }
        other => panic!("expected a middle indicator, got {other:?}"),
    }
}

#[test]
fn test_drag_over_self_clears() {
    let mut layout = side_by_side();
    layout.host.sessions.begin(DOCK, DragSession::panel(layout.left));

    let edge = DropEdge::new(layout.left, layout.left);
    assert!(!edge.on_drag_over(&mut layout.host, Vec2::new(3.0, 150.0)));
    assert_eq!(layout.host.last_indicator(), Some(DropIndicator::Clear));
}

#[test]
fn test_outer_edge_climbs_to_root() {
    let mut layout = side_by_side();
    layout.host.sessions.begin(DOCK, DragSession::panel(layout.right));

    // Top edge of the left panel: the vertical split wraps the whole root
    let edge = DropEdge::new(layout.left, layout.right);
    assert!(edge.on_drag_over(&mut layout.host, Vec2::new(200.0, 2.0)));

    match layout.host.last_indicator() {
        Some(DropIndicator::Show {
            target, direction, ..
        }) => {
            assert_eq!(direction, DropDirection::Top);
            assert_eq!(target, layout.root);
        }
        other => panic!("expected a top indicator, got {other:?}"),
    }
}

#[test]
fn test_locked_panel_cannot_float() {
    let mut layout = side_by_side();
    layout
        .host
        .groups
        .insert("default", TabGroup::new().floatable(Floatable::Always));
    layout.host.rects.insert(layout.right, Rect::new(400.0, 0.0, 2000.0, 2000.0));
    layout.host.sessions.begin(DOCK, DragSession::panel(layout.left));

    let edge = DropEdge::new(layout.right, layout.left);
    let center = Vec2::new(1400.0, 1000.0);

    assert!(edge.on_drag_over(&mut layout.host, center));
    assert!(matches!(
        layout.host.last_indicator(),
        Some(DropIndicator::Show {
            direction: DropDirection::Float,
            ..
        })
    ));

    if let Some(p) = layout.host.tree.panel_mut(layout.left) {
        p.panel_lock = Some(PanelLock::default());
    }
    assert!(!edge.on_drag_over(&mut layout.host, center));
    assert_eq!(layout.host.last_indicator(), Some(DropIndicator::Clear));
}

#[test]
fn test_floating_source_ignores_non_edge() {
    let mut host = TestHost::default();
    host.groups = GroupRegistry::new().with_fallback(TabGroup::new().floatable(Floatable::Always));
    let float_box = host.tree.add_box(DockMode::Float);
    let docked = host.tree.add_box(DockMode::Horizontal);
    let floating = host.tree.add_panel(panel("default", &["f"]));
    let target = host.tree.add_panel(panel("default", &["t"]));
    host.tree.append_child(float_box, floating).unwrap();
    host.tree.append_child(docked, target).unwrap();
    host.rects.insert(target, Rect::new(0.0, 0.0, 400.0, 300.0));
    host.sessions.begin(DOCK, DragSession::panel(floating));

    let edge = DropEdge::new(target, floating);

    // Far from every edge: past the pixel zones, resolves to float
    assert!(!edge.on_drag_over(&mut host, Vec2::new(200.0, 150.0)));
    assert!(host.indicators.is_empty());

    // 5px from the left edge docks
    assert!(edge.on_drag_over(&mut host, Vec2::new(5.0, 150.0)));
    assert!(matches!(
        host.last_indicator(),
        Some(DropIndicator::Show {
            direction: DropDirection::Left,
            ..
        })
    ));
}

#[test]
fn test_drop_commits_tab_move() {
    let mut layout = side_by_side();
    layout.host.sessions.begin(DOCK, DragSession::tab(layout.left, "b"));

    let edge = DropEdge::new(layout.right, layout.left);
    assert!(edge.on_drop(&mut layout.host, Vec2::new(795.0, 150.0)));

    assert_eq!(
        layout.host.moves,
        vec![(DragSource::Tab(TabId::from("b")), layout.right, DropDirection::Right)]
    );
}

#[test]
fn test_drop_commits_panel_move() {
    let mut layout = side_by_side();
    layout.host.sessions.begin(DOCK, DragSession::panel(layout.right));

    let edge = DropEdge::new(layout.left, layout.right);
    assert!(edge.on_drop(&mut layout.host, Vec2::new(200.0, 295.0)));

    let (source, target, direction) = layout.host.moves[0].clone();
    assert_eq!(source, DragSource::Panel(layout.right));
    assert_eq!(direction, DropDirection::Bottom);
    assert_eq!(target, layout.root);
}

#[test]
fn test_drop_without_session_is_ignored() {
    let mut layout = side_by_side();
    let edge = DropEdge::new(layout.right, layout.left);

    assert!(!edge.on_drop(&mut layout.host, Vec2::new(600.0, 150.0)));
    assert!(layout.host.moves.is_empty());
}

#[test]
fn test_drop_outside_is_ignored() {
    let mut layout = side_by_side();
    layout.host.sessions.begin(DOCK, DragSession::panel(layout.left));

    let edge = DropEdge::new(layout.right, layout.left);
    assert!(!edge.on_drop(&mut layout.host, Vec2::new(100.0, 150.0)));
    assert!(layout.host.moves.is_empty());
}

#[test]
fn test_missing_rect_clears() {
    let mut layout = side_by_side();
    layout.host.rects.clear();
    layout.host.sessions.begin(DOCK, DragSession::panel(layout.left));

    let edge = DropEdge::new(layout.right, layout.left);
    assert!(!edge.on_drag_over(&mut layout.host, Vec2::new(600.0, 150.0)));
    assert_eq!(layout.host.last_indicator(), Some(DropIndicator::Clear));
}

#[test]
fn test_leave_and_release_clear_own_indicator() {
    let mut layout = side_by_side();
    let edge = DropEdge::new(layout.right, layout.left);

    edge.on_drag_leave(&mut layout.host);
    edge.release(&mut layout.host);

    assert_eq!(
        layout.host.indicators,
        vec![
            (layout.right, DropIndicator::Clear),
            (layout.right, DropIndicator::Clear)
        ]
    );
}

#[test]
fn test_tab_splits_its_own_panel() {
    let mut layout = side_by_side();
    layout.host.sessions.begin(DOCK, DragSession::tab(layout.left, "b"));

    let edge = DropEdge::new(layout.left, layout.left);
    let pointer = Vec2::new(100.0, 150.0);
    assert!(edge.on_drag_over(&mut layout.host, pointer));
    assert_eq!(
        layout.host.last_indicator(),
        Some(DropIndicator::Show {
            target: layout.left,
            direction: DropDirection::Left,
            pointer,
            panel_size: None,
        })
    );

    assert!(edge.on_drop(&mut layout.host, pointer));
    assert_eq!(
        layout.host.moves,
        vec![(DragSource::Tab(TabId::from("b")), layout.left, DropDirection::Left)]
    );
}

#[test]
fn test_single_tab_group_tears_off_tab() {
    let mut layout = side_by_side();
    layout
        .host
        .groups
        .insert("default", TabGroup::new().floatable(Floatable::SingleTab));
    layout.host.rects.insert(layout.right, Rect::new(400.0, 0.0, 2000.0, 2000.0));

    let edge = DropEdge::new(layout.right, layout.left);
    let center = Vec2::new(1400.0, 1000.0);

    // The whole two-tab panel may not float, so the nearest edge splits
    layout.host.sessions.begin(DOCK, DragSession::panel(layout.left));
    assert!(edge.on_drag_over(&mut layout.host, center));
    assert!(matches!(
        layout.host.last_indicator(),
        Some(DropIndicator::Show {
            direction: DropDirection::Left,
            ..
        })
    ));

    // One tab out of the same panel does
    layout.host.sessions.begin(DOCK, DragSession::tab(layout.left, "a"));
    assert!(edge.on_drag_over(&mut layout.host, center));
    assert_eq!(
        layout.host.last_indicator(),
        Some(DropIndicator::Show {
            target: layout.right,
            direction: DropDirection::Float,
            pointer: center,
            panel_size: None,
        })
    );
}
