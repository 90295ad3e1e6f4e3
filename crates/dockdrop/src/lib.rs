//! Dockdrop - drop target resolution for tree-structured dock layouts
//!
//! While a panel or tab is dragged over a dock, every pointer sample has to
//! become a discrete decision: split the hovered panel (or one of its
//! ancestors) on some side, merge into it as a tab, float the dragged panel,
//! or do nothing. This crate makes that decision:
//! - [`DirectionResolver`] classifies the pointer against the hovered rect
//! - [`DepthCorrector`] picks the ancestor box the split actually applies to
//! - [`DropEdge`] wires both to drag events through the [`DockHost`] traits
//!
//! ## Quick Start
//!
//! ```
//! use dockdrop::{DirectionRequest, DirectionResolver, DockMode, DropDirection, LayoutTree, PanelData};
//! use dockdrop_core::{geometry::Rect, math::Vec2};
//!
//! let mut tree = LayoutTree::new();
//! let root = tree.add_box(DockMode::Horizontal);
//! let panel = tree.add_panel(PanelData::new("default"));
//! tree.append_child(root, panel).unwrap();
//!
//! let request = DirectionRequest::new(Vec2::new(2.0, 150.0), Rect::new(0.0, 0.0, 400.0, 300.0));
//! let resolution = DirectionResolver::default().resolve(&request);
//! assert_eq!(resolution.direction, Some(DropDirection::Left));
//!
//! let depth = resolution.corrected_depth(&tree, panel);
//! assert_eq!(tree.ancestor(panel, depth), Some(panel));
//! ```

pub mod config;
pub mod depth;
pub mod direction;
pub mod edge;
pub mod error;
pub mod host;
pub mod layout;
pub mod registry;
pub mod session;
pub mod types;

pub use config::{DEFAULT_MAX_ZONE_EXTENT, DropThresholds, DropZoneConfig};
pub use depth::DepthCorrector;
pub use direction::{DirectionRequest, DirectionResolver};
pub use edge::DropEdge;
pub use error::{DockError, DockResult};
pub use host::{DockHost, DropIndicator, DropIndicatorSink, GeometrySource, GroupPolicy, MoveCommitSink};
pub use layout::{BoxData, LayoutNode, LayoutTree, NodeId, PanelData, PanelLock, TabData, TabId};
pub use registry::{DEFAULT_GROUP, GroupRegistry};
pub use session::{DockId, DragSession, DragSessionStore, DragSource};
pub use types::{DirectionResolution, DockMode, DropDirection, Floatable, TabGroup};
