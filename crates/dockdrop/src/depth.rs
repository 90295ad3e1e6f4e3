//! Insertion depth correction.
//!
//! The resolver only requests a depth. Whether the tree can honor it depends
//! on how many ancestors there are and on which side of each same-axis
//! ancestor the dragged-over panel sits: splitting "after" a box is only
//! meaningful while the path up to it runs along the box's last children
//! (first children for "before"). The corrector walks up the parent links
//! and snaps the request down to the deepest depth the tree supports.

use crate::layout::{LayoutTree, NodeId};
use crate::types::{DirectionResolution, DockMode, DropDirection};
use dockdrop_core::profiling::profile_function;

/// Snaps requested depths to the shape of a layout tree.
#[derive(Debug, Clone, Copy)]
pub struct DepthCorrector<'a> {
    tree: &'a LayoutTree,
}

impl<'a> DepthCorrector<'a> {
    pub fn new(tree: &'a LayoutTree) -> Self {
        Self { tree }
    }

    /// Number of parent hops from `leaf` to the box the drop should split.
    ///
    /// Depths come in pairs (one hop for the box, one for the wrapper box a
    /// split there may need), so an unreachable request drops by two at a
    /// time. A request of 0 is returned as is.
    pub fn correct(&self, raw_depth: u32, mode: DockMode, direction: DropDirection, leaf: NodeId) -> u32 {
        profile_function!();

        if raw_depth == 0 {
            return 0;
        }

        let after_panel = direction.is_after();
        let mut previous_target = leaf;
        let mut target_box = self.tree.parent(leaf);
        let mut last_depth = 0;
        let mut depth = raw_depth;

        // The parent already splits along this axis
        if target_box.and_then(|id| self.tree.box_mode(id)) == Some(mode) {
            depth = depth.saturating_add(1);
        }

        while let Some(box_id) = target_box
            && last_depth < depth
        {
            let Some(data) = self.tree.box_data(box_id) else {
                break;
            };

            if data.mode == mode {
                let extremity = if after_panel {
                    data.children().last()
                } else {
                    data.children().first()
                };
                // Going higher would split on the wrong side of this box
                if extremity != Some(&previous_target) {
                    break;
                }
            }

            previous_target = box_id;
            target_box = data.parent();
            last_depth += 1;
        }

        // Step down two at a time until reachable, stopping at 0
        if depth > last_depth {
            let steps = (depth - last_depth).div_ceil(2);
            depth = depth.saturating_sub(steps).saturating_sub(steps);
        }

        tracing::trace!(raw_depth, depth, ?direction, "corrected drop depth");
        depth
    }
}

impl DirectionResolution {
    /// Depth of the insertion box above `leaf`, corrected against `tree`.
    ///
    /// Resolutions without a direction or split mode always yield 0.
    pub fn corrected_depth(&self, tree: &LayoutTree, leaf: NodeId) -> u32 {
        match (self.direction, self.mode) {
            (Some(direction), Some(mode)) => {
                DepthCorrector::new(tree).correct(self.depth, mode, direction, leaf)
            }
            _ => 0,
        }
    }
}
