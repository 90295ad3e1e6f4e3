use crate::layout::NodeId;

/// Error types for layout tree mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DockError {
    /// Node not found in tree (never inserted or already removed).
    NodeNotFound(NodeId),
    /// Children can only be attached to boxes.
    NotABox(NodeId),
    /// Child already has a parent; detach it first.
    AlreadyParented(NodeId),
    /// Node has no parent to detach from.
    NotParented(NodeId),
    /// Attaching would make a node its own ancestor.
    CycleDetected(NodeId),
}

impl std::fmt::Display for DockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DockError::NodeNotFound(id) => write!(f, "Node {:?} not found", id),
            DockError::NotABox(id) => write!(f, "Node {:?} is not a box", id),
            DockError::AlreadyParented(id) => write!(f, "Node {:?} already has a parent", id),
            DockError::NotParented(id) => write!(f, "Node {:?} has no parent", id),
            DockError::CycleDetected(id) => {
                write!(f, "Attaching {:?} would create a cycle", id)
            }
        }
    }
}

impl std::error::Error for DockError {}

/// Result type for layout operations.
pub type DockResult<T> = Result<T, DockError>;
