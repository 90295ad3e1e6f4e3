use crate::host::GroupPolicy;
use crate::types::TabGroup;
use dockdrop_core::alloc::HashMap;

/// Name of the group panels get when none is given.
pub const DEFAULT_GROUP: &str = "default";

/// Group name to policy lookup.
///
/// Unknown names resolve to the fallback group, so a panel referencing a
/// group that was never registered behaves like an ordinary dockable panel.
#[derive(Debug, Clone, Default)]
pub struct GroupRegistry {
    groups: HashMap<String, TabGroup>,
    fallback: TabGroup,
}

impl GroupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a group.
    pub fn with_group(mut self, name: impl Into<String>, group: TabGroup) -> Self {
        self.insert(name, group);
        self
    }

    /// Set the policy used for unknown group names.
    pub fn with_fallback(mut self, group: TabGroup) -> Self {
        self.fallback = group;
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, group: TabGroup) -> Option<TabGroup> {
        self.groups.insert(name.into(), group)
    }

    pub fn remove(&mut self, name: &str) -> Option<TabGroup> {
        self.groups.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl GroupPolicy for GroupRegistry {
    fn group(&self, name: &str) -> TabGroup {
        self.groups.get(name).copied().unwrap_or(self.fallback)
    }
}
