//! Allocation and collection types for dockdrop.
//!
//! This module provides:
//! - Re-exports of hash collections using AHash
//! - A generational [`Arena`](arena::Arena) used for tree storage

pub mod arena;

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};
pub use arena::{Arena, IndexSlot};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashmap_ahash() {
        let mut map = HashMap::new();
        map.insert("key", "value");
        assert_eq!(map.get("key"), Some(&"value"));
    }

    #[test]
    fn test_hashset_ahash() {
        let mut set = HashSet::new();
        set.insert(42);
        assert!(set.contains(&42));
    }
}
