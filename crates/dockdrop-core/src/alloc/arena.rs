use crate::profiling::profile_function;
use std::num::NonZeroU64;

/// Generational handle into an [`Arena`].
///
/// Packs the generation into the high word and `index + 1` into the low word,
/// so `Option<IndexSlot>` costs nothing extra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndexSlot(NonZeroU64);

impl IndexSlot {
    pub fn new(generation: u32, idx: u32) -> Self {
        debug_assert!(idx < u32::MAX, "arena index overflow");
        let bits = ((generation as u64) << 32) | (idx as u64 + 1);
        // SAFETY: the low word holds idx + 1 and idx < u32::MAX, so bits != 0
        Self(unsafe { NonZeroU64::new_unchecked(bits) })
    }

    pub fn generation(&self) -> u32 {
        (self.0.get() >> 32) as u32
    }

    pub fn index(&self) -> u32 {
        (self.0.get() & u32::MAX as u64) as u32 - 1
    }
}

#[derive(Debug, Clone)]
struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

/// Slot storage with stable generational handles.
///
/// Removed slots are recycled with a bumped generation, so a stale handle
/// never aliases the value that reused its slot. All lookups are fallible.
#[derive(Debug, Clone)]
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    len: usize,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    pub fn insert(&mut self, value: T) -> IndexSlot {
        profile_function!();
        self.len += 1;
        if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.value = Some(value);
            IndexSlot::new(slot.generation, idx)
        } else {
            let idx = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                value: Some(value),
            });
            IndexSlot::new(0, idx)
        }
    }

    fn slot(&self, idx: IndexSlot) -> Option<&Slot<T>> {
        self.slots
            .get(idx.index() as usize)
            .filter(|slot| slot.generation == idx.generation())
    }

    pub fn get(&self, idx: IndexSlot) -> Option<&T> {
        self.slot(idx).and_then(|slot| slot.value.as_ref())
    }

    pub fn get_mut(&mut self, idx: IndexSlot) -> Option<&mut T> {
        self.slots
            .get_mut(idx.index() as usize)
            .filter(|slot| slot.generation == idx.generation())
            .and_then(|slot| slot.value.as_mut())
    }

    pub fn contains(&self, idx: IndexSlot) -> bool {
        self.get(idx).is_some()
    }

    /// Remove a value, invalidating every handle to its slot.
    pub fn remove(&mut self, idx: IndexSlot) -> Option<T> {
        profile_function!();
        let index = idx.index();
        let slot = self
            .slots
            .get_mut(index as usize)
            .filter(|slot| slot.generation == idx.generation())?;
        let value = slot.value.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(index);
        self.len -= 1;
        Some(value)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate live values together with their handles, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (IndexSlot, &T)> {
        self.slots.iter().enumerate().filter_map(|(idx, slot)| {
            slot.value
                .as_ref()
                .map(|value| (IndexSlot::new(slot.generation, idx as u32), value))
        })
    }
}

static_assertions::assert_eq_size!(IndexSlot, Option<IndexSlot>);
