//! Slot arena with stable handles and free-slot reuse.
//!
//! Every slot is either occupied or vacant. Vacant slots form a singly linked
//! free chain threaded through the slots themselves, so no side vector is
//! needed; the most recently freed slot is handed out first.
//!
//! ```text
//!   slots:  [ Occ(a) | Vac(next: 3) | Occ(c) | Vac(next: -) ]
//!   free_head ──► 1 ──► 3
//!   insert(e) ─────────► reuses index 1, free_head becomes 3
//! ```
//!
//! A [`SlotId`] stays valid until its value is removed. After that the index
//! may be reused, so callers must drop stale handles.

/// Stable handle into a [`SlotArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub(crate) usize);

impl SlotId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
enum Slot<T> {
    Occupied(T),
    Vacant { next_free: Option<usize> },
}

#[derive(Debug)]
pub struct SlotArena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<usize>,
    live: usize,
}

impl<T> SlotArena<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Arena with room for `capacity` values before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            live: 0,
        }
    }

    /// Stores `value`, preferring the most recently vacated slot.
    pub fn insert(&mut self, value: T) -> SlotId {
        self.live += 1;
        match self.free_head {
            Some(idx) => {
                let vacated = std::mem::replace(&mut self.slots[idx], Slot::Occupied(value));
                if let Slot::Vacant { next_free } = vacated {
                    self.free_head = next_free;
                }
                SlotId(idx)
            }
            None => {
                self.slots.push(Slot::Occupied(value));
                SlotId(self.slots.len() - 1)
            }
        }
    }

    /// Takes the value out of `id`'s slot. `None` if it is already vacant.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        let slot = self.slots.get_mut(id.0)?;
        if matches!(slot, Slot::Vacant { .. }) {
            return None;
        }
        let vacant = Slot::Vacant {
            next_free: self.free_head,
        };
        match std::mem::replace(slot, vacant) {
            Slot::Occupied(value) => {
                self.free_head = Some(id.0);
                self.live -= 1;
                Some(value)
            }
            Slot::Vacant { .. } => None,
        }
    }

    #[inline]
    pub fn get(&self, id: SlotId) -> Option<&T> {
        match self.slots.get(id.0)? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        match self.slots.get_mut(id.0)? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    #[inline]
    pub fn contains(&self, id: SlotId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Slots ever handed out, occupied or vacant.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.live = 0;
    }

    pub fn approx_bytes(&self) -> usize {
        std::mem::size_of::<Self>() + self.slots.capacity() * std::mem::size_of::<Slot<T>>()
    }

    /// Occupied slots in index order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| match slot {
                Slot::Occupied(value) => Some((SlotId(idx), value)),
                Slot::Vacant { .. } => None,
            })
    }

    /// Walks the free chain and checks it covers exactly the vacant slots.
    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        let occupied = self.iter().count();
        assert_eq!(occupied, self.live, "live count drifted");

        let mut chain = 0usize;
        let mut cursor = self.free_head;
        while let Some(idx) = cursor {
            chain += 1;
            assert!(chain <= self.slots.len(), "free chain has a cycle");
            match self.slots[idx] {
                Slot::Vacant { next_free } => cursor = next_free,
                Slot::Occupied(_) => panic!("free chain points at occupied slot {idx}"),
            }
        }
        assert_eq!(chain + occupied, self.slots.len(), "vacant slot missing from free chain");
    }
}

impl<T> Default for SlotArena<T> {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Occupancy always matches a HashMap model keyed by handle.
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_matches_map_model(
            ops in prop::collection::vec((any::<bool>(), 0usize..16), 0..200)
        ) {
            let mut arena = SlotArena::new();
            let mut model = std::collections::HashMap::new();
            let mut handles: Vec<SlotId> = Vec::new();
            for (step, (insert, pick)) in ops.into_iter().enumerate() {
                if insert || handles.is_empty() {
                    let id = arena.insert(step);
                    prop_assert!(model.insert(id, step).is_none());
                    handles.push(id);
                } else {
                    let id = handles.swap_remove(pick % handles.len());
                    prop_assert_eq!(arena.remove(id), model.remove(&id));
                }
                prop_assert_eq!(arena.len(), model.len());
            }
            for (id, value) in &model {
                prop_assert_eq!(arena.get(*id), Some(value));
            }
            arena.debug_validate_invariants();
        }
    }
}
