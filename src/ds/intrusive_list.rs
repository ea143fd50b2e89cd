//! Sentinel-bounded doubly linked list backed by `SlotArena`.
//!
//! Values live in a `SlotArena`; links live in a parallel `Vec<Links>` whose
//! first two entries are the head and tail sentinels. Real node `SlotId(i)`
//! owns `links[i + 2]`. Every real node always has both neighbours, so
//! unlink/relink never branch on "am I the first/last node".
//!
//! ## Architecture
//!
//! ```text
//!   links (Vec<Links>)                      values (SlotArena<T>)
//!   ┌───────┬───────────────────────┐       ┌────────┬───────┐
//!   │ 0 HEAD│ prev: -, next: 3      │       │ SlotId │ value │
//!   │ 1 TAIL│ prev: 2, next: -      │       ├────────┼───────┤
//!   │ 2     │ prev: 3, next: TAIL   │ ◄───► │ id_0   │   B   │
//!   │ 3     │ prev: HEAD, next: 2   │ ◄───► │ id_1   │   A   │
//!   └───────┴───────────────────────┘       └────────┴───────┘
//!
//!   HEAD ─► [A] ◄──► [B] ◄── TAIL
//! ```
//!
//! Sentinels are never removed and never exposed: `front_id`/`back_id` and the
//! iterators skip them.
//!
//! Every operation that names a node by handle is O(1); only iteration and
//! `check_invariants` walk the chain.
//!
//! `check_invariants()` walks the list from the head sentinel, checks every
//! back link and cross-checks the arena.

use crate::ds::slot_arena::{SlotArena, SlotId};
use crate::error::InvariantError;

const HEAD: usize = 0;
const TAIL: usize = 1;
const SENTINELS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Links {
    prev: usize,
    next: usize,
}

impl Links {
    const DETACHED: Links = Links {
        prev: HEAD,
        next: TAIL,
    };
}

#[inline]
fn node_of(id: SlotId) -> usize {
    id.index() + SENTINELS
}

#[inline]
fn slot_of(node: usize) -> Option<SlotId> {
    if node < SENTINELS {
        None
    } else {
        Some(SlotId(node - SENTINELS))
    }
}

/// Doubly linked list whose nodes are addressed by `SlotId` handles.
#[derive(Debug)]
pub struct IntrusiveList<T> {
    values: SlotArena<T>,
    links: Vec<Links>,
}

impl<T> IntrusiveList<T> {
    /// Only the two sentinels.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Reserves arena and link space for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut links = Vec::with_capacity(capacity + SENTINELS);
        links.extend([Links::DETACHED; SENTINELS]);
        Self {
            values: SlotArena::with_capacity(capacity),
            links,
        }
    }

    /// Real nodes, sentinels excluded.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `false` for handles that were removed (or never issued).
    pub fn contains(&self, id: SlotId) -> bool {
        self.values.contains(id)
    }

    /// Handle of the node right after HEAD.
    pub fn front_id(&self) -> Option<SlotId> {
        slot_of(self.links[HEAD].next)
    }

    /// Handle of the node right before TAIL.
    pub fn back_id(&self) -> Option<SlotId> {
        slot_of(self.links[TAIL].prev)
    }

    pub fn front(&self) -> Option<&T> {
        self.front_id().and_then(|id| self.values.get(id))
    }

    pub fn back(&self) -> Option<&T> {
        self.back_id().and_then(|id| self.values.get(id))
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.values.get(id)
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.values.get_mut(id)
    }

    /// Links a new node in as the first element.
    pub fn push_front(&mut self, value: T) -> SlotId {
        let id = self.alloc(value);
        self.link_after(HEAD, node_of(id));
        id
    }

    /// Links a new node in as the last element.
    pub fn push_back(&mut self, value: T) -> SlotId {
        let id = self.alloc(value);
        let last = self.links[TAIL].prev;
        self.link_after(last, node_of(id));
        id
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let id = self.front_id()?;
        self.remove(id)
    }

    pub fn pop_back(&mut self) -> Option<T> {
        let id = self.back_id()?;
        self.remove(id)
    }

    /// Unlinks `id` and frees its slot for reuse.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        if !self.values.contains(id) {
            return None;
        }
        self.unlink(node_of(id));
        self.values.remove(id)
    }

    /// Splices `id` in after HEAD. `false` for a stale handle.
    pub fn move_to_front(&mut self, id: SlotId) -> bool {
        if !self.values.contains(id) {
            return false;
        }
        let node = node_of(id);
        if self.links[HEAD].next != node {
            self.unlink(node);
            self.link_after(HEAD, node);
        }
        true
    }

    /// Splices `id` in before TAIL. `false` for a stale handle.
    pub fn move_to_back(&mut self, id: SlotId) -> bool {
        if !self.values.contains(id) {
            return false;
        }
        let node = node_of(id);
        if self.links[TAIL].prev != node {
            self.unlink(node);
            let last = self.links[TAIL].prev;
            self.link_after(last, node);
        }
        true
    }

    /// Clears the list and frees all nodes. Sentinels stay.
    pub fn clear(&mut self) {
        self.values.clear();
        self.links.truncate(SENTINELS);
        self.links[HEAD].next = TAIL;
        self.links[TAIL].prev = HEAD;
    }

    /// Arena plus link table, excluding heap data owned by `T`.
    pub fn approx_bytes(&self) -> usize {
        std::mem::size_of::<Self>()
            + self.values.approx_bytes()
            + self.links.capacity() * std::mem::size_of::<Links>()
    }

    /// Values, front to back.
    pub fn iter(&self) -> IntrusiveListIter<'_, T> {
        IntrusiveListIter {
            list: self,
            current: self.links[HEAD].next,
        }
    }

    pub fn iter_ids(&self) -> impl Iterator<Item = SlotId> + '_ {
        self.iter_entries().map(|(id, _)| id)
    }

    pub fn iter_entries(&self) -> IntrusiveListEntryIter<'_, T> {
        IntrusiveListEntryIter {
            list: self,
            current: self.links[HEAD].next,
        }
    }

    /// Verifies link symmetry, sentinel placement and arena agreement.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.links.len() != self.values.slot_count() + SENTINELS {
            return Err(InvariantError::new(format!(
                "link table has {} entries for {} arena slots",
                self.links.len(),
                self.values.slot_count()
            )));
        }

        let mut count = 0usize;
        let mut prev = HEAD;
        let mut current = self.links[HEAD].next;
        while current != TAIL {
            let Some(id) = slot_of(current) else {
                return Err(InvariantError::new("head sentinel reachable from the list"));
            };
            if !self.values.contains(id) {
                return Err(InvariantError::new(format!(
                    "linked node {} has no value",
                    id.index()
                )));
            }
            if self.links[current].prev != prev {
                return Err(InvariantError::new(format!(
                    "node {} prev link does not point back",
                    id.index()
                )));
            }
            count += 1;
            if count > self.values.len() {
                return Err(InvariantError::new("cycle detected in recency list"));
            }
            prev = current;
            current = self.links[current].next;
        }
        if self.links[TAIL].prev != prev {
            return Err(InvariantError::new("tail sentinel prev link is stale"));
        }
        if count != self.values.len() {
            return Err(InvariantError::new(format!(
                "list links {} nodes but arena holds {}",
                count,
                self.values.len()
            )));
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("intrusive list invariant violated: {err}");
        }
    }

    fn alloc(&mut self, value: T) -> SlotId {
        let id = self.values.insert(value);
        let node = node_of(id);
        if node == self.links.len() {
            self.links.push(Links::DETACHED);
        }
        id
    }

    fn link_after(&mut self, at: usize, node: usize) {
        let next = self.links[at].next;
        self.links[node] = Links { prev: at, next };
        self.links[next].prev = node;
        self.links[at].next = node;
    }

    fn unlink(&mut self, node: usize) {
        let Links { prev, next } = self.links[node];
        self.links[prev].next = next;
        self.links[next].prev = prev;
        self.links[node] = Links::DETACHED;
    }
}

impl<T> Default for IntrusiveList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over values from front to back.
pub struct IntrusiveListIter<'a, T> {
    list: &'a IntrusiveList<T>,
    current: usize,
}

impl<'a, T> Iterator for IntrusiveListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = slot_of(self.current)?;
        self.current = self.list.links[self.current].next;
        self.list.values.get(id)
    }
}

/// Iterator over `(SlotId, &T)` pairs from front to back.
pub struct IntrusiveListEntryIter<'a, T> {
    list: &'a IntrusiveList<T>,
    current: usize,
}

impl<'a, T> Iterator for IntrusiveListEntryIter<'a, T> {
    type Item = (SlotId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let id = slot_of(self.current)?;
        self.current = self.list.links[self.current].next;
        self.list.values.get(id).map(|value| (id, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values<T: Copy>(list: &IntrusiveList<T>) -> Vec<T> {
        list.iter().copied().collect()
    }

    #[test]
    fn recency_style_usage() {
        // Front is most recent: new items go in front, eviction pops the back.
        let mut list = IntrusiveList::with_capacity(3);
        let k1 = list.push_front(1);
        let k2 = list.push_front(2);
        let k3 = list.push_front(3);
        assert_eq!(values(&list), vec![3, 2, 1]);

        assert!(list.move_to_front(k1));
        assert_eq!(values(&list), vec![1, 3, 2]);
        assert_eq!(list.back_id(), Some(k2));

        assert_eq!(list.pop_back(), Some(2));
        assert!(!list.contains(k2));
        assert_eq!(list.front_id(), Some(k1));
        assert_eq!(list.back_id(), Some(k3));
        list.debug_validate_invariants();
    }

    #[test]
    fn splicing_a_node_already_in_place_is_a_no_op() {
        let mut list = IntrusiveList::new();
        let first = list.push_back('x');
        let last = list.push_back('y');
        assert!(list.move_to_front(first));
        assert!(list.move_to_back(last));
        assert_eq!(values(&list), vec!['x', 'y']);

        assert!(list.move_to_back(first));
        assert_eq!(values(&list), vec!['y', 'x']);
        list.debug_validate_invariants();
    }

    #[test]
    fn removing_the_only_node_restores_the_sentinel_pair() {
        let mut list = IntrusiveList::new();
        let only = list.push_front(5u8);
        assert_eq!(list.front(), list.back());
        assert_eq!(list.remove(only), Some(5));
        assert_eq!(list.remove(only), None);
        assert!(list.is_empty());
        assert_eq!((list.front_id(), list.back_id()), (None, None));
        assert!(list.iter().next().is_none());
        list.debug_validate_invariants();
    }

    #[test]
    fn freed_slot_is_relinked_at_the_new_position() {
        let mut list = IntrusiveList::new();
        let a = list.push_back(10);
        list.push_back(20);
        list.push_back(30);
        list.remove(a);

        let reused = list.push_back(40);
        assert_eq!(reused.index(), a.index());
        assert_eq!(values(&list), vec![20, 30, 40]);
        assert_eq!(list.back_id(), Some(reused));
        list.debug_validate_invariants();
    }

    #[test]
    fn entries_pair_handles_with_values() {
        let mut list = IntrusiveList::new();
        let ids: Vec<_> = ["p", "q", "r"].into_iter().map(|v| list.push_front(v)).collect();
        if let Some(value) = list.get_mut(ids[1]) {
            *value = "Q";
        }

        let entries: Vec<_> = list.iter_entries().map(|(id, v)| (id.index(), *v)).collect();
        assert_eq!(
            entries,
            vec![(ids[2].index(), "r"), (ids[1].index(), "Q"), (ids[0].index(), "p")]
        );
        assert_eq!(list.iter_ids().collect::<Vec<_>>(), vec![ids[2], ids[1], ids[0]]);
    }

    #[test]
    fn clear_keeps_the_list_usable() {
        let mut list = IntrusiveList::new();
        for value in [1, 2, 3] {
            list.push_front(value);
        }
        list.clear();
        assert_eq!(list.len(), 0);
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);

        let id = list.push_back(7);
        assert_eq!(id.index(), 0);
        assert_eq!(list.get(id), Some(&7));
        assert!(list.approx_bytes() > 0);
        list.debug_validate_invariants();
    }
}
