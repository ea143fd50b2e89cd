//! Binary heap driven by a caller-supplied [`Order`].
//!
//! Elements live in a dense, zero-indexed `Vec`; array position encodes the
//! tree (`parent(i) = (i - 1) / 2`, children `2i + 1` and `2i + 2`). The root
//! is always an [`Order`]-minimal element.
//!
//! ## Architecture
//!
//! ```text
//!   data: Vec<Slot<T>>                       tree view
//!   ┌────┬────┬────┬────┬────┐                  [1]
//!   │ 1  │ 3  │ 8  │ 5  │ 4  │                 /   \
//!   └────┴────┴────┴────┴────┘              [3]     [8]
//!     0    1    2    3    4                 /  \
//!                                         [5]  [4]
//!
//!   push(x):  data.push(x); sift_up(len - 1)
//!   pop():    swap(0, len - 1); data.pop(); sift_down(0)
//! ```
//!
//! ## Tie-breaking
//!
//! Each element carries a monotonically increasing sequence number stamped on
//! insertion. Elements the order considers equal leave the heap in insertion
//! order (FIFO). A composite [`Order`](crate::order::Order) can still impose a
//! payload-level tie-break first.
//!
//! ## Operations
//!
//! | Operation        | Description                              | Complexity |
//! |------------------|------------------------------------------|------------|
//! | `push`           | Insert + sift-up                         | O(log n)   |
//! | `pop`            | Remove root + sift-down                  | O(log n)   |
//! | `peek`           | Borrow root                              | O(1)       |
//! | `push_pop`       | Push then pop, single sift               | O(log n)   |
//! | `replace_root`   | Pop then push, single sift               | O(log n)   |
//! | `from_vec`       | Bottom-up heapify                        | O(n)       |
//! | `into_sorted_vec`| Root order, best first                   | O(n log n) |
//!
//! ## Thread Safety
//!
//! `OrderedHeap` is not thread-safe. Wrap in a mutex for concurrent access.

use std::cmp::Ordering;

use crate::error::{EmptyError, InvariantError};
use crate::order::{MinFirst, Order};
use crate::traits::PriorityQueue;

#[derive(Debug, Clone)]
struct Slot<T> {
    seq: u64,
    value: T,
}

/// Comparator-driven binary heap.
///
/// # Example
///
/// ```
/// use lruheap::ds::OrderedHeap;
/// use lruheap::order::MaxFirst;
///
/// let mut heap = OrderedHeap::new(MaxFirst);
/// heap.push(5);
/// heap.push(9);
/// heap.push(1);
///
/// assert_eq!(heap.peek(), Some(&9));
/// assert_eq!(heap.into_sorted_vec(), vec![9, 5, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct OrderedHeap<T, O = MinFirst> {
    data: Vec<Slot<T>>,
    order: O,
    seq: u64,
}

impl<T: Ord> OrderedHeap<T, MinFirst> {
    /// Min-heap over the natural order of `T`.
    pub fn min_heap() -> Self {
        Self::new(MinFirst)
    }
}

impl<T: Ord> Default for OrderedHeap<T, MinFirst> {
    fn default() -> Self {
        Self::min_heap()
    }
}

impl<T, O: Order<T>> OrderedHeap<T, O> {
    /// Creates an empty heap arranged by `order`.
    pub fn new(order: O) -> Self {
        Self {
            data: Vec::new(),
            order,
            seq: 0,
        }
    }

    /// Creates an empty heap with room for `capacity` elements.
    pub fn with_capacity(capacity: usize, order: O) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            order,
            seq: 0,
        }
    }

    /// Builds a heap from `items` in O(n). Ties keep the vector's order.
    ///
    /// ```
    /// use lruheap::ds::OrderedHeap;
    /// use lruheap::order::MinFirst;
    ///
    /// let heap = OrderedHeap::from_vec(vec![4, 1, 3], MinFirst);
    /// assert_eq!(heap.peek(), Some(&1));
    /// ```
    pub fn from_vec(items: Vec<T>, order: O) -> Self {
        let data: Vec<Slot<T>> = items
            .into_iter()
            .enumerate()
            .map(|(idx, value)| Slot {
                seq: idx as u64,
                value,
            })
            .collect();
        let mut heap = Self {
            seq: data.len() as u64,
            data,
            order,
        };
        for idx in (0..heap.data.len() / 2).rev() {
            heap.sift_down(idx);
        }
        heap
    }

    /// Number of elements held.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The order this heap was built with.
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Borrows the root (an order-minimal element).
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.data.first().map(|slot| &slot.value)
    }

    /// Like [`peek`](Self::peek) but reports an empty heap as [`EmptyError`].
    pub fn try_peek(&self) -> Result<&T, EmptyError> {
        self.peek().ok_or(EmptyError)
    }

    /// Inserts `value` and restores the heap property by sifting up.
    pub fn push(&mut self, value: T) {
        let slot = self.stamp(value);
        self.data.push(slot);
        let last = self.data.len() - 1;
        self.sift_up(last);
    }

    /// Removes and returns the root.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.data.len().checked_sub(1)?;
        self.data.swap(0, last);
        let slot = self.data.pop()?;
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some(slot.value)
    }

    /// Like [`pop`](Self::pop) but reports an empty heap as [`EmptyError`].
    pub fn try_pop(&mut self) -> Result<T, EmptyError> {
        self.pop().ok_or(EmptyError)
    }

    /// Pushes `value` then pops the root, in one sift.
    ///
    /// Returns `value` itself when it would have become the root.
    pub fn push_pop(&mut self, value: T) -> T {
        let root_first = match self.data.first() {
            // The incoming element is newer than the root, so ties go to the root.
            Some(root) => self.order.compare(&root.value, &value) != Ordering::Greater,
            None => false,
        };
        if !root_first {
            return value;
        }
        let slot = self.stamp(value);
        let old = std::mem::replace(&mut self.data[0], slot);
        self.sift_down(0);
        old.value
    }

    /// Pops the root then pushes `value`, in one sift.
    ///
    /// On an empty heap `value` is pushed and `None` is returned.
    pub fn replace_root(&mut self, value: T) -> Option<T> {
        if self.data.is_empty() {
            self.push(value);
            return None;
        }
        let slot = self.stamp(value);
        let old = std::mem::replace(&mut self.data[0], slot);
        self.sift_down(0);
        Some(old.value)
    }

    /// Iterates in heap (array) order, not sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter().map(|slot| &slot.value)
    }

    /// Pops every element, best first.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, O> {
        DrainSorted { heap: self }
    }

    /// Consumes the heap into a vector ordered root-first.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        while let Some(value) = self.pop() {
            out.push(value);
        }
        out
    }

    /// Consumes the heap into its elements in arbitrary order.
    pub fn into_vec(self) -> Vec<T> {
        self.data.into_iter().map(|slot| slot.value).collect()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns an approximate memory footprint in bytes.
    pub fn approx_bytes(&self) -> usize {
        std::mem::size_of::<Self>() + self.data.capacity() * std::mem::size_of::<Slot<T>>()
    }

    /// Verifies that no child ranks before its parent.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        for idx in 1..self.data.len() {
            let parent = (idx - 1) / 2;
            if self.before(idx, parent) {
                return Err(InvariantError::new(format!(
                    "heap property violated between parent {} and child {}",
                    parent, idx
                )));
            }
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("heap invariant violated: {err}");
        }
    }

    fn stamp(&mut self, value: T) -> Slot<T> {
        let slot = Slot {
            seq: self.seq,
            value,
        };
        self.seq = self.seq.wrapping_add(1);
        slot
    }

    /// `true` if the element at `a` must sit above the element at `b`.
    #[inline]
    fn before(&self, a: usize, b: usize) -> bool {
        let (lhs, rhs) = (&self.data[a], &self.data[b]);
        match self.order.compare(&lhs.value, &rhs.value) {
            Ordering::Equal => lhs.seq < rhs.seq,
            ordering => ordering == Ordering::Less,
        }
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if !self.before(idx, parent) {
                break;
            }
            self.data.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut best = idx;
            if left < len && self.before(left, best) {
                best = left;
            }
            if right < len && self.before(right, best) {
                best = right;
            }
            if best == idx {
                break;
            }
            self.data.swap(idx, best);
            idx = best;
        }
    }
}

impl<T: Ord> FromIterator<T> for OrderedHeap<T, MinFirst> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect(), MinFirst)
    }
}

impl<T, O: Order<T>> Extend<T> for OrderedHeap<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T, O: Order<T>> PriorityQueue<T> for OrderedHeap<T, O> {
    fn offer(&mut self, value: T) -> Option<T> {
        self.push(value);
        None
    }

    fn pop(&mut self) -> Option<T> {
        OrderedHeap::pop(self)
    }

    fn peek(&self) -> Option<&T> {
        OrderedHeap::peek(self)
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

/// Draining iterator returned by [`OrderedHeap::drain_sorted`].
pub struct DrainSorted<'a, T, O: Order<T>> {
    heap: &'a mut OrderedHeap<T, O>,
}

impl<T, O: Order<T>> Iterator for DrainSorted<'_, T, O> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T, O: Order<T>> ExactSizeIterator for DrainSorted<'_, T, O> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{ByKey, MaxFirst, OrderExt};

    #[test]
    fn min_heap_pops_ascending() {
        let mut heap = OrderedHeap::min_heap();
        for value in [5, 3, 8, 1] {
            heap.push(value);
        }
        assert_eq!(heap.pop(), Some(1));
        assert_eq!(heap.pop(), Some(3));
        assert_eq!(heap.pop(), Some(5));
        assert_eq!(heap.pop(), Some(8));
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn max_heap_pops_descending() {
        let mut heap = OrderedHeap::new(MaxFirst);
        heap.extend([5, 3, 8, 1]);
        assert_eq!(heap.peek(), Some(&8));
        assert_eq!(heap.into_sorted_vec(), vec![8, 5, 3, 1]);
    }

    #[test]
    fn empty_heap_reports_empty_error() {
        let mut heap: OrderedHeap<i32> = OrderedHeap::default();
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.try_peek(), Err(EmptyError));
        assert_eq!(heap.try_pop(), Err(EmptyError));
        assert!(heap.is_empty());
    }

    #[test]
    fn equal_keys_leave_in_insertion_order() {
        let mut heap: OrderedHeap<(u32, &str), _> = OrderedHeap::new(ByKey(|e: &(u32, &str)| e.0));
        heap.push((1, "first"));
        heap.push((0, "zero"));
        heap.push((1, "second"));
        heap.push((1, "third"));

        let order: Vec<_> = heap.drain_sorted().map(|(_, name)| name).collect();
        assert_eq!(order, vec!["zero", "first", "second", "third"]);
    }

    #[test]
    fn composite_order_applies_tie_break() {
        let order = ByKey(|e: &(u32, &str)| e.0)
            .reversed()
            .then(|a: &(u32, &str), b: &(u32, &str)| a.1.cmp(b.1));
        let mut heap = OrderedHeap::new(order);
        heap.extend([(2, "b"), (3, "z"), (2, "a"), (3, "c")]);
        let sorted = heap.into_sorted_vec();
        assert_eq!(sorted, vec![(3, "c"), (3, "z"), (2, "a"), (2, "b")]);
    }

    #[test]
    fn push_pop_returns_smaller_of_value_and_root() {
        let mut heap = OrderedHeap::min_heap();
        heap.extend([4, 6, 8]);

        assert_eq!(heap.push_pop(1), 1);
        assert_eq!(heap.len(), 3);

        assert_eq!(heap.push_pop(5), 4);
        assert_eq!(heap.peek(), Some(&5));
        heap.debug_validate_invariants();

        let mut empty: OrderedHeap<i32> = OrderedHeap::min_heap();
        assert_eq!(empty.push_pop(7), 7);
        assert!(empty.is_empty());
    }

    #[test]
    fn replace_root_swaps_out_root() {
        let mut heap = OrderedHeap::min_heap();
        assert_eq!(heap.replace_root(3), None);
        heap.extend([5, 7]);
        assert_eq!(heap.replace_root(10), Some(3));
        assert_eq!(heap.into_sorted_vec(), vec![5, 7, 10]);
    }

    #[test]
    fn from_vec_heapifies() {
        let heap = OrderedHeap::from_vec(vec![9, 4, 7, 1, 8, 2], MinFirst);
        heap.debug_validate_invariants();
        assert_eq!(heap.into_sorted_vec(), vec![1, 2, 4, 7, 8, 9]);

        let collected: OrderedHeap<u8> = [3u8, 1, 2].into_iter().collect();
        assert_eq!(collected.peek(), Some(&1));
    }

    #[test]
    fn closure_order_supports_floats() {
        let mut heap = OrderedHeap::new(|a: &f64, b: &f64| a.total_cmp(b));
        heap.extend([2.5, -1.0, 0.25]);
        assert_eq!(heap.pop(), Some(-1.0));
        assert_eq!(heap.pop(), Some(0.25));
    }

    #[test]
    fn clear_and_into_vec() {
        let mut heap = OrderedHeap::min_heap();
        heap.extend([3, 1, 2]);
        let mut items = heap.clone().into_vec();
        items.sort();
        assert_eq!(items, vec![1, 2, 3]);
        heap.clear();
        assert!(heap.is_empty());
        assert!(heap.approx_bytes() >= std::mem::size_of::<OrderedHeap<i32>>());
    }
}
