//! # Bounded Priority Queue
//!
//! An [`OrderedHeap`] with an optional size bound.
//!
//! ## Retention Rule
//!
//! The root is always the order-minimal element, and overflow pops the root.
//! With a bound of `k` the root is therefore the gatekeeper: the weakest of the
//! retained elements from the caller's point of view. To keep the `k`
//! *largest* values, arrange the queue ascending ([`MinFirst`]) so the
//! smallest retained value sits at the root and is the first to go.
//!
//! ```text
//!   keep_largest(3)           root (gatekeeper)
//!                                  │
//!   push 5, 1, 8, 3:               ▼
//!     [5]            ─►  [5]
//!     [1 5]          ─►  [1 5]
//!     [1 5 8]        ─►  [1 5 8]            (full)
//!     push 3         ─►  3 beats root 1, 1 is dropped
//!                        [3 5 8]
//! ```
//!
//! | Want to keep       | Order to supply      | Constructor            |
//! |--------------------|----------------------|------------------------|
//! | `k` largest        | ascending            | [`keep_largest`]       |
//! | `k` smallest       | descending           | [`keep_smallest`]      |
//! | `k` most frequent  | frequency ascending  | `with_bound(k, ByKey)` |
//!
//! Each bounded push costs O(log k), so a stream of `n` items is filtered in
//! O(n log k) time and O(k) space.
//!
//! [`keep_largest`]: BoundedPriorityQueue::keep_largest
//! [`keep_smallest`]: BoundedPriorityQueue::keep_smallest

use tracing::{debug, trace};

use crate::ds::{DrainSorted, OrderedHeap};
use crate::error::{ConfigError, EmptyError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::QueueMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::QueueMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{MetricsReset, MetricsSnapshotProvider, QueueMetricsRecorder};
use crate::order::{MaxFirst, MinFirst, Order};
use crate::traits::PriorityQueue;

/// Priority queue that optionally keeps at most `bound` elements.
///
/// # Example
///
/// ```
/// use lruheap::order::MinFirst;
/// use lruheap::queue::BoundedPriorityQueue;
///
/// let mut queue = BoundedPriorityQueue::new(MinFirst);
/// for x in [5, 3, 8, 1] {
///     queue.push(x);
/// }
/// let popped: Vec<_> = std::iter::from_fn(|| queue.pop()).collect();
/// assert_eq!(popped, vec![1, 3, 5, 8]);
/// ```
#[derive(Debug, Clone)]
pub struct BoundedPriorityQueue<T, O = MinFirst> {
    heap: OrderedHeap<T, O>,
    bound: Option<usize>,
    #[cfg(feature = "metrics")]
    metrics: QueueMetrics,
}

impl<T: Ord> BoundedPriorityQueue<T, MinFirst> {
    /// Keeps the `k` largest elements pushed; `pop` yields them smallest first.
    ///
    /// # Panics
    ///
    /// Panics if `k` is zero.
    ///
    /// ```
    /// use lruheap::queue::BoundedPriorityQueue;
    ///
    /// let mut top = BoundedPriorityQueue::keep_largest(3);
    /// top.extend([4, 9, 1, 7, 3, 8]);
    /// assert_eq!(top.into_sorted_vec(), vec![7, 8, 9]);
    /// ```
    pub fn keep_largest(k: usize) -> Self {
        match Self::with_bound(k, MinFirst) {
            Ok(queue) => queue,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T: Ord> BoundedPriorityQueue<T, MaxFirst> {
    /// Keeps the `k` smallest elements pushed; `pop` yields them largest first.
    ///
    /// # Panics
    ///
    /// Panics if `k` is zero.
    pub fn keep_smallest(k: usize) -> Self {
        match Self::with_bound(k, MaxFirst) {
            Ok(queue) => queue,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T, O: Order<T>> BoundedPriorityQueue<T, O> {
    /// Unbounded queue arranged by `order`.
    pub fn new(order: O) -> Self {
        Self::from_heap(OrderedHeap::new(order), None)
    }

    /// Queue that never holds more than `bound` elements.
    ///
    /// ```
    /// use lruheap::order::MinFirst;
    /// use lruheap::queue::BoundedPriorityQueue;
    ///
    /// assert!(BoundedPriorityQueue::<u8, _>::with_bound(0, MinFirst).is_err());
    /// ```
    pub fn with_bound(bound: usize, order: O) -> Result<Self, ConfigError> {
        Self::with_bound_and_capacity(bound, bound, order)
    }

    pub(crate) fn with_bound_and_capacity(
        bound: usize,
        capacity: usize,
        order: O,
    ) -> Result<Self, ConfigError> {
        if bound == 0 {
            debug!("rejected bounded queue with zero bound");
            return Err(ConfigError::new("bound must be greater than zero"));
        }
        Ok(Self::from_heap(
            OrderedHeap::with_capacity(capacity.min(bound), order),
            Some(bound),
        ))
    }

    pub(crate) fn from_heap(heap: OrderedHeap<T, O>, bound: Option<usize>) -> Self {
        Self {
            heap,
            bound,
            #[cfg(feature = "metrics")]
            metrics: QueueMetrics::default(),
        }
    }

    /// Heapifies `items` into an unbounded queue in O(n).
    pub fn from_vec(items: Vec<T>, order: O) -> Self {
        Self::from_heap(OrderedHeap::from_vec(items, order), None)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The configured bound, or `None` for an unbounded queue.
    pub fn bound(&self) -> Option<usize> {
        self.bound
    }

    pub fn order(&self) -> &O {
        self.heap.order()
    }

    /// Inserts `value`.
    ///
    /// On a full bounded queue this is a push followed by a pop of the root:
    /// the returned element is either the displaced root or `value` itself if
    /// `value` would have become the root. Unbounded queues always return
    /// `None`.
    pub fn push(&mut self, value: T) -> Option<T> {
        #[cfg(feature = "metrics")]
        self.metrics.record_push();

        match self.bound {
            Some(bound) if self.heap.len() >= bound => {
                let dropped = self.heap.push_pop(value);
                #[cfg(feature = "metrics")]
                self.metrics.record_bound_drop();
                trace!(bound, "bounded queue dropped its root");
                Some(dropped)
            },
            _ => {
                self.heap.push(value);
                None
            },
        }
    }

    /// Pushes `value`, then pops roots until at most `k` elements remain.
    ///
    /// Applies `k` for this call only. A configured bound still caps the
    /// length, so the effective limit is the smaller of the two.
    /// Returns the last element popped. Earlier pops only happen when the
    /// queue already held more than `k` elements; those are dropped.
    ///
    /// ```
    /// use lruheap::order::MinFirst;
    /// use lruheap::queue::BoundedPriorityQueue;
    ///
    /// let mut queue = BoundedPriorityQueue::new(MinFirst);
    /// assert_eq!(queue.push_bounded(4, 2), None);
    /// assert_eq!(queue.push_bounded(9, 2), None);
    /// assert_eq!(queue.push_bounded(6, 2), Some(4));
    /// assert_eq!(queue.len(), 2);
    /// ```
    pub fn push_bounded(&mut self, value: T, k: usize) -> Option<T> {
        #[cfg(feature = "metrics")]
        self.metrics.record_push();

        let limit = self.bound.map_or(k, |bound| bound.min(k));
        self.heap.push(value);
        let mut dropped = None;
        while self.heap.len() > limit {
            dropped = self.heap.pop();
            #[cfg(feature = "metrics")]
            self.metrics.record_bound_drop();
        }
        if dropped.is_some() {
            trace!(limit, "bounded push trimmed the queue");
        }
        dropped
    }

    /// Removes and returns the root.
    pub fn pop(&mut self) -> Option<T> {
        #[cfg(feature = "metrics")]
        self.metrics.record_pop_call();

        let value = self.heap.pop();

        #[cfg(feature = "metrics")]
        if value.is_some() {
            self.metrics.record_pop_found();
        }
        value
    }

    pub fn try_pop(&mut self) -> Result<T, EmptyError> {
        self.pop().ok_or(EmptyError)
    }

    pub fn peek(&self) -> Option<&T> {
        self.heap.peek()
    }

    pub fn try_peek(&self) -> Result<&T, EmptyError> {
        self.heap.try_peek()
    }

    /// Push then pop in a single sift. Never changes the length.
    pub fn push_pop(&mut self, value: T) -> T {
        self.heap.push_pop(value)
    }

    /// Pop then push in a single sift. `None` (and a plain push) when empty.
    pub fn replace_root(&mut self, value: T) -> Option<T> {
        self.heap.replace_root(value)
    }

    /// Elements in heap (array) order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.heap.iter()
    }

    /// Pops every element, root first.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, O> {
        self.heap.drain_sorted()
    }

    /// Consumes the queue into a vector in pop order.
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.heap.into_sorted_vec()
    }

    /// Consumes the queue into its elements in arbitrary order.
    pub fn into_vec(self) -> Vec<T> {
        self.heap.into_vec()
    }

    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        self.heap.clear();
    }

    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.heap.check_invariants()?;
        match self.bound {
            Some(bound) if self.heap.len() > bound => Err(InvariantError::new(format!(
                "queue holds {} elements over bound {}",
                self.heap.len(),
                bound
            ))),
            _ => Ok(()),
        }
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("{}", err);
        }
    }
}

impl<T, O: Order<T>> Extend<T> for BoundedPriorityQueue<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T, O: Order<T>> PriorityQueue<T> for BoundedPriorityQueue<T, O> {
    fn offer(&mut self, value: T) -> Option<T> {
        self.push(value)
    }

    fn pop(&mut self) -> Option<T> {
        BoundedPriorityQueue::pop(self)
    }

    fn peek(&self) -> Option<&T> {
        self.heap.peek()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(feature = "metrics")]
impl<T, O: Order<T>> MetricsSnapshotProvider<QueueMetricsSnapshot> for BoundedPriorityQueue<T, O> {
    fn snapshot(&self) -> QueueMetricsSnapshot {
        QueueMetricsSnapshot::capture(&self.metrics, self.heap.len(), self.bound)
    }
}

#[cfg(feature = "metrics")]
impl<T, O> MetricsReset for BoundedPriorityQueue<T, O> {
    fn reset_metrics(&mut self) {
        self.metrics = QueueMetrics::default();
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::*;
    use crate::order::{ByKey, OrderExt, Reversed};

    #[test]
    fn unbounded_min_queue_pops_ascending() {
        let mut queue = BoundedPriorityQueue::new(MinFirst);
        for x in [5, 3, 8, 1] {
            assert_eq!(queue.push(x), None);
        }
        assert_eq!(queue.bound(), None);
        assert_eq!(queue.pop(), Some(1));
        assert_eq!(queue.pop(), Some(3));
        assert_eq!(queue.pop(), Some(5));
        assert_eq!(queue.pop(), Some(8));
        assert_eq!(queue.pop(), None);
        assert_eq!(queue.try_pop(), Err(EmptyError));
        assert_eq!(queue.try_peek(), Err(EmptyError));
    }

    #[test]
    fn bounded_push_reports_the_dropped_element() {
        let mut queue = BoundedPriorityQueue::keep_largest(2);
        assert_eq!(queue.push(5), None);
        assert_eq!(queue.push(1), None);
        // 7 displaces the gatekeeper 1.
        assert_eq!(queue.push(7), Some(1));
        // 2 would become the root, so it is turned away.
        assert_eq!(queue.push(2), Some(2));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.peek(), Some(&5));
        queue.debug_validate_invariants();
    }

    #[test]
    fn keep_smallest_mirrors_keep_largest() {
        let mut queue = BoundedPriorityQueue::keep_smallest(3);
        queue.extend([10, 4, 7, 1, 9, 2]);
        assert_eq!(queue.into_sorted_vec(), vec![4, 2, 1]);
    }

    #[test]
    fn zero_bound_is_rejected() {
        let err = BoundedPriorityQueue::<i32, _>::with_bound(0, MinFirst).unwrap_err();
        assert!(err.message().contains("bound"));
    }

    #[test]
    #[should_panic(expected = "bound must be greater than zero")]
    fn keep_largest_panics_on_zero() {
        let _ = BoundedPriorityQueue::<i32, _>::keep_largest(0);
    }

    #[test]
    fn push_bounded_trims_an_overfull_queue() {
        let mut queue = BoundedPriorityQueue::from_vec(vec![1, 2, 3, 4, 5], MinFirst);
        assert_eq!(queue.push_bounded(6, 2), Some(4));
        assert_eq!(queue.into_sorted_vec(), vec![5, 6]);
    }

    #[test]
    fn push_bounded_with_zero_empties_the_queue() {
        let mut queue = BoundedPriorityQueue::new(MinFirst);
        queue.push(3);
        assert_eq!(queue.push_bounded(1, 0), Some(3));
        assert!(queue.is_empty());
    }

    #[test]
    fn composite_order_keeps_most_frequent_words() {
        // Gatekeeper is the weakest: lowest count, then lexically largest.
        let weakest_first = ByKey(|e: &(u32, &'static str)| e.0)
            .then(Reversed(|a: &(u32, &'static str), b: &(u32, &'static str)| a.1.cmp(b.1)));
        let mut queue = BoundedPriorityQueue::with_bound(2, weakest_first).unwrap();
        queue.extend([(2, "love"), (2, "i"), (1, "coding"), (1, "leetcode")]);

        let mut kept = queue.into_sorted_vec();
        kept.reverse();
        assert_eq!(kept, vec![(2, "i"), (2, "love")]);
    }

    #[test]
    fn closure_orders_are_accepted() {
        let by_distance = |a: &(i32, i32), b: &(i32, i32)| -> Ordering {
            (b.0 * b.0 + b.1 * b.1).cmp(&(a.0 * a.0 + a.1 * a.1))
        };
        let mut queue = BoundedPriorityQueue::with_bound(1, by_distance).unwrap();
        queue.extend([(3, 3), (5, -1), (-2, 4)]);
        assert_eq!(queue.into_vec(), vec![(3, 3)]);
    }

    #[test]
    fn push_pop_and_replace_root_keep_length() {
        let mut queue = BoundedPriorityQueue::from_vec(vec![4, 6, 8], MinFirst);
        assert_eq!(queue.push_pop(5), 4);
        assert_eq!(queue.replace_root(1), Some(5));
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.drain_sorted().collect::<Vec<_>>(), vec![1, 6, 8]);
        assert!(queue.is_empty());
    }

    #[test]
    fn clear_keeps_the_bound() {
        let mut queue = BoundedPriorityQueue::keep_largest(2);
        queue.extend([1, 2, 3]);
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.bound(), Some(2));
        assert_eq!(queue.iter().count(), 0);
    }

    #[test]
    fn push_bounded_never_exceeds_configured_bound() {
        let mut queue = BoundedPriorityQueue::with_bound(2, MinFirst).unwrap();
        let mut dropped = Vec::new();
        for x in 1..=5 {
            dropped.extend(queue.push_bounded(x, 10));
            assert!(queue.len() <= 2);
            assert!(queue.check_invariants().is_ok());
        }
        assert_eq!(dropped, vec![1, 2, 3]);

        assert_eq!(queue.push(6), Some(4));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.into_sorted_vec(), vec![5, 6]);
    }

    #[test]
    fn push_bounded_tighter_than_bound_wins() {
        let mut queue = BoundedPriorityQueue::with_bound(4, MinFirst).unwrap();
        queue.extend([3, 1, 4]);
        assert_eq!(queue.push_bounded(2, 1), Some(3));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.peek(), Some(&4));
    }

    #[cfg(feature = "metrics")]
    #[test]
    fn metrics_count_bound_drops() {
        let mut queue = BoundedPriorityQueue::keep_largest(1);
        queue.extend([1, 2, 3]);
        queue.pop();
        queue.pop();

        let snap = queue.snapshot();
        assert_eq!(snap.push_calls, 3);
        assert_eq!(snap.bound_drops, 2);
        assert_eq!(snap.pop_calls, 2);
        assert_eq!(snap.pop_found, 1);
        assert_eq!(snap.bound, 1);
    }
}

#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[cfg_attr(miri, ignore)]
        #[test]
        fn bounded_queue_keeps_exactly_the_k_largest(
            k in 1usize..10,
            items in prop::collection::vec(any::<i32>(), 0..200),
        ) {
            let mut queue = BoundedPriorityQueue::keep_largest(k);
            for &item in &items {
                queue.push(item);
                prop_assert!(queue.len() <= k);
            }

            let mut expected = items.clone();
            expected.sort_unstable();
            let expected = expected[expected.len().saturating_sub(k)..].to_vec();
            prop_assert_eq!(queue.into_sorted_vec(), expected);
        }

        #[cfg_attr(miri, ignore)]
        #[test]
        fn push_bounded_matches_configured_bound(
            k in 1usize..10,
            items in prop::collection::vec(any::<u16>(), 0..200),
        ) {
            let mut configured = BoundedPriorityQueue::keep_smallest(k);
            let mut explicit = BoundedPriorityQueue::new(MaxFirst);
            for &item in &items {
                configured.push(item);
                explicit.push_bounded(item, k);
            }
            prop_assert_eq!(configured.into_sorted_vec(), explicit.into_sorted_vec());
        }
    }
}
