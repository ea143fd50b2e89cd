//! lruheap: an arena-backed LRU cache and comparator-driven priority queues.
//!
//! - [`policy::lru::LruCache`]: fixed-capacity cache with O(1) get/put/evict.
//! - [`ds::OrderedHeap`]: binary heap ordered by any [`order::Order`].
//! - [`queue::BoundedPriorityQueue`]: heap that keeps the best `k` elements.
//! - [`queue::MedianFinder`]: running median over two heaps.
//! - [`recipes`]: top-k, k-way merge, scheduling and graph searches built on
//!   the heap.
//!
//! ```
//! use lruheap::prelude::*;
//!
//! let mut cache = LruCache::new(2);
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a");
//! cache.put("c", 3);
//! assert!(!cache.contains(&"b"));
//!
//! let mut top2 = BoundedPriorityQueue::keep_largest(2);
//! top2.extend([5, 1, 9, 3]);
//! assert_eq!(top2.into_sorted_vec(), vec![5, 9]);
//! ```

pub mod builder;
pub mod ds;
pub mod error;
pub mod order;
pub mod policy;
pub mod queue;
pub mod recipes;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
pub mod traits;
