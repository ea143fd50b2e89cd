//! Builders for the cache and the bounded queue.
//!
//! Both follow the same shape: chain setters, then `try_build` for a
//! [`ConfigError`] on bad parameters or `build` to panic with the same message.
//!
//! ## Example
//!
//! ```rust
//! use lruheap::builder::{CacheBuilder, QueueBuilder};
//! use lruheap::order::MinFirst;
//!
//! let mut cache = CacheBuilder::new(100)
//!     .preallocate(false)
//!     .try_build::<u64, String>()
//!     .unwrap();
//! cache.put(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Some(&"hello".to_string()));
//!
//! let mut top3 = QueueBuilder::new().bound(3).capacity_hint(3).build_with(MinFirst);
//! top3.extend([9, 2, 7, 4, 8]);
//! assert_eq!(top3.into_sorted_vec(), vec![7, 8, 9]);
//! ```

use std::hash::Hash;

use crate::ds::OrderedHeap;
use crate::error::ConfigError;
#[cfg(feature = "concurrency")]
use crate::policy::lru::ConcurrentLruCache;
use crate::policy::lru::LruCache;
use crate::order::Order;
use crate::queue::BoundedPriorityQueue;

/// Builder for [`LruCache`].
#[derive(Debug, Clone)]
pub struct CacheBuilder {
    capacity: usize,
    preallocate: bool,
}

impl CacheBuilder {
    /// Starts a builder for a cache of `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            preallocate: true,
        }
    }

    /// Whether to reserve room for `capacity` entries up front (default: yes).
    ///
    /// Turn this off for large capacities that are rarely filled.
    pub fn preallocate(mut self, preallocate: bool) -> Self {
        self.preallocate = preallocate;
        self
    }

    /// # Panics
    ///
    /// Panics if the capacity is zero. For a non-panicking alternative, use
    /// [`try_build`](Self::try_build).
    pub fn build<K, V>(self) -> LruCache<K, V>
    where
        K: Eq + Hash + Clone,
    {
        match self.try_build() {
            Ok(cache) => cache,
            Err(e) => panic!("{}", e),
        }
    }

    /// # Errors
    ///
    /// Returns [`ConfigError`] if the capacity is zero.
    pub fn try_build<K, V>(self) -> Result<LruCache<K, V>, ConfigError>
    where
        K: Eq + Hash + Clone,
    {
        let reserve = if self.preallocate { self.capacity } else { 0 };
        LruCache::with_reserve(self.capacity, reserve)
    }

    /// Builds the cache behind a shared lock.
    #[cfg(feature = "concurrency")]
    pub fn try_build_concurrent<K, V>(self) -> Result<ConcurrentLruCache<K, V>, ConfigError>
    where
        K: Eq + Hash + Clone,
    {
        self.try_build().map(ConcurrentLruCache::from_cache)
    }
}

/// Builder for [`BoundedPriorityQueue`].
///
/// The order is supplied last, to [`build_with`](Self::build_with), because
/// it usually fixes the element type.
#[derive(Debug, Clone, Default)]
pub struct QueueBuilder {
    bound: Option<usize>,
    capacity_hint: Option<usize>,
}

impl QueueBuilder {
    /// Starts an unbounded queue builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps at most `k` elements.
    pub fn bound(mut self, k: usize) -> Self {
        self.bound = Some(k);
        self
    }

    /// Elements to reserve room for up front. Never more than the bound.
    pub fn capacity_hint(mut self, n: usize) -> Self {
        self.capacity_hint = Some(n);
        self
    }

    /// # Panics
    ///
    /// Panics if a zero bound was set. For a non-panicking alternative, use
    /// [`try_build_with`](Self::try_build_with).
    pub fn build_with<T, O: Order<T>>(self, order: O) -> BoundedPriorityQueue<T, O> {
        match self.try_build_with(order) {
            Ok(queue) => queue,
            Err(e) => panic!("{}", e),
        }
    }

    /// # Errors
    ///
    /// Returns [`ConfigError`] if a zero bound was set.
    ///
    /// ```
    /// use lruheap::builder::QueueBuilder;
    /// use lruheap::order::MaxFirst;
    ///
    /// assert!(QueueBuilder::new().bound(0).try_build_with::<u32, _>(MaxFirst).is_err());
    /// ```
    pub fn try_build_with<T, O: Order<T>>(
        self,
        order: O,
    ) -> Result<BoundedPriorityQueue<T, O>, ConfigError> {
        match self.bound {
            Some(bound) => BoundedPriorityQueue::with_bound_and_capacity(
                bound,
                self.capacity_hint.unwrap_or(bound),
                order,
            ),
            None => Ok(BoundedPriorityQueue::from_heap(
                OrderedHeap::with_capacity(self.capacity_hint.unwrap_or(0), order),
                None,
            )),
        }
    }
}
