//! # Cache and Queue Traits
//!
//! Small trait hierarchy shared by the concrete containers, so callers can
//! write code against "a cache" or "a priority queue" without naming one.
//!
//! ## Architecture
//!
//! ```text
//!      ┌─────────────────────────────────────────┐
//!      │            CoreCache<K, V>              │
//!      │  insert(&mut, K, V) → Option<V>         │
//!      │  get(&mut, &K) → Option<&V>             │
//!      │  contains / len / is_empty / capacity   │
//!      │  clear(&mut)                            │
//!      └──────────────────┬──────────────────────┘
//!                         ▼
//!      ┌─────────────────────────────────────────┐
//!      │          MutableCache<K, V>             │
//!      │  remove(&K) → Option<V>                 │
//!      └──────────────────┬──────────────────────┘
//!                         ▼
//!      ┌─────────────────────────────────────────┐
//!      │         LruCacheTrait<K, V>             │
//!      │  pop_lru / peek_lru / touch             │
//!      │  recency_rank                           │
//!      └─────────────────────────────────────────┘
//!
//!      ┌─────────────────────────────────────────┐
//!      │          PriorityQueue<T>               │
//!      │  offer(T) → Option<T>                   │
//!      │  pop / peek / len / is_empty            │
//!      │  try_pop / try_peek (provided)          │
//!      └─────────────────────────────────────────┘
//! ```
//!
//! | Trait              | Extends        | Implemented by                          |
//! |--------------------|----------------|-----------------------------------------|
//! | `CoreCache`        | -              | `LruCache`                              |
//! | `MutableCache`     | `CoreCache`    | `LruCache`                              |
//! | `LruCacheTrait`    | `MutableCache` | `LruCache`                              |
//! | `ConcurrentCache`  | `Send + Sync`  | `ConcurrentLruCache`                    |
//! | `PriorityQueue`    | -              | `OrderedHeap`, `BoundedPriorityQueue`   |

use crate::error::EmptyError;

/// Operations every cache supports.
///
/// # Example
///
/// ```
/// use lruheap::policy::lru::LruCache;
/// use lruheap::traits::CoreCache;
///
/// fn hit_count<C: CoreCache<&'static str, u32>>(cache: &mut C, keys: &[&'static str]) -> usize {
///     keys.iter().filter(|key| cache.get(key).is_some()).count()
/// }
///
/// let mut cache = LruCache::new(2);
/// cache.insert("x", 1);
/// cache.insert("y", 2);
/// cache.insert("z", 3);
/// assert_eq!(hit_count(&mut cache, &["x", "y", "z"]), 2);
/// ```
pub trait CoreCache<K, V> {
    /// Stores `value` under `key`; the old value comes back on an update.
    ///
    /// At capacity, an entry may be evicted first according to the cache's
    /// policy.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Gets a value by key. May update the eviction order.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Checks for a key without touching the eviction order.
    fn contains(&self, key: &K) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries.
    fn capacity(&self) -> usize;

    fn clear(&mut self);
}

/// Caches that allow removal of an arbitrary key.
pub trait MutableCache<K, V>: CoreCache<K, V> {
    fn remove(&mut self, key: &K) -> Option<V>;
}

/// Recency-ordered caches.
///
/// ```
/// use lruheap::policy::lru::LruCache;
/// use lruheap::traits::{CoreCache, LruCacheTrait};
///
/// let mut cache = LruCache::new(3);
/// cache.insert(1, "one");
/// cache.insert(2, "two");
/// cache.insert(3, "three");
/// LruCacheTrait::touch(&mut cache, &1);
///
/// let (key, _) = LruCacheTrait::pop_lru(&mut cache).unwrap();
/// assert_eq!(key, 2);
/// ```
pub trait LruCacheTrait<K, V>: MutableCache<K, V> {
    /// Removes and returns the least recently used entry.
    fn pop_lru(&mut self) -> Option<(K, V)>;

    /// The least recently used entry, without changing recency.
    fn peek_lru(&self) -> Option<(&K, &V)>;

    /// Marks an entry as recently used. `false` if the key is absent.
    fn touch(&mut self, key: &K) -> bool;

    /// Distance from the most recently used end (0 = MRU).
    fn recency_rank(&self, key: &K) -> Option<usize>;
}

/// Marker for caches that may be shared between threads.
pub trait ConcurrentCache: Send + Sync {}

/// A heap-ordered queue: `pop` always yields the ordering-minimal element.
///
/// `offer` returns an element the queue declined to keep, which only a
/// bounded queue ever does.
///
/// ```
/// use lruheap::ds::OrderedHeap;
/// use lruheap::queue::BoundedPriorityQueue;
/// use lruheap::traits::PriorityQueue;
///
/// fn drain<Q: PriorityQueue<u32>>(mut queue: Q, items: &[u32]) -> Vec<u32> {
///     for &item in items {
///         queue.offer(item);
///     }
///     std::iter::from_fn(|| queue.pop()).collect()
/// }
///
/// assert_eq!(drain(OrderedHeap::min_heap(), &[5, 3, 8, 1]), vec![1, 3, 5, 8]);
/// assert_eq!(drain(BoundedPriorityQueue::keep_largest(2), &[5, 3, 8, 1]), vec![5, 8]);
/// ```
pub trait PriorityQueue<T> {
    /// Adds `value`; returns whatever element was dropped to make room.
    fn offer(&mut self, value: T) -> Option<T>;

    fn pop(&mut self) -> Option<T>;

    fn peek(&self) -> Option<&T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn try_pop(&mut self) -> Result<T, EmptyError> {
        self.pop().ok_or(EmptyError)
    }

    fn try_peek(&self) -> Result<&T, EmptyError> {
        self.peek().ok_or(EmptyError)
    }
}
