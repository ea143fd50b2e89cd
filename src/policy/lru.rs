//! # Least Recently Used (LRU) Cache
//!
//! Fixed-capacity key-value cache that evicts the entry untouched for the
//! longest time when a new key arrives at capacity.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                          LruCache<K, V>                              │
//!   │                                                                      │
//!   │   ┌──────────────────────────────────────────────────────────────┐   │
//!   │   │  FxHashMap<K, SlotId>                                        │   │
//!   │   │   key_a ──────────────┐                                      │   │
//!   │   │   key_b ────────┐     │                                      │   │
//!   │   │   key_c ──┐     │     │                                      │   │
//!   │   └───────────┼─────┼─────┼──────────────────────────────────────┘   │
//!   │               ▼     ▼     ▼                                          │
//!   │   ┌──────────────────────────────────────────────────────────────┐   │
//!   │   │  IntrusiveList<Entry<K, V>>                                  │   │
//!   │   │                                                              │   │
//!   │   │  head ──► [c] ◄──► [b] ◄──► [a] ◄── tail                     │   │
//!   │   │           MRU               LRU                              │   │
//!   │   └──────────────────────────────────────────────────────────────┘   │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The list owns keys and values; the index maps a key to the handle of its
//! node. Every access that counts as a "use" splices the node to the head in
//! O(1); eviction pops the tail.
//!
//! ## Operations
//!
//! | Operation      | Recency effect     | Complexity |
//! |----------------|--------------------|------------|
//! | `get`          | moves to MRU       | O(1)       |
//! | `get_mut`      | moves to MRU       | O(1)       |
//! | `put`          | new or updated MRU | O(1)       |
//! | `touch`        | moves to MRU       | O(1)       |
//! | `peek`         | none               | O(1)       |
//! | `contains`     | none               | O(1)       |
//! | `remove`       | n/a                | O(1)       |
//! | `pop_lru`      | n/a                | O(1)       |
//! | `peek_lru`     | none               | O(1)       |
//! | `recency_rank` | none               | O(n)       |
//!
//! ## Eviction Flow
//!
//! ```text
//!   capacity = 3
//!
//!   put(1) put(2) put(3):   head ─► [3] [2] [1] ◄─ tail
//!   get(1):                 head ─► [1] [3] [2] ◄─ tail
//!   put(4):                 evict [2], then
//!                           head ─► [4] [1] [3] ◄─ tail
//! ```
//!
//! Updating an existing key never evicts: the entry count is unchanged.
//!
//! ## Thread Safety
//!
//! `LruCache` is single-threaded. With the `concurrency` feature,
//! [`ConcurrentLruCache`] wraps it in a `parking_lot::Mutex`; every operation,
//! reads included, takes the lock because reads reorder the list.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
#[cfg(feature = "concurrency")]
use std::sync::Arc;

#[cfg(feature = "concurrency")]
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::ds::{IntrusiveList, SlotId};
use crate::error::{ConfigError, InvariantError, NotFoundError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::LruMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::LruMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    CoreMetricsRecorder, LruMetricsReadRecorder, LruMetricsRecorder, MetricsReset,
    MetricsSnapshotProvider,
};
#[cfg(feature = "concurrency")]
use crate::traits::ConcurrentCache;
use crate::traits::{CoreCache, LruCacheTrait, MutableCache};

#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Single-threaded LRU cache.
///
/// # Example
///
/// ```
/// use lruheap::policy::lru::LruCache;
///
/// let mut cache = LruCache::new(2);
/// cache.put("a", 1);
/// cache.put("b", 2);
/// cache.get(&"a");       // "a" is now most recent
/// cache.put("c", 3);     // evicts "b"
///
/// assert!(cache.contains(&"a"));
/// assert!(!cache.contains(&"b"));
/// assert_eq!(cache.len(), 2);
/// ```
pub struct LruCache<K, V> {
    index: FxHashMap<K, SlotId>,
    list: IntrusiveList<Entry<K, V>>,
    capacity: usize,
    #[cfg(feature = "metrics")]
    metrics: LruMetrics,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. Use [`try_new`](Self::try_new) to get an
    /// error instead.
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(cache) => cache,
            Err(err) => panic!("{}", err),
        }
    }

    /// Creates a cache holding at most `capacity` entries.
    ///
    /// ```
    /// use lruheap::policy::lru::LruCache;
    ///
    /// assert!(LruCache::<u32, u32>::try_new(0).is_err());
    /// assert_eq!(LruCache::<u32, u32>::try_new(8).unwrap().capacity(), 8);
    /// ```
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        Self::with_reserve(capacity, capacity)
    }

    /// Like [`try_new`](Self::try_new) but reserves room for only `reserve`
    /// entries up front.
    pub(crate) fn with_reserve(capacity: usize, reserve: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            debug!("rejected LRU cache with zero capacity");
            return Err(ConfigError::new("capacity must be greater than zero"));
        }
        let reserve = reserve.min(capacity);
        Ok(Self {
            index: FxHashMap::with_capacity_and_hasher(reserve, Default::default()),
            list: IntrusiveList::with_capacity(reserve),
            capacity,
            #[cfg(feature = "metrics")]
            metrics: LruMetrics::default(),
        })
    }

    /// Returns the value for `key` and marks it most recently used.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(&id) = self.index.get(key) else {
            #[cfg(feature = "metrics")]
            self.metrics.record_get_miss();
            return None;
        };
        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.list.move_to_front(id);
        self.list.get(id).map(|entry| &entry.value)
    }

    /// Like [`get`](Self::get), with a typed error for a missing key.
    ///
    /// ```
    /// use lruheap::error::NotFoundError;
    /// use lruheap::policy::lru::LruCache;
    ///
    /// let mut cache = LruCache::new(1);
    /// cache.put(7, "seven");
    /// assert_eq!(cache.try_get(&7), Ok(&"seven"));
    /// assert_eq!(cache.try_get(&8), Err(NotFoundError));
    /// ```
    pub fn try_get<Q>(&mut self, key: &Q) -> Result<&V, NotFoundError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).ok_or(NotFoundError)
    }

    /// Mutable access to the value for `key`; marks it most recently used.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(&id) = self.index.get(key) else {
            #[cfg(feature = "metrics")]
            self.metrics.record_get_miss();
            return None;
        };
        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.list.move_to_front(id);
        self.list.get_mut(id).map(|entry| &mut entry.value)
    }

    /// Reads the value for `key` without changing recency.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        #[cfg(feature = "metrics")]
        self.metrics.record_peek_call();

        let id = *self.index.get(key)?;
        let value = self.list.get(id).map(|entry| &entry.value);

        #[cfg(feature = "metrics")]
        if value.is_some() {
            self.metrics.record_peek_found();
        }
        value
    }

    /// Inserts or updates `key` and marks it most recently used.
    ///
    /// Returns the previous value when the key was already present. A new key
    /// arriving at capacity first evicts the least recently used entry.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if let Some(&id) = self.index.get(&key) {
            self.list.move_to_front(id);
            if let Some(entry) = self.list.get_mut(id) {
                #[cfg(feature = "metrics")]
                self.metrics.record_insert_update();
                return Some(std::mem::replace(&mut entry.value, value));
            }
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        if self.list.len() >= self.capacity {
            #[cfg(feature = "metrics")]
            self.metrics.record_evict_call();
            if self.evict_lru().is_some() {
                #[cfg(feature = "metrics")]
                self.metrics.record_evicted_entry();
                trace!(
                    capacity = self.capacity,
                    "evicted least recently used entry"
                );
            }
        }

        let id = self.list.push_front(Entry {
            key: key.clone(),
            value,
        });
        self.index.insert(key, id);
        None
    }

    /// Whether `key` is cached. Does not change recency.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Removes `key`, returning its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        #[cfg(feature = "metrics")]
        self.metrics.record_remove_call();

        let id = self.index.remove(key)?;
        let entry = self.list.remove(id)?;

        #[cfg(feature = "metrics")]
        self.metrics.record_remove_found();
        Some(entry.value)
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lru_call();

        let popped = self.evict_lru();

        #[cfg(feature = "metrics")]
        if popped.is_some() {
            self.metrics.record_pop_lru_found();
        }
        popped
    }

    /// The entry `pop_lru` would return, without removing it.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_peek_lru_call();

        let entry = self.list.back()?;

        #[cfg(feature = "metrics")]
        self.metrics.record_peek_lru_found();
        Some((&entry.key, &entry.value))
    }

    /// Marks `key` most recently used. Returns `false` if it is not cached.
    pub fn touch<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        #[cfg(feature = "metrics")]
        self.metrics.record_touch_call();

        let Some(&id) = self.index.get(key) else {
            return false;
        };
        let moved = self.list.move_to_front(id);

        #[cfg(feature = "metrics")]
        if moved {
            self.metrics.record_touch_found();
        }
        moved
    }

    /// Position of `key` counted from the most recent end (0 = MRU).
    pub fn recency_rank<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let target = *self.index.get(key)?;
        self.list.iter_ids().position(|id| id == target)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        self.index.clear();
        self.list.clear();
    }

    /// Entries from most to least recently used. Does not change recency.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.list.iter().map(|entry| (&entry.key, &entry.value))
    }

    /// Keys from most to least recently used.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.list.iter().map(|entry| &entry.key)
    }

    /// Rough heap footprint of the index and list, excluding anything the
    /// keys and values own.
    pub fn approx_bytes(&self) -> usize {
        std::mem::size_of::<Self>()
            + self.index.capacity() * (std::mem::size_of::<K>() + std::mem::size_of::<SlotId>())
            + self.list.approx_bytes()
    }

    fn evict_lru(&mut self) -> Option<(K, V)> {
        let entry = self.list.pop_back()?;
        self.index.remove(&entry.key);
        Some((entry.key, entry.value))
    }

    /// Cross-checks the index against the recency list.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.list.check_invariants()?;
        if self.index.len() != self.list.len() {
            return Err(InvariantError::new(format!(
                "index holds {} keys but list holds {} entries",
                self.index.len(),
                self.list.len()
            )));
        }
        if self.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "len {} exceeds capacity {}",
                self.len(),
                self.capacity
            )));
        }
        for (id, entry) in self.list.iter_entries() {
            match self.index.get(&entry.key) {
                Some(&indexed) if indexed == id => {},
                _ => {
                    return Err(InvariantError::new(format!(
                        "list node {} is not indexed by its key",
                        id.index()
                    )));
                },
            }
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("{}", err);
        }
    }
}

impl<K, V> fmt::Debug for LruCache<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.capacity)
            .field("len", &self.index.len())
            .field(
                "entries",
                &self
                    .list
                    .iter()
                    .map(|entry| (&entry.key, &entry.value))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl<K, V> CoreCache<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.put(key, value)
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        LruCache::get(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        LruCache::contains(self, key)
    }

    fn len(&self) -> usize {
        LruCache::len(self)
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn clear(&mut self) {
        LruCache::clear(self)
    }
}

impl<K, V> MutableCache<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn remove(&mut self, key: &K) -> Option<V> {
        LruCache::remove(self, key)
    }
}

impl<K, V> LruCacheTrait<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn pop_lru(&mut self) -> Option<(K, V)> {
        LruCache::pop_lru(self)
    }

    fn peek_lru(&self) -> Option<(&K, &V)> {
        LruCache::peek_lru(self)
    }

    fn touch(&mut self, key: &K) -> bool {
        LruCache::touch(self, key)
    }

    fn recency_rank(&self, key: &K) -> Option<usize> {
        LruCache::recency_rank(self, key)
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MetricsSnapshotProvider<LruMetricsSnapshot> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn snapshot(&self) -> LruMetricsSnapshot {
        LruMetricsSnapshot::capture(&self.metrics, self.len(), self.capacity)
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MetricsReset for LruCache<K, V> {
    fn reset_metrics(&mut self) {
        self.metrics = LruMetrics::default();
    }
}

/// Thread-safe LRU cache: an [`LruCache`] behind a shared `parking_lot::Mutex`.
///
/// Cloning the handle shares the same cache. Values are returned by clone
/// since no reference may outlive the lock.
///
/// ```
/// # #[cfg(feature = "concurrency")]
/// # {
/// use lruheap::policy::lru::ConcurrentLruCache;
///
/// let cache = ConcurrentLruCache::new(2);
/// let writer = cache.clone();
/// std::thread::spawn(move || {
///     writer.put(1, "one".to_string());
/// })
/// .join()
/// .unwrap();
///
/// assert_eq!(cache.get(&1), Some("one".to_string()));
/// # }
/// ```
#[cfg(feature = "concurrency")]
pub struct ConcurrentLruCache<K, V> {
    inner: Arc<Mutex<LruCache<K, V>>>,
}

#[cfg(feature = "concurrency")]
impl<K, V> Clone for ConcurrentLruCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> fmt::Debug for ConcurrentLruCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = self.inner.lock();
        f.debug_struct("ConcurrentLruCache")
            .field("len", &cache.index.len())
            .field("capacity", &cache.capacity)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> ConcurrentLruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        Self::from_cache(LruCache::new(capacity))
    }

    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        LruCache::try_new(capacity).map(Self::from_cache)
    }

    pub fn from_cache(cache: LruCache<K, V>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }

    /// Clones the value out and marks the key most recently used.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.inner.lock().get(key).cloned()
    }

    /// Runs `f` on the value while holding the lock; marks the key most
    /// recently used.
    pub fn get_with<Q, R>(&self, key: &Q, f: impl FnOnce(&V) -> R) -> Option<R>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().get(key).map(f)
    }

    pub fn peek<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.inner.lock().peek(key).cloned()
    }

    pub fn put(&self, key: K, value: V) -> Option<V> {
        self.inner.lock().put(key, value)
    }

    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().remove(key)
    }

    pub fn pop_lru(&self) -> Option<(K, V)> {
        self.inner.lock().pop_lru()
    }

    pub fn touch<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().touch(key)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().contains(key)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

#[cfg(feature = "concurrency")]
impl<K: Send, V: Send> ConcurrentCache for ConcurrentLruCache<K, V> {}
