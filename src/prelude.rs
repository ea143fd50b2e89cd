pub use crate::builder::{CacheBuilder, QueueBuilder};
pub use crate::ds::{OrderedHeap, UnionFind};
pub use crate::error::{ConfigError, EmptyError, InvariantError, NotFoundError};
pub use crate::order::{ByKey, MaxFirst, MinFirst, Order, OrderExt, Reversed};
pub use crate::policy::lru::LruCache;
pub use crate::queue::{BoundedPriorityQueue, MedianFinder};
pub use crate::traits::{CoreCache, LruCacheTrait, MutableCache, PriorityQueue};

#[cfg(feature = "concurrency")]
pub use crate::policy::lru::ConcurrentLruCache;
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::{LruMetricsSnapshot, QueueMetricsSnapshot};
