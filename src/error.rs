//! Error types shared by the cache, the queues and the builders.
//!
//! | Error              | Raised by                                        |
//! |--------------------|--------------------------------------------------|
//! | [`ConfigError`]    | zero capacity, zero bound (`try_new`, `try_build`, `with_bound`) |
//! | [`NotFoundError`]  | [`LruCache::try_get`](crate::policy::lru::LruCache::try_get) on a miss |
//! | [`EmptyError`]     | `try_pop` / `try_peek` on an empty queue         |
//! | [`InvariantError`] | `check_invariants` on any structure              |
//!
//! The `Option`-returning methods (`get`, `pop`, `peek`) are the primary API;
//! the typed errors exist for callers that want to propagate with `?`.
//!
//! ```
//! use lruheap::error::{ConfigError, EmptyError};
//! use lruheap::order::MinFirst;
//! use lruheap::queue::BoundedPriorityQueue;
//!
//! fn smallest_of(values: &[u32]) -> Result<u32, Box<dyn std::error::Error>> {
//!     let mut queue = BoundedPriorityQueue::with_bound(values.len().max(1), MinFirst)?;
//!     queue.extend(values.iter().copied());
//!     Ok(queue.try_pop()?)
//! }
//!
//! assert_eq!(smallest_of(&[4, 2, 9]).unwrap(), 2);
//! let err = smallest_of(&[]).unwrap_err();
//! assert!(err.downcast_ref::<EmptyError>().is_some());
//! assert!(err.downcast_ref::<ConfigError>().is_none());
//! ```

use std::fmt;

/// Declares an error newtype that carries a human-readable message.
macro_rules! message_error {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(String);

        impl $name {
            #[inline]
            pub fn new(msg: impl Into<String>) -> Self {
                Self(msg.into())
            }

            /// The description passed to [`new`](Self::new).
            #[inline]
            pub fn message(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::error::Error for $name {}
    };
}

message_error! {
    /// A structure failed its own consistency check.
    ///
    /// The message names the broken relation, e.g. index and list lengths
    /// disagreeing or a child ranking above its parent.
    InvariantError
}

message_error! {
    /// Construction parameters were rejected.
    ///
    /// ```
    /// use lruheap::policy::lru::LruCache;
    ///
    /// let err = LruCache::<u64, u64>::try_new(0).unwrap_err();
    /// assert_eq!(err.message(), "capacity must be greater than zero");
    /// ```
    ConfigError
}

/// A cache lookup missed. Nothing was mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NotFoundError;

impl fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("key not found in cache")
    }
}

impl std::error::Error for NotFoundError {}

/// `pop` or `peek` was called on a queue with no elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmptyError;

impl fmt::Display for EmptyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("priority queue is empty")
    }
}

impl std::error::Error for EmptyError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ds::OrderedHeap;
    use crate::order::MaxFirst;
    use crate::policy::lru::LruCache;
    use crate::queue::BoundedPriorityQueue;

    #[test]
    fn zero_sized_structures_report_config_errors() {
        let cache = LruCache::<u8, u8>::try_new(0).unwrap_err();
        let queue = BoundedPriorityQueue::<u8, _>::with_bound(0, MaxFirst).unwrap_err();
        assert!(cache.to_string().contains("capacity"));
        assert!(queue.to_string().contains("bound"));
        assert_ne!(cache, queue);
    }

    #[test]
    fn miss_and_empty_have_fixed_messages() {
        let mut cache: LruCache<&str, u8> = LruCache::new(1);
        assert_eq!(cache.try_get("absent"), Err(NotFoundError));
        assert_eq!(NotFoundError.to_string(), "key not found in cache");

        let mut heap: OrderedHeap<u8> = OrderedHeap::default();
        assert_eq!(heap.try_pop(), Err(EmptyError));
        assert_eq!(EmptyError.to_string(), "priority queue is empty");
    }

    #[test]
    fn message_errors_box_as_std_errors() {
        let boxed: Box<dyn std::error::Error + Send + Sync> =
            Box::new(InvariantError::new("list node 3 is not indexed by its key"));
        assert_eq!(boxed.to_string(), "list node 3 is not indexed by its key");

        let cloned = ConfigError::new("bad bound").clone();
        assert_eq!(cloned.message(), "bad bound");
        assert!(format!("{:?}", cloned).contains("bad bound"));
    }
}
