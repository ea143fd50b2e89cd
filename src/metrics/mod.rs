//! Operation counters for [`LruCache`](crate::policy::lru::LruCache) and
//! [`BoundedPriorityQueue`](crate::queue::BoundedPriorityQueue).
//!
//! Compiled only with the `metrics` feature. Without it the counting calls
//! are removed from the hot paths entirely.

pub mod cell;
pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;
