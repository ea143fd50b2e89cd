//! Priority queues built on [`OrderedHeap`](crate::ds::OrderedHeap).

pub mod bounded;
pub mod median;

pub use bounded::BoundedPriorityQueue;
pub use median::MedianFinder;
