//! Algorithms that use the heaps as their engine.
//!
//! Each function is a thin driver around [`OrderedHeap`](crate::ds::OrderedHeap)
//! or [`BoundedPriorityQueue`](crate::queue::BoundedPriorityQueue); they double
//! as worked examples of choosing an [`Order`](crate::order::Order).

pub mod graph;
pub mod merge;
pub mod scheduling;
pub mod top_k;

pub use graph::{Graph, count_components, dijkstra, prim_mst};
pub use merge::merge_k_sorted;
pub use scheduling::{least_interval, min_meeting_rooms};
pub use top_k::{k_closest, kth_largest, top_k_frequent, top_k_frequent_words};
