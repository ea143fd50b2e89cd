//! # Metrics Trait Hierarchy
//!
//! Recording, snapshotting, and export are split into small traits so the
//! cache and queue code only ever writes counters.
//!
//! ## Architecture
//!
//! ```text
//!            ┌─────────────────────────────┐
//!            │     CoreMetricsRecorder     │
//!            │  get_hit/get_miss/insert    │
//!            │  evict/clear                │
//!            └──────────────┬──────────────┘
//!                           │
//!                           ▼
//!                    ┌──────────────┐        ┌──────────────────────┐
//!                    │ LruMetrics   │        │ QueueMetricsRecorder │
//!                    │ Recorder     │        │ push/pop/bound drops │
//!                    └──────────────┘        └──────────────────────┘
//!
//!   Consumption (decoupled from recording):
//!   ┌──────────────────────────────┐    ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │    │ MetricsExporter<S>           │
//!   │ (bench/test)                 │    │ (production monitoring)      │
//!   └──────────────────────────────┘    └──────────────────────────────┘
//! ```
//!
//! Methods that only take `&self` (such as `peek`) record through the
//! `*ReadRecorder` traits, which are backed by [`MetricsCell`](super::cell::MetricsCell).

/// Counters shared by every cache.
pub trait CoreMetricsRecorder {
    fn record_get_hit(&mut self);
    fn record_get_miss(&mut self);
    fn record_insert_call(&mut self);
    fn record_insert_new(&mut self);
    fn record_insert_update(&mut self);
    fn record_evict_call(&mut self);
    fn record_evicted_entry(&mut self);
    fn record_clear(&mut self);
}

/// Recency-specific counters.
pub trait LruMetricsRecorder: CoreMetricsRecorder {
    fn record_pop_lru_call(&mut self);
    fn record_pop_lru_found(&mut self);
    fn record_touch_call(&mut self);
    fn record_touch_found(&mut self);
    fn record_remove_call(&mut self);
    fn record_remove_found(&mut self);
}

/// LRU counters bumped from `&self` methods.
pub trait LruMetricsReadRecorder {
    fn record_peek_call(&self);
    fn record_peek_found(&self);
    fn record_peek_lru_call(&self);
    fn record_peek_lru_found(&self);
}

/// Priority queue counters.
pub trait QueueMetricsRecorder {
    fn record_push(&mut self);
    /// A bounded push displaced an element (or rejected the incoming one).
    fn record_bound_drop(&mut self);
    fn record_pop_call(&mut self);
    fn record_pop_found(&mut self);
    fn record_clear(&mut self);
}

/// Snapshot of metrics for tests and benches.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Reset metrics between tests or benchmark iterations.
pub trait MetricsReset {
    fn reset_metrics(&mut self);
}

/// Publish snapshots to a monitoring backend.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
