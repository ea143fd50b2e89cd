use crate::metrics::metrics_impl::{LruMetrics, QueueMetrics};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LruMetricsSnapshot {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,
    pub insert_calls: u64,
    pub insert_updates: u64,
    pub insert_new: u64,
    pub evict_calls: u64,
    pub evicted_entries: u64,
    pub pop_lru_calls: u64,
    pub pop_lru_found: u64,
    pub touch_calls: u64,
    pub touch_found: u64,
    pub remove_calls: u64,
    pub remove_found: u64,
    pub clear_calls: u64,
    pub peek_calls: u64,
    pub peek_found: u64,
    pub peek_lru_calls: u64,
    pub peek_lru_found: u64,

    // gauges captured at snapshot time
    pub cache_len: usize,
    pub capacity: usize,
}

impl LruMetricsSnapshot {
    pub(crate) fn capture(m: &LruMetrics, cache_len: usize, capacity: usize) -> Self {
        Self {
            get_calls: m.get_calls,
            get_hits: m.get_hits,
            get_misses: m.get_misses,
            insert_calls: m.insert_calls,
            insert_updates: m.insert_updates,
            insert_new: m.insert_new,
            evict_calls: m.evict_calls,
            evicted_entries: m.evicted_entries,
            pop_lru_calls: m.pop_lru_calls,
            pop_lru_found: m.pop_lru_found,
            touch_calls: m.touch_calls,
            touch_found: m.touch_found,
            remove_calls: m.remove_calls,
            remove_found: m.remove_found,
            clear_calls: m.clear_calls,
            peek_calls: m.peek_calls.get(),
            peek_found: m.peek_found.get(),
            peek_lru_calls: m.peek_lru_calls.get(),
            peek_lru_found: m.peek_lru_found.get(),
            cache_len,
            capacity,
        }
    }

    /// Fraction of `get` calls that hit; `0.0` before the first call.
    pub fn hit_rate(&self) -> f64 {
        if self.get_calls == 0 {
            0.0
        } else {
            self.get_hits as f64 / self.get_calls as f64
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QueueMetricsSnapshot {
    pub push_calls: u64,
    pub bound_drops: u64,
    pub pop_calls: u64,
    pub pop_found: u64,
    pub clear_calls: u64,

    pub queue_len: usize,
    /// `0` for an unbounded queue.
    pub bound: usize,
}

impl QueueMetricsSnapshot {
    pub(crate) fn capture(m: &QueueMetrics, queue_len: usize, bound: Option<usize>) -> Self {
        Self {
            push_calls: m.push_calls,
            bound_drops: m.bound_drops,
            pop_calls: m.pop_calls,
            pop_found: m.pop_found,
            clear_calls: m.clear_calls,
            queue_len,
            bound: bound.unwrap_or(0),
        }
    }
}
