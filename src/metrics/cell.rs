use std::cell::Cell;

/// Counter bumped from `&self` methods such as `peek`.
///
/// The cell is `Send` but not `Sync`: a cache holding one can move between
/// threads or sit behind a lock, but cannot be read from two threads at once.
#[repr(transparent)]
#[derive(Debug, Default)]
pub struct MetricsCell(Cell<u64>);

impl MetricsCell {
    #[inline]
    pub fn new() -> Self {
        Self(Cell::new(0))
    }

    #[inline]
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    #[inline]
    pub fn incr(&self) {
        self.0.set(self.0.get() + 1);
    }

    #[inline]
    pub fn reset(&self) {
        self.0.set(0);
    }
}

impl Clone for MetricsCell {
    fn clone(&self) -> Self {
        Self(Cell::new(self.get()))
    }
}
