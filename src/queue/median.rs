//! Running median over a stream.
//!
//! ```text
//!          low (max-first)        high (min-first)
//!        ┌─────────────────┐    ┌─────────────────┐
//!        │  ... 3  4  [5]  │    │  [7]  8  9 ...  │
//!        └────────────▲────┘    └──▲──────────────┘
//!                     │            │
//!                root(low)  <=  root(high)
//!
//!   len(low) == len(high) or len(low) == len(high) + 1
//! ```
//!
//! Each `add` is O(log n); `median` is O(1).

use crate::ds::OrderedHeap;
use crate::error::InvariantError;
use crate::order::{MaxFirst, MinFirst};

/// Two-heap running median.
///
/// ```
/// use lruheap::queue::MedianFinder;
///
/// let mut finder = MedianFinder::new();
/// finder.add(1);
/// finder.add(2);
/// assert_eq!(finder.median(), Some(1.5));
/// finder.add(3);
/// assert_eq!(finder.median(), Some(2.0));
/// ```
#[derive(Debug, Clone)]
pub struct MedianFinder<T> {
    low: OrderedHeap<T, MaxFirst>,
    high: OrderedHeap<T, MinFirst>,
}

impl<T: Ord> MedianFinder<T> {
    pub fn new() -> Self {
        Self {
            low: OrderedHeap::new(MaxFirst),
            high: OrderedHeap::new(MinFirst),
        }
    }

    /// Adds `value` to the stream.
    pub fn add(&mut self, value: T) {
        let upper_half = matches!(self.low.peek(), Some(top) if value > *top);
        if upper_half {
            self.high.push(value);
        } else {
            self.low.push(value);
        }

        if self.low.len() > self.high.len() + 1 {
            if let Some(moved) = self.low.pop() {
                self.high.push(moved);
            }
        } else if self.high.len() > self.low.len() {
            if let Some(moved) = self.high.pop() {
                self.low.push(moved);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.low.len() + self.high.len()
    }

    pub fn is_empty(&self) -> bool {
        self.low.is_empty()
    }

    /// The one or two middle elements, lower first.
    ///
    /// For an odd count both references point at the same element.
    pub fn middle(&self) -> Option<(&T, &T)> {
        let lower = self.low.peek()?;
        if self.low.len() > self.high.len() {
            Some((lower, lower))
        } else {
            self.high.peek().map(|upper| (lower, upper))
        }
    }

    /// Median of everything added so far, or `None` before the first `add`.
    ///
    /// Needs a lossless `Into<f64>`, which `i64`, `u64` and `usize` lack;
    /// use [`median_by`](Self::median_by) for those.
    pub fn median(&self) -> Option<f64>
    where
        T: Copy + Into<f64>,
    {
        self.median_by(|value| (*value).into())
    }

    /// Median with each middle element mapped to `f64` by `project`.
    ///
    /// ```
    /// use lruheap::queue::MedianFinder;
    ///
    /// let mut finder = MedianFinder::new();
    /// finder.extend([3_000_000_000i64, 1, 4]);
    /// assert_eq!(finder.median_by(|v| *v as f64), Some(4.0));
    /// finder.add(-2);
    /// assert_eq!(finder.median_by(|v| *v as f64), Some(2.5));
    /// ```
    pub fn median_by<F>(&self, mut project: F) -> Option<f64>
    where
        F: FnMut(&T) -> f64,
    {
        let (lower, upper) = self.middle()?;
        Some(if self.low.len() > self.high.len() {
            project(lower)
        } else {
            (project(lower) + project(upper)) / 2.0
        })
    }

    pub fn clear(&mut self) {
        self.low.clear();
        self.high.clear();
    }

    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.low.check_invariants()?;
        self.high.check_invariants()?;
        let (low, high) = (self.low.len(), self.high.len());
        if low != high && low != high + 1 {
            return Err(InvariantError::new(format!(
                "halves out of balance: low {} high {}",
                low, high
            )));
        }
        if let (Some(lower), Some(upper)) = (self.low.peek(), self.high.peek()) {
            if lower > upper {
                return Err(InvariantError::new("low half root exceeds high half root"));
            }
        }
        Ok(())
    }
}

impl<T: Ord> Default for MedianFinder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for MedianFinder<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}
