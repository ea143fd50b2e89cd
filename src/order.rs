//! Caller-supplied orderings for the heaps.
//!
//! Every heap in this crate is parameterized by an [`Order`]: a total order in
//! which [`Ordering::Less`] means "closer to the root". Min-heap vs max-heap is
//! a choice of `Order`, never a sign flip on the keys.
//!
//! | Type             | Root is                                   |
//! |------------------|-------------------------------------------|
//! | [`MinFirst`]     | smallest by `T: Ord`                      |
//! | [`MaxFirst`]     | largest by `T: Ord`                       |
//! | [`ByKey`]        | smallest projected key                    |
//! | [`Reversed`]     | the inner order's last element            |
//! | [`Then`]         | first order, ties settled by the second   |
//! | `Fn(&T, &T) -> Ordering` | whatever the closure says         |
//!
//! ## Example
//!
//! ```
//! use std::cmp::Ordering;
//! use lruheap::order::{ByKey, Order, OrderExt};
//!
//! // Frequency descending, then word ascending.
//! let order = ByKey(|e: &(u32, &str)| e.0)
//!     .reversed()
//!     .then(|a: &(u32, &str), b: &(u32, &str)| a.1.cmp(b.1));
//!
//! assert_eq!(order.compare(&(3, "b"), &(2, "a")), Ordering::Less);
//! assert_eq!(order.compare(&(2, "a"), &(2, "b")), Ordering::Less);
//! ```
//!
//! The order must be a strict weak order and must not change while elements
//! are held. Violations are not detected; they only break heap ordering.

use std::cmp::Ordering;

/// Total order used to arrange heap elements.
pub trait Order<T: ?Sized> {
    /// `Less` if `a` belongs closer to the root than `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Order<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Ascending natural order: the smallest element is at the root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinFirst;

impl<T: Ord + ?Sized> Order<T> for MinFirst {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Descending natural order: the largest element is at the root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxFirst;

impl<T: Ord + ?Sized> Order<T> for MaxFirst {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

/// Orders elements by an owned key projected out of each element.
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<T, K, F> Order<T> for ByKey<F>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a).cmp(&(self.0)(b))
    }
}

/// Inverts an order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reversed<O>(pub O);

impl<T: ?Sized, O: Order<T>> Order<T> for Reversed<O> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Lexicographic composition: `A`, then `B` on ties.
#[derive(Debug, Clone, Copy, Default)]
pub struct Then<A, B>(pub A, pub B);

impl<T: ?Sized, A: Order<T>, B: Order<T>> Order<T> for Then<A, B> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(a, b).then_with(|| self.1.compare(a, b))
    }
}

/// Combinators for the order types of this module.
///
/// Closures get the same effect through [`Reversed`] and [`Then`] directly.
pub trait OrderExt: Sized {
    /// Same order, reversed.
    fn reversed(self) -> Reversed<Self> {
        Reversed(self)
    }

    /// Breaks ties of `self` with `next`.
    fn then<B>(self, next: B) -> Then<Self, B> {
        Then(self, next)
    }
}

impl OrderExt for MinFirst {}
impl OrderExt for MaxFirst {}
impl<F> OrderExt for ByKey<F> {}
impl<O> OrderExt for Reversed<O> {}
impl<A, B> OrderExt for Then<A, B> {}
