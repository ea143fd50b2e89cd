//! Top-k selection over a stream with a bounded heap.
//!
//! Every function here keeps a [`BoundedPriorityQueue`] of size `k` whose
//! root is the weakest survivor, so the whole input is scanned once in
//! O(n log k).

use std::cmp::{Ordering, Reverse};
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::order::{ByKey, Order};
use crate::queue::BoundedPriorityQueue;

fn frequencies<T, I>(items: I) -> FxHashMap<T, usize>
where
    T: Hash + Eq,
    I: IntoIterator<Item = T>,
{
    let mut counts = FxHashMap::default();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}

/// Drains a gatekeeper-ordered queue into best-first order.
fn best_first<T, O: Order<T>>(queue: BoundedPriorityQueue<T, O>) -> Vec<T> {
    let mut out = queue.into_sorted_vec();
    out.reverse();
    out
}

/// The `k` most frequent items with their counts, most frequent first.
///
/// Items with equal counts come back in unspecified order.
///
/// ```
/// use lruheap::recipes::top_k_frequent;
///
/// let top = top_k_frequent([1, 1, 2, 2, 2, 3], 2);
/// assert_eq!(top, vec![(2, 3), (1, 2)]);
/// ```
pub fn top_k_frequent<T, I>(items: I, k: usize) -> Vec<(T, usize)>
where
    T: Hash + Eq,
    I: IntoIterator<Item = T>,
{
    let Ok(mut queue) = BoundedPriorityQueue::with_bound(k, ByKey(|e: &(T, usize)| e.1)) else {
        return Vec::new();
    };
    queue.extend(frequencies(items));
    best_first(queue)
}

/// The `k` most frequent words, by count descending then word ascending.
///
/// ```
/// use lruheap::recipes::top_k_frequent_words;
///
/// let words = ["i", "love", "leetcode", "i", "love", "coding"];
/// assert_eq!(top_k_frequent_words(&words, 2), vec!["i", "love"]);
/// ```
pub fn top_k_frequent_words<'a, S>(words: &'a [S], k: usize) -> Vec<&'a str>
where
    S: AsRef<str>,
{
    // Weakest first: lower count, then the lexically larger word.
    let gatekeeper = |a: &(&'a str, usize), b: &(&'a str, usize)| -> Ordering {
        a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0))
    };
    let Ok(mut queue) = BoundedPriorityQueue::with_bound(k, gatekeeper) else {
        return Vec::new();
    };
    queue.extend(frequencies(words.iter().map(|word| word.as_ref())));
    best_first(queue).into_iter().map(|(word, _)| word).collect()
}

/// The `k`-th largest item (1-based), or `None` when `k` is zero or exceeds
/// the number of items.
///
/// ```
/// use lruheap::recipes::kth_largest;
///
/// assert_eq!(kth_largest([3, 2, 1, 5, 6, 4], 2), Some(5));
/// assert_eq!(kth_largest([3, 2, 1], 4), None);
/// ```
pub fn kth_largest<T, I>(items: I, k: usize) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    if k == 0 {
        return None;
    }
    let mut queue = BoundedPriorityQueue::keep_largest(k);
    queue.extend(items);
    if queue.len() < k {
        return None;
    }
    queue.pop()
}

/// The `k` points nearest the origin, nearest first.
///
/// Distances are compared as exact squared integers.
///
/// ```
/// use lruheap::recipes::k_closest;
///
/// assert_eq!(k_closest(&[(3, 3), (5, -1), (-2, 4)], 2), vec![(3, 3), (-2, 4)]);
/// ```
pub fn k_closest(points: &[(i64, i64)], k: usize) -> Vec<(i64, i64)> {
    let squared = |p: &(i64, i64)| {
        let (x, y) = (u128::from(p.0.unsigned_abs()), u128::from(p.1.unsigned_abs()));
        x * x + y * y
    };
    // Farthest survivor sits at the root.
    let farthest_first = ByKey(|p: &(i64, i64)| Reverse(squared(p)));
    let Ok(mut queue) = BoundedPriorityQueue::with_bound(k, farthest_first) else {
        return Vec::new();
    };
    queue.extend(points.iter().copied());
    best_first(queue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_k_frequent_reports_counts() {
        let mut top = top_k_frequent(vec![1, 1, 2, 2, 2, 3], 2);
        top.sort_unstable();
        assert_eq!(top, vec![(1, 2), (2, 3)]);
    }

    #[test]
    fn top_k_frequent_with_large_k_returns_everything() {
        let top = top_k_frequent("aab".chars(), 10);
        assert_eq!(top, vec![('a', 2), ('b', 1)]);
        assert!(top_k_frequent("aab".chars(), 0).is_empty());
    }

    #[test]
    fn frequent_words_break_ties_lexically() {
        let words = [
            "the", "day", "is", "sunny", "the", "the", "the", "sunny", "is", "is",
        ];
        assert_eq!(
            top_k_frequent_words(&words, 4),
            vec!["the", "is", "sunny", "day"]
        );

        let owned: Vec<String> = ["b", "a", "c"].iter().map(|s| s.to_string()).collect();
        assert_eq!(top_k_frequent_words(&owned, 2), vec!["a", "b"]);
    }

    #[test]
    fn kth_largest_counts_duplicates() {
        assert_eq!(kth_largest(vec![3, 2, 3, 1, 2, 4, 5, 5, 6], 4), Some(4));
        assert_eq!(kth_largest(Vec::<i32>::new(), 1), None);
        assert_eq!(kth_largest([7], 0), None);
    }

    #[test]
    fn k_closest_handles_extreme_coordinates() {
        let points = [(i64::MIN, i64::MIN), (1, 1), (i64::MAX, 0)];
        assert_eq!(k_closest(&points, 1), vec![(1, 1)]);
        assert!(k_closest(&points, 0).is_empty());
    }
}
