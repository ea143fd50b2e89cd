//! k-way merge of sorted sequences.

use crate::ds::OrderedHeap;
use crate::order::MinFirst;

/// Merges already-sorted sequences into one sorted vector in O(N log k).
///
/// The heap holds one head per sequence, tagged with the sequence index;
/// equal values are emitted in sequence order, so the merge is stable.
///
/// ```
/// use lruheap::recipes::merge_k_sorted;
///
/// let merged = merge_k_sorted(vec![vec![1, 4, 5], vec![1, 3, 4], vec![2, 6]]);
/// assert_eq!(merged, vec![1, 1, 2, 3, 4, 4, 5, 6]);
/// ```
pub fn merge_k_sorted<T, I, L>(lists: L) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
    L: IntoIterator<Item = I>,
{
    let mut sources: Vec<I::IntoIter> = lists.into_iter().map(IntoIterator::into_iter).collect();
    let mut heads = OrderedHeap::with_capacity(sources.len(), MinFirst);
    let mut total = 0usize;

    for (idx, source) in sources.iter_mut().enumerate() {
        total = total.saturating_add(source.size_hint().0);
        if let Some(first) = source.next() {
            heads.push((first, idx));
        }
    }

    let mut merged = Vec::with_capacity(total);
    while let Some((value, idx)) = heads.pop() {
        merged.push(value);
        if let Some(next) = sources[idx].next() {
            heads.push((next, idx));
        }
    }
    merged
}
