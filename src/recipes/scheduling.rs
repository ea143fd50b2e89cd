//! Interval and task scheduling driven by a min-heap of "next free" times.

use std::collections::VecDeque;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ds::OrderedHeap;
use crate::order::{MaxFirst, MinFirst};

/// Minimum number of rooms needed to host every `(start, end)` meeting.
///
/// Intervals are half-open: a meeting ending at `t` frees its room for one
/// starting at `t`.
///
/// ```
/// use lruheap::recipes::min_meeting_rooms;
///
/// assert_eq!(min_meeting_rooms(&[(0, 30), (5, 10), (15, 20)]), 2);
/// assert_eq!(min_meeting_rooms(&[(7, 10), (2, 4)]), 1);
/// ```
pub fn min_meeting_rooms<T: Ord + Copy>(intervals: &[(T, T)]) -> usize {
    let mut by_start = intervals.to_vec();
    by_start.sort_unstable_by_key(|&(start, _)| start);

    // Root is the room that frees up first.
    let mut ends = OrderedHeap::with_capacity(by_start.len(), MinFirst);
    for (start, end) in by_start {
        if ends.peek().is_some_and(|&earliest| earliest <= start) {
            ends.pop();
        }
        ends.push(end);
    }
    ends.len()
}

/// Shortest schedule length (busy plus idle slots) that runs every task
/// with at least `cooldown` slots between two runs of the same task.
///
/// The task with the most remaining runs is always scheduled first; tasks
/// waiting out their cooldown sit in a FIFO ordered by release time.
///
/// ```
/// use lruheap::recipes::least_interval;
///
/// assert_eq!(least_interval(&['A', 'A', 'A', 'B', 'B', 'B'], 2), 8);
/// assert_eq!(least_interval(&['A', 'A', 'A', 'B', 'B', 'B'], 0), 6);
/// ```
pub fn least_interval<T: Hash + Eq>(tasks: &[T], cooldown: usize) -> usize {
    let mut counts: FxHashMap<&T, usize> = FxHashMap::default();
    for task in tasks {
        *counts.entry(task).or_insert(0) += 1;
    }

    let mut ready = OrderedHeap::from_vec(counts.into_values().collect(), MaxFirst);
    // (remaining runs, slot count after which the task is runnable again)
    let mut waiting: VecDeque<(usize, usize)> = VecDeque::new();
    let mut time = 0usize;

    loop {
        if ready.is_empty() {
            match waiting.front() {
                Some(&(_, release)) => time = time.max(release),
                None => break,
            }
        }
        while let Some(&(remaining, release)) = waiting.front() {
            if release > time {
                break;
            }
            waiting.pop_front();
            ready.push(remaining);
        }
        if let Some(remaining) = ready.pop() {
            time += 1;
            if remaining > 1 {
                waiting.push_back((remaining - 1, time + cooldown));
            }
        }
    }
    time
}
