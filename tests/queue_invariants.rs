// ==============================================
// PRIORITY QUEUE INVARIANT TESTS (integration)
// ==============================================
//
// Retention and ordering rules for the heap, the bounded queue and the
// running median, exercised through the public API only.

use lruheap::builder::QueueBuilder;
use lruheap::ds::OrderedHeap;
use lruheap::order::{ByKey, MaxFirst, MinFirst, Order, OrderExt, Reversed};
use lruheap::queue::{BoundedPriorityQueue, MedianFinder};
use lruheap::traits::PriorityQueue;

// ==============================================
// Ordering
// ==============================================

mod ordering {
    use super::*;

    #[test]
    fn min_and_max_heaps_pop_in_order() {
        let mut min = OrderedHeap::from_vec(vec![5, 3, 8, 1], MinFirst);
        let mut max = OrderedHeap::from_vec(vec![5, 3, 8, 1], MaxFirst);
        let mins: Vec<_> = std::iter::from_fn(|| min.pop()).collect();
        let maxs: Vec<_> = std::iter::from_fn(|| max.pop()).collect();
        assert_eq!(mins, vec![1, 3, 5, 8]);
        assert_eq!(maxs, vec![8, 5, 3, 1]);
    }

    #[test]
    fn equal_priorities_pop_in_insertion_order() {
        let mut heap: OrderedHeap<(u8, &str), _> =
            OrderedHeap::new(ByKey(|task: &(u8, &str)| task.0));
        heap.push((1, "first"));
        heap.push((0, "urgent"));
        heap.push((1, "second"));
        heap.push((1, "third"));
        let names: Vec<_> = heap.drain_sorted().map(|(_, name)| name).collect();
        assert_eq!(names, vec!["urgent", "first", "second", "third"]);
    }

    #[test]
    fn composite_orders_break_ties() {
        let order = ByKey(|p: &(u32, char)| p.0).then(Reversed(ByKey(|p: &(u32, char)| p.1)));
        let mut heap = OrderedHeap::new(order);
        heap.extend([(2, 'a'), (1, 'a'), (1, 'z'), (2, 'b')]);
        assert_eq!(heap.into_sorted_vec(), vec![(1, 'z'), (1, 'a'), (2, 'b'), (2, 'a')]);
    }

    #[test]
    fn closures_are_orders() {
        let by_len = |a: &String, b: &String| a.len().cmp(&b.len());
        assert!(by_len.compare(&"ab".to_string(), &"abc".to_string()).is_lt());
        let mut heap = OrderedHeap::new(by_len);
        heap.extend(["ccc", "a", "bb"].map(String::from));
        assert_eq!(heap.pop().as_deref(), Some("a"));
    }
}

// ==============================================
// Bounded Retention
// ==============================================

mod bounded {
    use super::*;

    #[test]
    fn keep_largest_retains_top_k() {
        let mut queue = BoundedPriorityQueue::keep_largest(3);
        queue.extend([4, 5, 8, 2]);
        assert_eq!(queue.peek(), Some(&4));
        assert_eq!(queue.push(3), Some(3));
        assert_eq!(queue.push(10), Some(4));
        assert_eq!(queue.into_sorted_vec(), vec![5, 8, 10]);
    }

    #[test]
    fn keep_smallest_retains_bottom_k() {
        let mut queue = BoundedPriorityQueue::keep_smallest(2);
        queue.extend([7, 1, 9, 3]);
        assert_eq!(queue.into_sorted_vec(), vec![3, 1]);
    }

    #[test]
    fn push_bounded_matches_configured_bound() {
        let input = [9, 4, 7, 1, 8, 2, 6];
        let mut configured = BoundedPriorityQueue::keep_largest(3);
        let mut ad_hoc = BoundedPriorityQueue::new(MinFirst);
        for x in input {
            configured.push(x);
            ad_hoc.push_bounded(x, 3);
        }
        assert_eq!(configured.into_sorted_vec(), ad_hoc.into_sorted_vec());
    }

    #[test]
    fn offer_reports_the_dropped_element() {
        fn fill<Q: PriorityQueue<u32>>(queue: &mut Q, items: &[u32]) -> Vec<u32> {
            items.iter().filter_map(|&x| queue.offer(x)).collect()
        }
        let mut queue = QueueBuilder::new().bound(2).build_with(MinFirst);
        assert_eq!(fill(&mut queue, &[5, 1, 7, 6]), vec![1, 5]);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn zero_bound_is_rejected() {
        assert!(BoundedPriorityQueue::<u8, _>::with_bound(0, MaxFirst).is_err());
        assert!(QueueBuilder::new().bound(0).try_build_with::<u8, _>(MinFirst).is_err());
    }

    #[test]
    fn empty_queue_errors() {
        let mut queue: BoundedPriorityQueue<u8> = BoundedPriorityQueue::new(MinFirst);
        assert!(queue.try_pop().is_err());
        assert!(queue.try_peek().is_err());
        queue.check_invariants().unwrap();
    }
}

// ==============================================
// Running Median
// ==============================================

mod median {
    use super::*;

    #[test]
    fn median_of_stream() {
        let mut finder = MedianFinder::new();
        assert_eq!(finder.median(), None);
        finder.add(1i32);
        finder.add(2);
        assert_eq!(finder.median(), Some(1.5));
        finder.add(3);
        assert_eq!(finder.median(), Some(2.0));
    }

    #[test]
    fn median_with_duplicates_and_negatives() {
        let mut finder = MedianFinder::new();
        finder.extend([-5i32, -5, 3, 3, 3, 100]);
        assert_eq!(finder.median(), Some(3.0));
        assert_eq!(finder.middle(), Some((&3, &3)));
        finder.check_invariants().unwrap();
    }
}
