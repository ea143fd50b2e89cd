#![no_main]

use libfuzzer_sys::fuzz_target;
use lruheap::queue::BoundedPriorityQueue;

// Interleaves pushes and pops on a keep_largest queue and checks that its
// contents always equal the largest `k` values still held by a sorted model.
fuzz_target!(|data: &[u8]| {
    let Some((&k, ops)) = data.split_first() else {
        return;
    };
    let bound = usize::from(k % 8) + 1;
    let mut queue = BoundedPriorityQueue::keep_largest(bound);
    let mut model: Vec<u8> = Vec::new();

    for pair in ops.chunks_exact(2) {
        if pair[0] % 4 == 0 {
            assert_eq!(queue.pop(), if model.is_empty() { None } else { Some(model.remove(0)) });
        } else {
            queue.push(pair[1]);
            let at = model.partition_point(|&v| v <= pair[1]);
            model.insert(at, pair[1]);
            if model.len() > bound {
                model.remove(0);
            }
        }
        assert_eq!(queue.len(), model.len());
        assert_eq!(queue.peek(), model.first());
    }

    queue.check_invariants().unwrap();
    assert_eq!(queue.into_sorted_vec(), model);
});
