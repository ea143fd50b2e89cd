#![no_main]

use libfuzzer_sys::fuzz_target;
use lruheap::ds::IntrusiveList;
use std::collections::VecDeque;

// Replays byte-encoded operations against IntrusiveList and a VecDeque of
// (handle, value) pairs, comparing front-to-back contents after each step.
fuzz_target!(|data: &[u8]| {
    let mut list: IntrusiveList<u8> = IntrusiveList::new();
    let mut model: VecDeque<(lruheap::ds::SlotId, u8)> = VecDeque::new();

    for pair in data.chunks_exact(2) {
        let (op, arg) = (pair[0] % 7, pair[1]);
        match op {
            0 => {
                let id = list.push_front(arg);
                model.push_front((id, arg));
            }
            1 => {
                let id = list.push_back(arg);
                model.push_back((id, arg));
            }
            2 => assert_eq!(list.pop_front(), model.pop_front().map(|(_, v)| v)),
            3 => assert_eq!(list.pop_back(), model.pop_back().map(|(_, v)| v)),
            4 | 5 | 6 => {
                if model.is_empty() {
                    continue;
                }
                let pos = usize::from(arg) % model.len();
                let Some((id, value)) = model.remove(pos) else {
                    continue;
                };
                match op {
                    4 => {
                        assert!(list.move_to_front(id));
                        model.push_front((id, value));
                    }
                    5 => {
                        assert!(list.move_to_back(id));
                        model.push_back((id, value));
                    }
                    _ => {
                        assert_eq!(list.remove(id), Some(value));
                        assert!(!list.contains(id));
                    }
                }
            }
            _ => unreachable!(),
        }

        assert_eq!(list.len(), model.len());
        assert!(list.iter().copied().eq(model.iter().map(|&(_, v)| v)));
    }
    list.check_invariants().unwrap();
});
