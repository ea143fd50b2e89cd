#![no_main]

use libfuzzer_sys::fuzz_target;
use lruheap::policy::lru::LruCache;

// First byte picks the capacity; the rest are (op, key) pairs over a small
// key space so hits, updates and evictions all happen. A Vec ordered MRU
// first is the reference model.
fuzz_target!(|data: &[u8]| {
    let Some((&cap, ops)) = data.split_first() else {
        return;
    };
    let capacity = usize::from(cap % 16) + 1;
    let mut cache: LruCache<u8, u8> = LruCache::new(capacity);
    let mut model: Vec<(u8, u8)> = Vec::new();

    for pair in ops.chunks_exact(2) {
        let key = pair[1] % 32;
        let pos = model.iter().position(|&(k, _)| k == key);
        match pair[0] % 6 {
            0 => {
                let old = cache.put(key, pair[0]);
                match pos {
                    Some(i) => {
                        assert_eq!(old, Some(model.remove(i).1));
                    }
                    None => {
                        assert_eq!(old, None);
                        if model.len() == capacity {
                            model.pop();
                        }
                    }
                }
                model.insert(0, (key, pair[0]));
            }
            1 => {
                let got = cache.get(&key).copied();
                assert_eq!(got, pos.map(|i| model[i].1));
                if let Some(i) = pos {
                    let entry = model.remove(i);
                    model.insert(0, entry);
                }
            }
            2 => assert_eq!(cache.peek(&key).copied(), pos.map(|i| model[i].1)),
            3 => assert_eq!(cache.remove(&key), pos.map(|i| model.remove(i).1)),
            4 => assert_eq!(cache.pop_lru(), model.pop()),
            _ => {
                assert_eq!(cache.touch(&key), pos.is_some());
                if let Some(i) = pos {
                    let entry = model.remove(i);
                    model.insert(0, entry);
                }
            }
        }
        assert_eq!(cache.len(), model.len());
    }

    assert!(cache.iter().map(|(&k, &v)| (k, v)).eq(model.iter().copied()));
    cache.check_invariants().unwrap();
});
