// ==============================================
// LRU CACHE INVARIANT TESTS (integration)
// ==============================================
//
// Behavior observable only through the public API: eviction order under
// mixed workloads, trait-object usage, and the concurrent wrapper.

use lruheap::builder::CacheBuilder;
use lruheap::policy::lru::LruCache;
use lruheap::traits::{CoreCache, LruCacheTrait, MutableCache};

// ==============================================
// Recency Ordering
// ==============================================

mod recency {
    use super::*;

    #[test]
    fn get_promotes_and_put_evicts_the_tail() {
        let mut cache = LruCache::new(3);
        cache.put(1, 1);
        cache.put(2, 2);
        cache.put(3, 3);
        assert_eq!(cache.get(&1), Some(&1));
        cache.put(4, 4);

        assert_eq!(cache.get(&2), None);
        let order: Vec<_> = cache.keys().copied().collect();
        assert_eq!(order, vec![4, 1, 3]);
    }

    #[test]
    fn capacity_one_keeps_only_the_latest_key() {
        let mut cache = LruCache::new(1);
        cache.put("a", 1);
        cache.put("b", 2);
        assert!(!cache.contains(&"a"));
        assert_eq!(cache.get(&"b"), Some(&2));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn update_refreshes_recency_without_growing() {
        let mut cache = LruCache::new(2);
        cache.put(1, "one");
        cache.put(2, "two");
        assert_eq!(cache.put(1, "uno"), Some("one"));
        cache.put(3, "three");

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.peek(&1), Some(&"uno"));
        assert!(!cache.contains(&2));
    }

    #[test]
    fn peek_and_contains_leave_order_alone() {
        let mut cache = LruCache::new(2);
        cache.put(1, ());
        cache.put(2, ());
        assert!(cache.peek(&1).is_some());
        assert!(cache.contains(&1));
        cache.put(3, ());
        assert!(!cache.contains(&1));
    }

    #[test]
    fn recency_rank_tracks_touches() {
        let mut cache = LruCache::new(4);
        for key in 0..4 {
            cache.put(key, key);
        }
        assert_eq!(cache.recency_rank(&3), Some(0));
        assert_eq!(cache.recency_rank(&0), Some(3));
        assert!(cache.touch(&0));
        assert_eq!(cache.recency_rank(&0), Some(0));
        assert_eq!(cache.recency_rank(&9), None);
    }
}

// ==============================================
// Churn
// ==============================================

mod churn {
    use super::*;

    #[test]
    fn long_mixed_workload_keeps_invariants() {
        let mut cache = LruCache::new(64);
        for i in 0u64..10_000 {
            match i % 5 {
                0 | 1 => {
                    cache.put(i % 200, i);
                }
                2 => {
                    cache.get(&(i % 97));
                }
                3 => {
                    cache.remove(&(i % 151));
                }
                _ => {
                    if i % 50 == 4 {
                        cache.pop_lru();
                    }
                }
            }
            assert!(cache.len() <= cache.capacity());
        }
        cache.check_invariants().unwrap();
    }

    #[test]
    fn drain_by_pop_lru_returns_oldest_first() {
        let mut cache = CacheBuilder::new(5).build();
        for key in 0..5 {
            cache.put(key, key * 10);
        }
        let drained: Vec<_> = std::iter::from_fn(|| cache.pop_lru()).collect();
        assert_eq!(drained, vec![(0, 0), (1, 10), (2, 20), (3, 30), (4, 40)]);
        assert!(cache.is_empty());
    }
}

// ==============================================
// Trait Usage
// ==============================================

mod traits {
    use super::*;

    fn fill<C: CoreCache<u32, u32>>(cache: &mut C, n: u32) {
        for i in 0..n {
            cache.insert(i, i);
        }
    }

    fn evict_all<C: LruCacheTrait<u32, u32>>(cache: &mut C) -> Vec<u32> {
        let mut keys = Vec::new();
        while let Some((key, _)) = cache.pop_lru() {
            keys.push(key);
        }
        keys
    }

    #[test]
    fn generic_code_sees_lru_semantics() {
        let mut cache = LruCache::new(3);
        fill(&mut cache, 5);
        assert_eq!(CoreCache::len(&cache), 3);
        assert_eq!(MutableCache::remove(&mut cache, &3), Some(3));
        assert_eq!(evict_all(&mut cache), vec![2, 4]);
    }
}

// ==============================================
// Concurrent Wrapper
// ==============================================

#[cfg(feature = "concurrency")]
mod concurrent {
    use lruheap::policy::lru::ConcurrentLruCache;
    use std::thread;

    #[test]
    fn writers_on_many_threads_respect_capacity() {
        let cache = ConcurrentLruCache::new(100);
        let handles: Vec<_> = (0..8u64)
            .map(|t| {
                let cache = cache.clone();
                thread::spawn(move || {
                    for i in 0..1_000u64 {
                        cache.put(t * 1_000 + i, i);
                        let _ = cache.get(&(t * 1_000 + i / 2));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(cache.len(), 100);
    }
}
