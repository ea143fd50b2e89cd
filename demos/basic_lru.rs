use lruheap::builder::CacheBuilder;
use lruheap::policy::lru::LruCache;

fn main() {
    let mut cache: LruCache<u32, String> = LruCache::new(2);

    cache.put(1, "alpha".to_string());
    cache.put(2, "beta".to_string());

    if let Some(value) = cache.get(&1) {
        println!("hit 1: {}", value);
    }

    cache.put(3, "gamma".to_string());
    println!("contains 2? {}", cache.contains(&2));

    let mut sessions = CacheBuilder::new(3).preallocate(false).build();
    for user in ["ann", "bob", "cy", "ann", "dee"] {
        sessions.put(user, user.len());
    }
    let order: Vec<_> = sessions.keys().collect();
    println!("sessions, most recent first: {:?}", order);
}

// Expected output:
// hit 1: alpha
// contains 2? false
// sessions, most recent first: ["dee", "ann", "cy"]
//
// Explanation: capacity=2; after get(&1), key 1 is MRU and key 2 is LRU.
// Inserting key 3 evicts key 2. In the second cache, re-putting "ann"
// refreshes it, so "bob" is the oldest when "dee" arrives.
