use lruheap::order::{ByKey, OrderExt, Reversed};
use lruheap::queue::BoundedPriorityQueue;
use lruheap::recipes::{k_closest, top_k_frequent_words};

fn main() {
    let mut top3 = BoundedPriorityQueue::keep_largest(3);
    for score in [42, 7, 99, 63, 15, 88] {
        if let Some(dropped) = top3.push(score) {
            println!("dropped {}", dropped);
        }
    }
    println!("top 3, weakest first: {:?}", top3.into_sorted_vec());

    // Keep the two cheapest items; on equal price the shorter name wins.
    let cheap_first =
        ByKey(|item: &(u32, &str)| item.0).then(ByKey(|item: &(u32, &str)| item.1.len()));
    let mut cheapest =
        BoundedPriorityQueue::with_bound(2, Reversed(cheap_first)).expect("bound is non-zero");
    cheapest.extend([(5, "pear"), (3, "fig"), (3, "banana"), (9, "mango")]);
    println!("cheapest, priciest first: {:?}", cheapest.into_sorted_vec());

    let words = ["to", "be", "or", "not", "to", "be"];
    println!("frequent words: {:?}", top_k_frequent_words(&words, 2));
    println!("closest: {:?}", k_closest(&[(3, 3), (5, -1), (-2, 4)], 2));
}

// Expected output:
// dropped 7
// dropped 15
// dropped 42
// top 3, weakest first: [63, 88, 99]
// cheapest, priciest first: [(3, "banana"), (3, "fig")]
// frequent words: ["be", "to"]
// closest: [(3, 3), (-2, 4)]
