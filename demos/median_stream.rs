use lruheap::queue::MedianFinder;

fn main() {
    let mut finder = MedianFinder::new();
    for latency_ms in [12u32, 48, 7, 30, 30, 95, 5] {
        finder.add(latency_ms);
        if let Some(median) = finder.median() {
            println!("after {:>2}: median = {}", latency_ms, median);
        }
    }
}

// Expected output:
// after 12: median = 12
// after 48: median = 30
// after  7: median = 12
// after 30: median = 21
// after 30: median = 30
// after 95: median = 30
// after  5: median = 30
