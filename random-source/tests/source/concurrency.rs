use random_source::{RandomSource, SeededSource, SharedSource};

/// Yields 1, 2, 3, ... so every draw is distinguishable.
struct Ascending(u32);

impl RandomSource for Ascending {
    fn next_u32(&mut self) -> u32 {
        self.0 = self.0.wrapping_add(1);
        self.0
    }
}

#[test]
fn test_concurrent_u64_pairs_never_split() {
    let shared = SharedSource::new(Ascending(0));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let mut source = shared.clone();
            std::thread::spawn(move || (0..500).map(|_| source.next_u64()).collect::<Vec<_>>())
        })
        .collect();

    let mut seen = Vec::new();
    for handle in handles {
        seen.extend(handle.join().expect("worker finished"));
    }

    for value in &seen {
        let high = (value >> 32) as u32;
        let low = *value as u32;
        assert_eq!(high % 2, 1, "pair must start on an odd draw: {:#x}", value);
        assert_eq!(low, high + 1, "pair split across callers: {:#x}", value);
    }

    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), 8 * 500);
}

#[test]
fn test_shared_source_matches_sequential_draws() {
    let mut reference = SeededSource::new(77);
    let mut shared = SharedSource::new(SeededSource::new(77));

    assert_eq!(shared.next_u64(), reference.next_u64());
    assert_eq!(shared.next_f64(), reference.next_f64());

    let mut left = [0u8; 7];
    let mut right = [0u8; 7];
    shared.fill_bytes(&mut left);
    reference.fill_bytes(&mut right);
    assert_eq!(left, right);
    assert_eq!(shared.with_source(|s| s.seed()), 77);
}
