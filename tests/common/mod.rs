#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pagesim::Page;

// Generate a reproducible random reference trace
pub fn random_trace(seed: u64, len: usize, distinct: Page) -> Vec<Page> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(0..distinct)).collect()
}

// Trace with strong locality: short loops over a sliding window of pages
pub fn looping_trace(seed: u64, len: usize, window: Page) -> Vec<Page> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut base: Page = 0;
    (0..len)
        .map(|i| {
            if i % 16 == 0 {
                base += rng.gen_range(0..3);
            }
            base + rng.gen_range(0..window)
        })
        .collect()
}

// Classic textbook reference string
pub fn textbook_trace() -> Vec<Page> {
    vec![7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2, 1, 2, 0, 1, 7, 0, 1]
}
