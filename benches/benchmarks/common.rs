use std::time::Duration;

use rand::{Rng, thread_rng};
use rand_distr::Zipf;

use tenure_cached::cache::config::ConfigBuilder;
use tenure_cached::cache::tenured_cache::TenuredCache;

pub const CAPACITY: usize = 2 << 14;
pub const ITEMS: u64 = (CAPACITY / 3) as u64;
pub const MASK: usize = CAPACITY - 1;

pub fn new_cache() -> TenuredCache<u64, u64> {
    TenuredCache::new(
        ConfigBuilder::new()
            .capacity(CAPACITY)
            .time_to_live(Duration::from_secs(300))
            .build()
    ).unwrap()
}

pub fn distribution() -> Vec<u64> {
    thread_rng().sample_iter(Zipf::new(ITEMS, 1.01).unwrap()).take(CAPACITY).map(|value| value as u64).collect::<Vec<_>>()
}
