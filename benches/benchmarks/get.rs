use std::time::Instant;

use criterion::{Criterion, criterion_group};

use crate::benchmarks::common::{distribution, MASK, new_cache};

pub fn get_single_threaded(criterion: &mut Criterion) {
    let cache = new_cache();
    let distribution = distribution();

    for key in &distribution {
        cache.put(*key, *key).unwrap();
    }

    let mut index = 0;
    criterion.bench_function("TenuredCache.get() | No contention", |bencher| {
        bencher.iter_custom(|iterations| {
            let start = Instant::now();
            for _ in 0..iterations {
                cache.get(&distribution[index & MASK]);
                index += 1;
            }
            start.elapsed()
        });
    });
}

criterion_group!(benches, get_single_threaded);
