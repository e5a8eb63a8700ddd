use std::time::Instant;

use criterion::{Criterion, criterion_group};

use crate::benchmarks::common::{distribution, MASK, new_cache};

pub fn put_single_threaded(criterion: &mut Criterion) {
    let cache = new_cache();
    let distribution = distribution();

    let mut index = 0;
    criterion.bench_function("TenuredCache.put() | No contention", |bencher| {
        bencher.iter_custom(|iterations| {
            let start = Instant::now();
            for _ in 0..iterations {
                let key = distribution[index & MASK];
                cache.put(key, key).unwrap();
                index += 1;
            }
            start.elapsed()
        });
    });
}

criterion_group!(benches, put_single_threaded);
