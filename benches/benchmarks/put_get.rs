use std::sync::Arc;
use std::thread;
use std::time::Instant;

use criterion::{Criterion, criterion_group};

use crate::benchmarks::common::{distribution, MASK, new_cache};

pub fn put_get_8_threads(criterion: &mut Criterion) {
    let cache = Arc::new(new_cache());
    let distribution = Arc::new(distribution());

    for key in distribution.iter() {
        cache.put(*key, *key).unwrap();
    }

    criterion.bench_function("TenuredCache.put_get() | 8 threads", |bencher| {
        bencher.iter_custom(|iterations| {
            let per_thread_iterations = iterations / 8;
            let start = Instant::now();

            let mut handles = Vec::new();
            for thread_id in 0..8u64 {
                let cache = cache.clone();
                let distribution = distribution.clone();
                handles.push(thread::spawn(move || {
                    let mut index = (thread_id as usize) * 32;
                    for iteration in 0..per_thread_iterations {
                        let key = distribution[index & MASK];
                        if iteration % 10 == 0 {
                            cache.put(key, key).unwrap();
                        } else {
                            cache.get(&key);
                        }
                        index += 1;
                    }
                }));
            }
            for handle in handles {
                handle.join().unwrap();
            }
            start.elapsed()
        });
    });
}

criterion_group!(benches, put_get_8_threads);
