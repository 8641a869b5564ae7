//! Criterion benchmarks for the indexed max-heap and the priority queue
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench heap_ops
//!
//! # Only the growth-policy comparison
//! cargo bench --bench heap_ops -- 'queue_growth'
//! ```
//!
//! The growth benchmarks compare the default fixed-increment growth against
//! pre-sizing with `expand_size_to`, which is what the latter exists for.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use indexed_heaps::max_heap::IndexedMaxHeap;
use indexed_heaps::priority_queue::{PriorityQueue, QueueConfig};
use indexed_heaps::sort::heap_sort;
use indexed_heaps::IndexedHeap;

// ============================================================================
// Simple PRNG for reproducible benchmarks
// ============================================================================

/// Linear congruential generator for reproducible random numbers
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }

    fn values(&mut self, n: usize) -> Vec<i32> {
        (0..n).map(|_| (self.next() >> 33) as i32).collect()
    }
}

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn benchmark_insert_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_extract");

    for &n in &SIZES {
        let values = Lcg::new(12345).values(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter(|| {
                let mut heap = IndexedMaxHeap::new(values.len());
                for &v in values {
                    heap.insert(v).unwrap();
                }
                let mut sum = 0i64;
                while let Ok(v) = heap.extract_root() {
                    sum += v as i64;
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

fn benchmark_change_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("change_value");

    for &n in &SIZES {
        let mut rng = Lcg::new(777);
        let heap = IndexedMaxHeap::from_vec(rng.values(n));
        let updates: Vec<(usize, i32)> = (0..n)
            .map(|_| ((rng.next() as usize) % n, (rng.next() >> 33) as i32))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(n), &updates, |b, updates| {
            b.iter(|| {
                let mut heap = heap.clone();
                for &(idx, v) in updates {
                    black_box(heap.change_value(idx, v).unwrap());
                }
                heap
            });
        });
    }

    group.finish();
}

fn benchmark_queue_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_growth");
    group.sample_size(20);

    for &n in &SIZES {
        let entries: Vec<(u32, i32)> = Lcg::new(4242)
            .values(n)
            .into_iter()
            .enumerate()
            .map(|(i, p)| (i as u32, p))
            .collect();

        group.bench_with_input(
            BenchmarkId::new("fixed_increment", n),
            &entries,
            |b, entries| {
                b.iter(|| {
                    let mut queue = PriorityQueue::new();
                    for &(payload, priority) in entries {
                        queue.add(payload, priority);
                    }
                    black_box(queue.len())
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("presized", n), &entries, |b, entries| {
            b.iter(|| {
                let mut queue = PriorityQueue::with_config(
                    QueueConfig::new().with_initial_capacity(entries.len()),
                );
                for &(payload, priority) in entries {
                    queue.add(payload, priority);
                }
                black_box(queue.len())
            });
        });
    }

    group.finish();
}

fn benchmark_queue_change_priority(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_change_priority");
    group.sample_size(20);

    // Lookups are linear scans, so keep these sizes modest
    for &n in &[100usize, 1_000] {
        let queue: PriorityQueue<u32> = (0..n as u32).map(|i| (i, i as i32)).collect();

        group.bench_with_input(BenchmarkId::from_parameter(n), &queue, |b, queue| {
            b.iter(|| {
                let mut queue = queue.clone();
                for i in (0..n as u32).step_by(7) {
                    queue.change_priority((i, i as i32), -(i as i32)).unwrap();
                }
                black_box(queue.peek().copied())
            });
        });
    }

    group.finish();
}

fn benchmark_heap_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap_sort");

    for &n in &SIZES {
        let values = Lcg::new(99).values(n);

        group.bench_with_input(BenchmarkId::new("heap_sort", n), &values, |b, values| {
            b.iter(|| black_box(heap_sort(values.clone())));
        });

        group.bench_with_input(BenchmarkId::new("std_sort", n), &values, |b, values| {
            b.iter(|| {
                let mut v = values.clone();
                v.sort_unstable();
                black_box(v)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert_extract,
    benchmark_change_value,
    benchmark_queue_growth,
    benchmark_queue_change_priority,
    benchmark_heap_sort,
);

criterion_main!(benches);
