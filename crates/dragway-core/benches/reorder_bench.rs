//! Benchmark: rotation-based reorder vs remove-then-insert.
//!
//! Run with: `cargo bench -p dragway-core --bench reorder_bench`
//!
//! Measures the in-place rotation against the naive remove+insert on lists
//! of the sizes a drag UI realistically carries, across short and long move
//! distances.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dragway_core::reorder;

fn remove_insert(items: &mut Vec<u64>, from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }
    let moved = items.remove(from);
    items.insert(to, moved);
}

fn bench_reorder(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder");

    for &len in &[16usize, 256, 4096] {
        let base: Vec<u64> = (0..len as u64).collect();

        // Adjacent move: the common case while dragging within a list.
        group.bench_function(format!("rotate/adjacent/{len}"), |b| {
            b.iter_batched(
                || base.clone(),
                |mut items| {
                    reorder(&mut items, len / 2, len / 2 + 1);
                    black_box(items)
                },
                criterion::BatchSize::SmallInput,
            );
        });

        // Full-span move: worst case, first element to last slot.
        group.bench_function(format!("rotate/full_span/{len}"), |b| {
            b.iter_batched(
                || base.clone(),
                |mut items| {
                    reorder(&mut items, 0, len - 1);
                    black_box(items)
                },
                criterion::BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("remove_insert/full_span/{len}"), |b| {
            b.iter_batched(
                || base.clone(),
                |mut items| {
                    remove_insert(&mut items, 0, len - 1);
                    black_box(items)
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reorder);
criterion_main!(benches);
