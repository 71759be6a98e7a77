//! Criterion micro-benchmarks for topology analysis.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tessera_test_utils::{block, comb, scatter};
use tessera_topology::{classify, outside_walk, stable_cubes};

/// Benchmark: full classification over square blocks of growing size.
fn bench_classify_blocks(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify_block");
    for side in [8, 16, 32] {
        let world = block(side, side);
        group.bench_with_input(BenchmarkId::from_parameter(side), &world, |b, world| {
            b.iter(|| black_box(classify(world)));
        });
    }
    group.finish();
}

/// Benchmark: cut-cube analysis on a comb, the articulation-heavy worst
/// case.
fn bench_stable_cubes_comb(c: &mut Criterion) {
    let world = comb(32, 8);
    c.bench_function("stable_cubes_comb", |b| {
        b.iter(|| black_box(stable_cubes(&world)));
    });
}

/// Benchmark: boundary walk over a scattered 512-cube blob.
fn bench_outside_walk_scatter(c: &mut Criterion) {
    let world = scatter(512, 11);
    c.bench_function("outside_walk_scatter_512", |b| {
        b.iter(|| black_box(outside_walk(&world)));
    });
}

criterion_group!(
    benches,
    bench_classify_blocks,
    bench_stable_cubes_comb,
    bench_outside_walk_scatter
);
criterion_main!(benches);
