//! Criterion benchmarks for planning and full reconfiguration runs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tessera_core::Cell;
use tessera_plan::{run_gather_compact, shortest_move_path};
use tessera_test_utils::{line, scatter};

/// Benchmark: route the far end of a line onto its top.
fn bench_shortest_move_path_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_move_path_line");
    for len in [16, 64, 256] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter(|| {
                let mut world = line(len);
                let path =
                    shortest_move_path(&mut world, Cell::new(len - 1, 0), Cell::new(0, 1));
                black_box(path.unwrap().len())
            });
        });
    }
    group.finish();
}

/// Benchmark: full gather+compact on scattered instances.
fn bench_full_run_scatter(c: &mut Criterion) {
    let mut group = c.benchmark_group("gather_compact_scatter");
    for n in [16, 48, 96] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut world = scatter(n, 5);
                black_box(run_gather_compact(&mut world).map(|s| s.total()))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_shortest_move_path_line, bench_full_run_scatter);
criterion_main!(benches);
