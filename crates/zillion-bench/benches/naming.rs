//! Benchmarks for name generation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use zillion_bench::sample_counts;
use zillion_core::{DashMode, GroupValue, IllionIndex};
use zillion_naming::{group_prefix, illion_prefix, number_name};

fn bench_number_name(c: &mut Criterion) {
    let mut group = c.benchmark_group("number_name");
    for zeros in sample_counts() {
        group.bench_with_input(BenchmarkId::from_parameter(zeros), &zeros, |b, &zeros| {
            b.iter(|| number_name(black_box(zeros), DashMode::Dashed))
        });
    }
    group.finish();
}

fn bench_group_prefix(c: &mut Criterion) {
    let value = GroupValue::new(999).unwrap();

    c.bench_function("group_prefix_999", |b| {
        b.iter(|| group_prefix(black_box(value), DashMode::Joined))
    });
}

fn bench_illion_prefix_deep(c: &mut Criterion) {
    let index = IllionIndex(u64::MAX);

    c.bench_function("illion_prefix_u64_max", |b| {
        b.iter(|| illion_prefix(black_box(index), DashMode::Joined))
    });
}

criterion_group!(
    benches,
    bench_number_name,
    bench_group_prefix,
    bench_illion_prefix_deep,
);
criterion_main!(benches);
