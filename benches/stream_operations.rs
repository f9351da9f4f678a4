use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lazy_stream::{from_iter, unfold};

fn bench_basic_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("basic_operations");

    for size in [100usize, 1_000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::new("map_filter", size), size, |b, &size| {
            b.iter(|| {
                let length = unfold(0u64, |n| Some((n, n + 1)))
                    .map(|x| black_box(x * 2))
                    .filter(|&x| black_box(x % 4 == 0))
                    .take(size)
                    .length();
                black_box(length)
            });
        });

        group.bench_with_input(BenchmarkId::new("fold_left", size), size, |b, &size| {
            b.iter(|| {
                let sum = from_iter(0..size as u64).fold_left(0u64, |acc, x| black_box(acc + x));
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("at", size), size, |b, &size| {
            b.iter(|| {
                let element = unfold(0u64, |n| Some((n, n + 1))).at(size as isize);
                black_box(element)
            });
        });
    }

    group.finish();
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    group.bench_function("scan_prefix", |b| {
        b.iter(|| {
            let sums = unfold(1u64, |n| Some((n, n + 1))).scan(0u64, |acc, x| acc + x);
            black_box(sums.at(1_000))
        });
    });

    group.bench_function("drop_then_head", |b| {
        b.iter(|| {
            let rest = unfold(0u64, |n| Some((n, n + 1))).drop(1_000);
            black_box(rest.at(0))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_basic_operations, bench_construction);
criterion_main!(benches);
