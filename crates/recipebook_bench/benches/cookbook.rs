//! Cookbook operation benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use recipebook_bench::seeded_cookbook;
use recipebook_core::Cookbook;
use tempfile::TempDir;

/// Benchmark saving the whole store.
fn bench_save(c: &mut Criterion) {
    let mut group = c.benchmark_group("save");

    for count in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            let dir = TempDir::new().unwrap();
            let cookbook = seeded_cookbook(dir.path(), count);

            b.iter(|| cookbook.try_save().unwrap());
        });
    }
    group.finish();
}

/// Benchmark opening and parsing the store.
fn bench_open(c: &mut Criterion) {
    let mut group = c.benchmark_group("open");

    for count in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            let dir = TempDir::new().unwrap();
            let path = seeded_cookbook(dir.path(), count).path().to_path_buf();

            b.iter(|| black_box(Cookbook::open(&path)).len());
        });
    }
    group.finish();
}

/// Benchmark shopping list generation over every recipe.
fn bench_shopping_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("shopping_list");

    for count in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            let dir = TempDir::new().unwrap();
            let cookbook = seeded_cookbook(dir.path(), count);
            let names: Vec<String> = cookbook
                .recipes()
                .iter()
                .map(|recipe| recipe.name().to_string())
                .collect();

            b.iter(|| cookbook.generate_shopping_list(black_box(names.as_slice())).len());
        });
    }
    group.finish();
}

/// Benchmark category and ingredient search.
fn bench_search(c: &mut Criterion) {
    let dir = TempDir::new().unwrap();
    let cookbook = seeded_cookbook(dir.path(), 1000);

    c.bench_function("find_by_category", |b| {
        b.iter(|| cookbook.find_by_category(black_box("dessert")).len())
    });
    c.bench_function("find_by_ingredient", |b| {
        b.iter(|| cookbook.find_by_ingredient(black_box("ingredient 7")).len())
    });
}

criterion_group!(
    benches,
    bench_save,
    bench_open,
    bench_shopping_list,
    bench_search
);
criterion_main!(benches);
