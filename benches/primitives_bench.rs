//! Benchmarks for the scanning operations: split, index_of and sort.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use facsimile::{OrderedCollection, Position, TextBuffer};

const SIZES: [usize; 3] = [100, 1_000, 10_000];

/// Random text over a small alphabet so delimiters occur often.
fn random_text(rng: &mut StdRng, len: usize) -> String {
    let alphabet = b"ab ,";
    return (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect();
}

fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split");
    let mut rng = StdRng::seed_from_u64(42);

    for size in SIZES {
        let text = TextBuffer::new(&random_text(&mut rng, size));
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("single_char", size), &text, |b, text| {
            b.iter(|| black_box(text.split(Some(" "), None)));
        });
        group.bench_with_input(BenchmarkId::new("repeated_prefix", size), &text, |b, text| {
            b.iter(|| black_box(text.split(Some("aab"), None)));
        });
    }

    group.finish();
}

fn bench_index_of(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_of");
    let mut rng = StdRng::seed_from_u64(7);

    for size in SIZES {
        let mut raw = random_text(&mut rng, size);
        raw.push_str("needle");
        let text = TextBuffer::new(&raw);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("tail_match", size), &text, |b, text| {
            b.iter(|| black_box(text.index_of("needle", Position::Omitted)));
        });
    }

    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    let mut rng = StdRng::seed_from_u64(1);

    for size in SIZES {
        let numbers: Vec<u32> = (0..size).map(|_| rng.gen_range(0..100_000)).collect();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("default", size), &numbers, |b, numbers| {
            b.iter(|| {
                let mut items = OrderedCollection::from_vec(numbers.clone());
                items.sort();
                black_box(items.len())
            });
        });
        group.bench_with_input(BenchmarkId::new("comparator", size), &numbers, |b, numbers| {
            b.iter(|| {
                let mut items = OrderedCollection::from_vec(numbers.clone());
                items.sort_by(|a, b| a.cmp(b));
                black_box(items.len())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_split, bench_index_of, bench_sort);
criterion_main!(benches);
