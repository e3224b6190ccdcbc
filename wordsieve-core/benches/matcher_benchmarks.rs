//! Benchmarks for detect and mask scans

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use wordsieve_core::{Context, Limits};

/// Deterministic pseudo-random dictionary of lowercase words
fn generate_words(count: usize) -> Vec<String> {
    let mut state = 0x2545_f491_u32;
    (0..count)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let len = 3 + (state % 8) as usize;
            (0..len)
                .map(|i| (b'a' + ((state >> (i * 3)) % 26) as u8) as char)
                .collect()
        })
        .collect()
}

fn generate_text(size: usize) -> Vec<u8> {
    let base = "The quick brown fox jumps over the lazy dog. ";
    base.as_bytes().iter().copied().cycle().take(size).collect()
}

fn benchmark_detect(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains_dirty");
    let limits = Limits::default();

    for words in [100, 1_000, 10_000] {
        let context = Context::from_words(generate_words(words), limits).unwrap();
        let text = generate_text(limits.max_input_len);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(words), &text, |b, text| {
            b.iter(|| context.contains_dirty(black_box(text)));
        });
    }

    group.finish();
}

fn benchmark_mask(c: &mut Criterion) {
    let mut group = c.benchmark_group("mask_dirty");
    let limits = Limits::default();
    let context = Context::from_words(["fox", "lazy", "dog"], limits).unwrap();

    for size in [64, 512, 4096] {
        let text = generate_text(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| {
                let mut buffer = text.clone();
                context.mask_dirty(black_box(&mut buffer)).unwrap()
            });
        });
    }

    group.finish();
}

fn benchmark_build(c: &mut Criterion) {
    let words = generate_words(10_000);
    c.bench_function("build_10k_words", |b| {
        b.iter(|| Context::from_words(black_box(&words), Limits::default()).unwrap());
    });
}

criterion_group!(benches, benchmark_detect, benchmark_mask, benchmark_build);
criterion_main!(benches);
