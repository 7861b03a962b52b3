//! Benchmarks for the codec pipeline.
//!
//! Run with: `cargo bench --bench codec`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use lzw_pack::{compress, decode, decompress, encode};

const SIZES: &[usize] = &[1024, 16 * 1024, 256 * 1024];

/// Input generators spanning best, typical, and worst-case redundancy.
const INPUTS: &[(&str, fn(usize) -> Vec<u8>)] = &[
    ("repetitive", repetitive_bytes),
    ("text", text_bytes),
    ("random", random_bytes),
];

/// Short cycle, best case for dictionary reuse.
fn repetitive_bytes(len: usize) -> Vec<u8> {
    b"banana".iter().copied().cycle().take(len).collect()
}

/// English-like text with mid-range redundancy.
fn text_bytes(len: usize) -> Vec<u8> {
    b"The quick brown fox jumps over the lazy dog. "
        .iter()
        .copied()
        .cycle()
        .take(len)
        .collect()
}

/// xorshift32 stream, worst case for dictionary growth.
fn random_bytes(len: usize) -> Vec<u8> {
    let mut state: u32 = 0x1234_5678;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for &(name, generate) in INPUTS {
        for &size in SIZES {
            let input = generate(size);
            group.bench_with_input(BenchmarkId::new(name, size), &input, |b, input| {
                b.iter(|| black_box(encode(input)));
            });
        }
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for &(name, generate) in INPUTS {
        for &size in SIZES {
            let codes = encode(&generate(size));
            group.bench_with_input(BenchmarkId::new(name, size), &codes, |b, codes| {
                b.iter(|| black_box(decode(codes).expect("Failed to decode")));
            });
        }
    }

    group.finish();
}

fn bench_framed_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("framed_roundtrip");
    group.sample_size(20);

    for &(name, generate) in INPUTS {
        for &size in SIZES {
            let input = generate(size);
            group.bench_with_input(BenchmarkId::new(name, size), &input, |b, input| {
                b.iter(|| {
                    let data = compress(input);
                    black_box(decompress(&data).expect("Failed to decompress"))
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_framed_roundtrip);
criterion_main!(benches);
