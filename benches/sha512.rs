use syncsum::hash::sha512::{calc_digest, dump_digest, read_digest};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_sha512(c: &mut Criterion) {
    c.bench_function("sha512 128 bytes", |b| {
        b.iter(|| calc_digest(black_box(&[0u8; 128])))
    });

    let data = vec![0u8; 64 * 1024];
    c.bench_function("sha512 64 KiB", |b| {
        b.iter(|| calc_digest(black_box(&data)))
    });
}

pub fn bench_codec(c: &mut Criterion) {
    let raw = calc_digest(b"abc");
    let hex = dump_digest(&raw);

    c.bench_function("sha512 dump_digest", |b| {
        b.iter(|| dump_digest(black_box(&raw)))
    });
    c.bench_function("sha512 to_hex (fixed)", |b| {
        b.iter(|| black_box(&raw).to_hex())
    });
    c.bench_function("sha512 read_digest", |b| {
        b.iter(|| read_digest(black_box(&hex)))
    });
}

criterion_group!(benches, bench_sha512, bench_codec);
criterion_main!(benches);
