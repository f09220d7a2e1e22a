// [libs/core/nighthash/benches/nighthash_throughput.rs]
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use trigpeach_nighthash::nighthash;

fn bench_nighthash_tx(c: &mut Criterion) {
    c.bench_function("nighthash_tx_true", |b| {
        let mut buf: Vec<u8> = (0..36u8).collect();
        b.iter(|| nighthash(black_box(&mut buf), black_box(42), true, true));
    });
}

fn bench_nighthash_no_tx(c: &mut Criterion) {
    c.bench_function("nighthash_tx_false", |b| {
        let mut buf: Vec<u8> = (0..36u8).collect();
        b.iter(|| nighthash(black_box(&mut buf), black_box(42), true, false));
    });
}

criterion_group!(benches, bench_nighthash_tx, bench_nighthash_no_tx);
criterion_main!(benches);
