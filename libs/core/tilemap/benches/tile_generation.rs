// [libs/core/tilemap/benches/tile_generation.rs]
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use trigpeach_tilemap::generate_tile;

fn bench_generate_tile(c: &mut Criterion) {
    let phash = [0x42u8; 32];
    c.bench_function("generate_tile", |b| {
        b.iter(|| generate_tile(black_box(&phash), black_box(17)));
    });
}

criterion_group!(benches, bench_generate_tile);
criterion_main!(benches);
