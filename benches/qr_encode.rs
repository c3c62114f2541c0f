use criterion::{Criterion, black_box, criterion_group, criterion_main};
use qr_svg::{ECLevel, encode};

fn bench_encode_short(c: &mut Criterion) {
    c.bench_function("encode_short_url_m", |b| {
        b.iter(|| encode(black_box("https://example.com"), black_box(ECLevel::M)))
    });
}

fn bench_encode_short_high(c: &mut Criterion) {
    c.bench_function("encode_short_url_h", |b| {
        b.iter(|| encode(black_box("https://example.com"), black_box(ECLevel::H)))
    });
}

fn bench_encode_medium(c: &mut Criterion) {
    let content = "a".repeat(200);
    c.bench_function("encode_200_bytes_l", |b| {
        b.iter(|| encode(black_box(&content), black_box(ECLevel::L)))
    });
}

fn bench_encode_large(c: &mut Criterion) {
    let content = "a".repeat(1500);
    c.bench_function("encode_1500_bytes_l", |b| {
        b.iter(|| encode(black_box(&content), black_box(ECLevel::L)))
    });
}

fn bench_encode_max(c: &mut Criterion) {
    let content = "a".repeat(2900);
    c.bench_function("encode_2900_bytes_l", |b| {
        b.iter(|| encode(black_box(&content), black_box(ECLevel::L)))
    });
}

criterion_group!(
    benches,
    bench_encode_short,
    bench_encode_short_high,
    bench_encode_medium,
    bench_encode_large,
    bench_encode_max
);
criterion_main!(benches);
