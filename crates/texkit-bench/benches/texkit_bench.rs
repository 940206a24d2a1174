//! Benchmarks for texkit operations.
//!
//! Run with: `cargo bench`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use texkit_color::{convert_channel, f16};
use texkit_core::prelude::*;
use texkit_format::BackendCode;

/// Benchmark scalar channel conversion.
fn bench_channel(c: &mut Criterion) {
    let mut group = c.benchmark_group("channel");

    let bytes: Vec<u8> = (0..10000).map(|i| (i % 256) as u8).collect();
    let floats: Vec<f32> = (0..10000).map(|i| i as f32 / 10000.0).collect();
    group.throughput(Throughput::Elements(10000));

    group.bench_function("u8_to_f32", |b| {
        b.iter(|| {
            bytes
                .iter()
                .map(|&v| convert_channel::<f32, u8>(black_box(v)))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("f32_to_u16", |b| {
        b.iter(|| {
            floats
                .iter()
                .map(|&v| convert_channel::<u16, f32>(black_box(v)))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("u8_to_u16", |b| {
        b.iter(|| {
            bytes
                .iter()
                .map(|&v| convert_channel::<u16, u8>(black_box(v)))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("f32_to_f16", |b| {
        b.iter(|| {
            floats
                .iter()
                .map(|&v| convert_channel::<f16, f32>(black_box(v)))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

/// Benchmark texture creation and layout.
fn bench_create(c: &mut Criterion) {
    let mut group = c.benchmark_group("create");

    for size in [256u32, 1024, 2048].iter() {
        let desc = TextureDesc::new_2d(PixelFormat::Rgba8Unorm, *size, *size).with_levels(32);
        group.bench_with_input(BenchmarkId::new("rgba8_mipmapped", size), &desc, |b, d| {
            b.iter(|| Texture::create_with(black_box(d)))
        });
    }

    let cube = TextureDesc::new_cube(PixelFormat::Bc7RgbaUnorm, 1024).with_levels(32);
    group.bench_function("bc7_cube_1024", |b| {
        b.iter(|| Texture::create_with(black_box(&cube)))
    });

    group.finish();
}

/// Benchmark copy-on-write detach against an explicit deep copy.
fn bench_detach(c: &mut Criterion) {
    let mut group = c.benchmark_group("detach");

    let t = Texture::create_with(&TextureDesc::new_2d(PixelFormat::Rgba8Unorm, 1024, 1024));
    group.throughput(Throughput::Bytes(t.bytes() as u64));

    group.bench_function("clone_share", |b| b.iter(|| black_box(&t).clone()));

    group.bench_function("clone_then_write", |b| {
        b.iter(|| {
            let mut u = t.clone();
            u.data_mut().map(|d| d[0] = 1).ok();
            u
        })
    });

    group.bench_function("deep_copy", |b| b.iter(|| black_box(&t).copy()));

    group.finish();
}

/// Benchmark whole-texture format conversion.
fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    for size in [64u32, 256, 1024].iter() {
        let desc = TextureDesc::new_2d(PixelFormat::Rgba8Unorm, *size, *size);
        let mut t = Texture::create_with(&desc);
        let color = ColorVariant::from(Rgba::<u8>::new(200, 100, 50, 255));
        t.fill(&color).ok();

        group.throughput(Throughput::Elements((*size as u64) * (*size as u64)));

        group.bench_with_input(BenchmarkId::new("rgba8_to_bgra8", size), &t, |b, t| {
            b.iter(|| t.convert(black_box(PixelFormat::Bgra8Unorm)))
        });

        group.bench_with_input(BenchmarkId::new("rgba8_to_rgba16f", size), &t, |b, t| {
            b.iter(|| t.convert(black_box(PixelFormat::Rgba16Float)))
        });

        group.bench_with_input(BenchmarkId::new("rgba8_to_565", size), &t, |b, t| {
            b.iter(|| t.convert(black_box(PixelFormat::Bgr565Unorm)))
        });
    }

    group.finish();
}

/// Benchmark serialization and format table lookups.
fn bench_io(c: &mut Criterion) {
    let mut group = c.benchmark_group("io");

    let desc = TextureDesc::new_2d(PixelFormat::Rgba8Unorm, 512, 512).with_levels(10);
    let t = Texture::create_with(&desc);
    let bytes = t.to_bytes().unwrap_or_default();
    group.throughput(Throughput::Bytes(bytes.len() as u64));

    group.bench_function("serialize", |b| b.iter(|| black_box(&t).to_bytes()));
    group.bench_function("deserialize", |b| {
        b.iter(|| Texture::from_bytes(black_box(&bytes)))
    });

    let code = PixelFormat::Pvrtc1Rgba2Unorm.descriptor().backend_code();
    group.bench_function("find_by_backend_code", |b| {
        b.iter(|| FormatDescriptor::find_by_backend_code(black_box(code)))
    });
    group.bench_function("find_unmatched", |b| {
        b.iter(|| FormatDescriptor::find_by_backend_code(black_box(BackendCode::NONE)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_channel,
    bench_create,
    bench_detach,
    bench_convert,
    bench_io,
);
criterion_main!(benches);
