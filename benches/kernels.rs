//! Reference vs packed kernel bodies
//!
//! Run with: cargo bench --bench kernels

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use dspcore::kernels::{MatMut, MatRef, dot, elementwise, matmul, reduce};
use std::hint::black_box;

fn ramp_i16(len: usize) -> Vec<i16> {
    (0..len).map(|i| (i as i16).wrapping_mul(31)).collect()
}

fn ramp_f32(len: usize) -> Vec<f32> {
    (0..len).map(|i| (i % 97) as f32 * 0.03125 - 1.5).collect()
}

fn bench_mat_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("mat_add_stride_i16");
    for n in [15usize, 64, 250] {
        let m = 64;
        let stride = n + 3;
        let a = ramp_i16(m * stride);
        let b = ramp_i16(m * stride);
        let mut y = vec![0i16; m * stride];
        group.throughput(Throughput::Elements((m * n) as u64));

        group.bench_with_input(BenchmarkId::new("reference", n), &n, |bench, &n| {
            bench.iter(|| {
                elementwise::mat_add_stride_reference(
                    MatRef::new(black_box(&a[..]), m, n, stride),
                    MatRef::new(black_box(&b[..]), m, n, stride),
                    MatMut::new(&mut y, m, n, stride),
                )
            })
        });
        group.bench_with_input(BenchmarkId::new("packed", n), &n, |bench, &n| {
            bench.iter(|| {
                elementwise::mat_add_stride_packed(
                    MatRef::new(black_box(&a[..]), m, n, stride),
                    MatRef::new(black_box(&b[..]), m, n, stride),
                    MatMut::new(&mut y, m, n, stride),
                )
            })
        });
    }
    group.finish();
}

fn bench_dot_and_min(c: &mut Criterion) {
    let len = 4096;
    let a = ramp_i16(len);
    let b = ramp_i16(len);
    let mut group = c.benchmark_group("vector_i16");
    group.throughput(Throughput::Elements(len as u64));

    group.bench_function("dot_prod_reference", |bench| {
        bench.iter(|| dot::dot_prod_reference(black_box(&a[..]), black_box(&b[..])))
    });
    group.bench_function("dot_prod_packed", |bench| {
        bench.iter(|| dot::dot_prod_packed(black_box(&a[..]), black_box(&b[..])))
    });
    group.bench_function("min_reference", |bench| {
        bench.iter(|| reduce::min_reference(black_box(&a[..])))
    });
    group.bench_function("min_unrolled", |bench| {
        bench.iter(|| reduce::min_unrolled(black_box(&a[..])))
    });
    group.finish();
}

fn bench_mat_mult(c: &mut Criterion) {
    let mut group = c.benchmark_group("mat_mult_stride_f32");
    for size in [16usize, 33, 64] {
        let a = ramp_f32(size * size);
        let b = ramp_f32(size * size);
        let mut y = vec![0f32; size * size];
        group.throughput(Throughput::Elements((size * size * size) as u64));

        group.bench_with_input(BenchmarkId::new("reference", size), &size, |bench, &s| {
            bench.iter(|| {
                matmul::mat_mult_stride_reference(
                    MatRef::contiguous(black_box(&a[..]), s, s),
                    MatRef::contiguous(black_box(&b[..]), s, s),
                    MatMut::contiguous(&mut y, s, s),
                    |acc: f32| acc,
                )
            })
        });
        group.bench_with_input(BenchmarkId::new("packed", size), &size, |bench, &s| {
            bench.iter(|| {
                matmul::mat_mult_stride_packed(
                    MatRef::contiguous(black_box(&a[..]), s, s),
                    MatRef::contiguous(black_box(&b[..]), s, s),
                    MatMut::contiguous(&mut y, s, s),
                    |acc: f32| acc,
                )
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_mat_add, bench_dot_and_min, bench_mat_mult);
criterion_main!(benches);
