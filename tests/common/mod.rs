//! Common test utilities
#![allow(dead_code)]

use dspcore::dtype::Element;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded generator so failures reproduce
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Random `i16` values
pub fn random_i16(rng: &mut StdRng, len: usize) -> Vec<i16> {
    (0..len).map(|_| rng.random()).collect()
}

/// Random `i8` values
pub fn random_i8(rng: &mut StdRng, len: usize) -> Vec<i8> {
    (0..len).map(|_| rng.random()).collect()
}

/// Random `i32` values
pub fn random_i32(rng: &mut StdRng, len: usize) -> Vec<i32> {
    (0..len).map(|_| rng.random()).collect()
}

/// Random `f32` values in `[-4, 4)`
pub fn random_f32(rng: &mut StdRng, len: usize) -> Vec<f32> {
    (0..len).map(|_| rng.random_range(-4.0f32..4.0)).collect()
}

/// Strided buffer of `rows` rows, every element set to `sentinel`
pub fn sentinel_buffer<T: Copy>(rows: usize, stride: usize, sentinel: T) -> Vec<T> {
    vec![sentinel; rows * stride]
}

/// Assert that the `stride - cols` gap after each row still holds `sentinel`
pub fn assert_gaps_untouched<T: Element>(
    buf: &[T],
    rows: usize,
    cols: usize,
    stride: usize,
    sentinel: T,
) {
    for r in 0..rows {
        for c in cols..stride {
            assert_eq!(buf[r * stride + c], sentinel, "gap at ({r}, {c}) was written");
        }
    }
}

/// Naive nested-loop elementwise combination
pub fn naive_zip<T: Copy>(
    a: &[T],
    b: &[T],
    rows: usize,
    cols: usize,
    strides: (usize, usize, usize),
    dst: &mut [T],
    f: impl Fn(T, T) -> T,
) {
    let (sa, sb, sy) = strides;
    for r in 0..rows {
        for c in 0..cols {
            dst[r * sy + c] = f(a[r * sa + c], b[r * sb + c]);
        }
    }
}

/// Naive `i64` matrix product of contiguous `m × n` and `n × o` matrices
pub fn naive_matmul_i64(a: &[i64], b: &[i64], m: usize, n: usize, o: usize) -> Vec<i64> {
    let mut c = vec![0i64; m * o];
    for i in 0..m {
        for k in 0..o {
            c[i * o + k] = (0..n).map(|j| a[i * n + j] * b[j * o + k]).sum();
        }
    }
    c
}

/// Naive `i64` dot product
pub fn naive_dot_i64(a: &[i64], b: &[i64]) -> i64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}
