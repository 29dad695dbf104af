//! Fork-join variants agree with the single-core glue
#![cfg(feature = "parallel")]

mod common;

use common::{assert_gaps_untouched, random_i8, random_i16, random_i32, rng, sentinel_buffer};
use dspcore::kernels::{Kernels, MatMut, MatRef, required_len};
use dspcore::ops::Glue;
use dspcore::ops::parallel::{
    dot_prod_parallel, fork_rows, mat_add_stride_parallel, mat_mult_stride_parallel,
    mat_mult_stride_q_parallel,
};
use dspcore::runtime::{ClusterConfig, MAX_CLUSTER_CORES};

fn configs() -> impl Iterator<Item = ClusterConfig> {
    [1, 2, 3, 8, MAX_CLUSTER_CORES]
        .into_iter()
        .map(|cores| ClusterConfig::new(cores).unwrap())
}

#[test]
fn test_fork_rows_disjoint_and_complete() {
    for config in configs() {
        for rows in 0..40 {
            let ranges: Vec<_> = fork_rows(&config, rows).collect();
            assert!(ranges.len() <= config.cores());
            let mut next = 0;
            for r in &ranges {
                assert_eq!(r.start, next, "rows={rows}");
                assert!(!r.is_empty());
                assert!(r.len() <= rows.div_ceil(config.cores()));
                next = r.end;
            }
            assert_eq!(next, rows);
        }
    }
}

#[test]
fn test_parallel_add_matches_single_core() {
    let mut rng = rng(0xa0);
    let (m, n) = (37, 11);
    let (sa, sb, sy) = (12, 15, 13);
    let a = random_i8(&mut rng, required_len(m, n, sa));
    let b = random_i8(&mut rng, required_len(m, n, sb));

    let mut expected = sentinel_buffer(m, sy, 0x55i8);
    Glue::host().mat_add_stride(
        MatRef::new(&a, m, n, sa),
        MatRef::new(&b, m, n, sb),
        MatMut::new(&mut expected, m, n, sy),
    );

    for config in configs() {
        let mut y = sentinel_buffer(m, sy, 0x55i8);
        mat_add_stride_parallel(
            &config,
            MatRef::new(&a, m, n, sa),
            MatRef::new(&b, m, n, sb),
            MatMut::new(&mut y, m, n, sy),
        );
        assert_eq!(y, expected, "cores={}", config.cores());
        assert_gaps_untouched(&y, m, n, sy, 0x55);
    }
}

#[test]
fn test_parallel_mat_mult_matches_single_core() {
    let mut rng = rng(0x3b);
    let (m, n, o) = (19, 9, 6);
    let a = random_i16(&mut rng, m * n);
    let b = random_i16(&mut rng, n * o);

    let mut wide = vec![0i32; m * o];
    let mut narrow = vec![0i16; m * o];
    Glue::host().mat_mult_stride(
        MatRef::contiguous(&a, m, n),
        MatRef::contiguous(&b, n, o),
        MatMut::contiguous(&mut wide, m, o),
    );
    Glue::host().mat_mult_stride_q(
        MatRef::contiguous(&a, m, n),
        MatRef::contiguous(&b, n, o),
        15,
        MatMut::contiguous(&mut narrow, m, o),
    );

    for config in configs() {
        let mut y = vec![0i32; m * o];
        mat_mult_stride_parallel(
            &config,
            MatRef::contiguous(&a, m, n),
            MatRef::contiguous(&b, n, o),
            MatMut::contiguous(&mut y, m, o),
        );
        assert_eq!(y, wide, "cores={}", config.cores());

        let mut q = vec![0i16; m * o];
        mat_mult_stride_q_parallel(
            &config,
            MatRef::contiguous(&a, m, n),
            MatRef::contiguous(&b, n, o),
            15,
            MatMut::contiguous(&mut q, m, o),
        );
        assert_eq!(q, narrow, "cores={}", config.cores());
    }
}

#[test]
fn test_parallel_dot_bit_exact() {
    let mut rng = rng(0xd0);
    for len in [0, 1, 7, 100, 4097] {
        let a = random_i32(&mut rng, len);
        let b = random_i32(&mut rng, len);
        let expected = Glue::host().dot_prod(&a[..], &b[..], 31);
        for config in configs() {
            assert_eq!(
                dot_prod_parallel(&config, &a, &b, 31),
                expected,
                "len={len} cores={}",
                config.cores()
            );
        }
    }
}

#[test]
fn test_parallel_float_matmul_matches_single_core() {
    let (m, n, o) = (10, 7, 3);
    let a: Vec<f32> = (0..m * n).map(|x| x as f32 * 0.125 - 3.0).collect();
    let b: Vec<f32> = (0..n * o).map(|x| 1.5 - x as f32 * 0.25).collect();

    let mut expected = vec![0f32; m * o];
    Glue::host().mat_mult_stride(
        MatRef::contiguous(&a, m, n),
        MatRef::contiguous(&b, n, o),
        MatMut::contiguous(&mut expected, m, o),
    );

    let mut y = vec![0f32; m * o];
    mat_mult_stride_parallel(
        &ClusterConfig::default(),
        MatRef::contiguous(&a, m, n),
        MatRef::contiguous(&b, n, o),
        MatMut::contiguous(&mut y, m, o),
    );
    assert_eq!(y, expected);
}

#[test]
fn test_parallel_dot_full_scale_q31_exact() {
    // Each -1.0 * -1.0 product is 2^62; 1000 of them sum well past i64
    let a = vec![i32::MIN; 1000];
    let exact = ((1000i128 << 62) >> 50) as i32;
    assert_eq!(Glue::host().dot_prod(&a[..], &a[..], 50), exact);
    for config in configs() {
        assert_eq!(dot_prod_parallel(&config, &a, &a, 50), exact, "cores={}", config.cores());
    }
}
