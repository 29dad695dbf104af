//! Fork-join (`p`) variants over a cluster
//!
//! The output is statically partitioned into contiguous row blocks, one per
//! cluster core. Each worker runs under its own cluster identity, so the
//! glue it calls routes to the cluster kernels, and writes only its own rows.
//! `rayon::scope` is the barrier: nothing returns before every worker is done.

use super::Glue;
use crate::dtype::{Accumulator, Element, FixedPoint};
use crate::kernels::{Kernels, MatMut, MatRef};
use crate::runtime::{ClusterConfig, CoreId, MAX_CLUSTER_CORES, with_core};
use std::ops::Range;

/// Statically partition `0..rows` across the cores of `config`
///
/// Ranges are contiguous, disjoint, at most `ceil(rows / cores)` long and
/// returned in core order.
pub fn fork_rows(config: &ClusterConfig, rows: usize) -> impl Iterator<Item = Range<usize>> + '_ {
    config.partition(rows)
}

/// Run `op` on each core's block of output rows, then join
fn fork_join_rows<O, F>(config: &ClusterConfig, dst: MatMut<'_, O>, op: F)
where
    O: Send,
    F: Fn(Range<usize>, MatMut<'_, O>) + Sync,
{
    let rows = dst.rows();
    log::debug!(
        target: "dspcore::parallel",
        "forking {} rows over {} cores",
        rows,
        config.cores()
    );

    let op = &op;
    rayon::scope(|s| {
        let mut rest = dst;
        for (core, range) in fork_rows(config, rows).enumerate() {
            let (block, tail) = rest.split_rows_at(range.len());
            rest = tail;
            s.spawn(move |_| {
                with_core(CoreId::cluster_core(core as u32), || op(range, block));
            });
        }
    });
}

/// Parallel `dst = a + b`, rows split across the cluster
pub fn mat_add_stride_parallel<T: Element>(
    config: &ClusterConfig,
    a: MatRef<'_, T>,
    b: MatRef<'_, T>,
    dst: MatMut<'_, T>,
) {
    fork_join_rows(config, dst, |rows, block| {
        Glue::host().mat_add_stride(
            a.rows_range(rows.start, rows.end),
            b.rows_range(rows.start, rows.end),
            block,
        );
    });
}

/// Parallel `dst = a @ b` with widened results, rows of `a` split across the cluster
pub fn mat_mult_stride_parallel<T: Element>(
    config: &ClusterConfig,
    a: MatRef<'_, T>,
    b: MatRef<'_, T>,
    dst: MatMut<'_, T::Wide>,
) {
    fork_join_rows(config, dst, |rows, block| {
        Glue::host().mat_mult_stride(a.rows_range(rows.start, rows.end), b, block);
    });
}

/// Parallel `dst = (a @ b) >> shift`, narrowed to the storage width
pub fn mat_mult_stride_q_parallel<T: Element>(
    config: &ClusterConfig,
    a: MatRef<'_, T>,
    b: MatRef<'_, T>,
    shift: u32,
    dst: MatMut<'_, T>,
) {
    fork_join_rows(config, dst, |rows, block| {
        Glue::host().mat_mult_stride_q(a.rows_range(rows.start, rows.end), b, shift, block);
    });
}

/// Parallel fixed-point dot product
///
/// Each core accumulates its block at full width; the partial sums are
/// combined in core order and shifted once, which reproduces the single-core
/// result exactly.
pub fn dot_prod_parallel<T: FixedPoint>(
    config: &ClusterConfig,
    a: &[T],
    b: &[T],
    deci_point: u32,
) -> i32 {
    let b = &b[..a.len()];
    log::debug!(
        target: "dspcore::parallel",
        "forking dot product of {} elements over {} cores",
        a.len(),
        config.cores()
    );

    let mut partials = [T::Acc::ZERO; MAX_CLUSTER_CORES];
    rayon::scope(|s| {
        for ((core, range), slot) in fork_rows(config, a.len()).enumerate().zip(&mut partials) {
            let (a, b) = (&a[range.clone()], &b[range]);
            s.spawn(move |_| {
                *slot = with_core(CoreId::cluster_core(core as u32), || {
                    Glue::host().dot_prod_acc(a, b)
                });
            });
        }
    });

    let acc = partials.iter().fold(T::Acc::ZERO, |acc, &p| acc.add(p));
    T::to_wide(acc.shr(deci_point))
}
