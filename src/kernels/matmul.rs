//! Strided matrix multiplication kernels: C = A @ B
//!
//! A is M×N, B is N×O and C is M×O, each with its own row stride. Products
//! are accumulated in `T::Acc` in `n` order and handed to a `finish` closure
//! that produces the stored value (widening for integer results,
//! shift-and-narrow for fixed point).
//!
//! The packed body computes 2×2 output blocks: two rows of A against two
//! columns of B, four inner-dimension elements per [`Lanes4::dotp`]. Columns
//! of B are gathered across rows. Each output still sees its products in
//! the same order as the reference body, so float results match bit for bit.

use super::simd::{LANES, Lanes4};
use super::view::{MatMut, MatRef};
use crate::dtype::{Accumulator, Element};

/// Reference matmul, one output and one product at a time
pub fn mat_mult_stride_reference<T: Element, O>(
    a: MatRef<'_, T>,
    b: MatRef<'_, T>,
    mut dst: MatMut<'_, O>,
    finish: impl Fn(T::Acc) -> O,
) {
    let (m, o) = dst.shape();
    let n = a.cols();
    let (sa, sb, sy) = (a.stride(), b.stride(), dst.stride());
    let (a, b, y) = (a.data(), b.data(), dst.data_mut());

    for i in 0..m {
        for k in 0..o {
            let mut sum = T::Acc::ZERO;
            for j in 0..n {
                sum = sum.mac(a[i * sa + j].widen(), b[j * sb + k].widen());
            }
            y[i * sy + k] = finish(sum);
        }
    }
}

/// One output: row of A against column `k` of B, 4-lane packs then tail
#[inline(always)]
fn row_col_packed<T: Element>(row: &[T], b: &[T], k: usize, sb: usize, n: usize) -> T::Acc {
    let mut sum = T::Acc::ZERO;
    let mut j = 0;
    while j + LANES <= n {
        sum = Lanes4::load(&row[j..]).dotp(Lanes4::gather(&b[j * sb + k..], sb), sum);
        j += LANES;
    }
    while j < n {
        sum = sum.mac(row[j].widen(), b[j * sb + k].widen());
        j += 1;
    }
    sum
}

/// Packed matmul, 2×2 output blocks with 4-lane inner products
pub fn mat_mult_stride_packed<T: Element, O>(
    a: MatRef<'_, T>,
    b: MatRef<'_, T>,
    mut dst: MatMut<'_, O>,
    finish: impl Fn(T::Acc) -> O,
) {
    let (m, o) = dst.shape();
    let n = a.cols();
    let (sa, sb, sy) = (a.stride(), b.stride(), dst.stride());
    let (a, b, y) = (a.data(), b.data(), dst.data_mut());

    let m_even = m - m % 2;
    let o_even = o - o % 2;

    for i in (0..m_even).step_by(2) {
        // Row starts may lie past the end of A when N is zero
        let row0 = a.get(i * sa..).unwrap_or_default();
        let row1 = a.get((i + 1) * sa..).unwrap_or_default();

        for k in (0..o_even).step_by(2) {
            let mut s00 = T::Acc::ZERO;
            let mut s01 = T::Acc::ZERO;
            let mut s10 = T::Acc::ZERO;
            let mut s11 = T::Acc::ZERO;

            let mut j = 0;
            while j + LANES <= n {
                let a0 = Lanes4::load(&row0[j..]);
                let a1 = Lanes4::load(&row1[j..]);
                let b0 = Lanes4::gather(&b[j * sb + k..], sb);
                let b1 = Lanes4::gather(&b[j * sb + k + 1..], sb);
                s00 = a0.dotp(b0, s00);
                s01 = a0.dotp(b1, s01);
                s10 = a1.dotp(b0, s10);
                s11 = a1.dotp(b1, s11);
                j += LANES;
            }
            while j < n {
                let (a0, a1) = (row0[j].widen(), row1[j].widen());
                let (b0, b1) = (b[j * sb + k].widen(), b[j * sb + k + 1].widen());
                s00 = s00.mac(a0, b0);
                s01 = s01.mac(a0, b1);
                s10 = s10.mac(a1, b0);
                s11 = s11.mac(a1, b1);
                j += 1;
            }

            y[i * sy + k] = finish(s00);
            y[i * sy + k + 1] = finish(s01);
            y[(i + 1) * sy + k] = finish(s10);
            y[(i + 1) * sy + k + 1] = finish(s11);
        }

        if o_even < o {
            let k = o_even;
            y[i * sy + k] = finish(row_col_packed(row0, b, k, sb, n));
            y[(i + 1) * sy + k] = finish(row_col_packed(row1, b, k, sb, n));
        }
    }

    if m_even < m {
        let i = m_even;
        let row = a.get(i * sa..).unwrap_or_default();
        for k in 0..o {
            y[i * sy + k] = finish(row_col_packed(row, b, k, sb, n));
        }
    }
}
