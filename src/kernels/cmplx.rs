//! Complex matrix multiplication against a transposed operand: C = A @ Bᵀ
//!
//! A is M×N and B is O×N, both holding interleaved `[re, im]` pairs, so
//! `C[m][o] = Σ_n A[m][n] · B[o][n]` walks both operands along their rows.
//! No conjugation is applied. Each component is accumulated in `T::Acc` and
//! passed through `finish` once.

use super::simd::Lanes4;
use super::view::{MatMut, MatRef};
use crate::dtype::{Accumulator, Element};

/// `acc += a * b` for one complex product
#[inline(always)]
fn cmac<T: Element>(acc: (T::Acc, T::Acc), a: (T, T), b: (T, T)) -> (T::Acc, T::Acc) {
    let (ar, ai) = (a.0.widen(), a.1.widen());
    let (br, bi) = (b.0.widen(), b.1.widen());
    (acc.0.mac(ar, br).msu(ai, bi), acc.1.mac(ar, bi).mac(ai, br))
}

#[inline(always)]
fn at<T: Copy>(data: &[T], idx: usize) -> (T, T) {
    (data[2 * idx], data[2 * idx + 1])
}

/// Reference complex matmul, one product at a time
pub fn mat_mult_trans_cmplx_stride_reference<T: Element, O>(
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
            let mut acc = (T::Acc::ZERO, T::Acc::ZERO);
            for j in 0..n {
                acc = cmac::<T>(acc, at(a, i * sa + j), at(b, k * sb + j));
            }
            let out = 2 * (i * sy + k);
            y[out] = finish(acc.0);
            y[out + 1] = finish(acc.1);
        }
    }
}

/// One output, two complex elements per pack
#[inline(always)]
fn row_row_packed<T: Element>(a: &[T], b: &[T], n: usize) -> (T::Acc, T::Acc) {
    let mut acc = (T::Acc::ZERO, T::Acc::ZERO);
    let mut j = 0;
    while j + 2 <= n {
        let [ar0, ai0, ar1, ai1] = Lanes4::load(&a[2 * j..]).0;
        let [br0, bi0, br1, bi1] = Lanes4::load(&b[2 * j..]).0;
        acc = cmac::<T>(acc, (ar0, ai0), (br0, bi0));
        acc = cmac::<T>(acc, (ar1, ai1), (br1, bi1));
        j += 2;
    }
    if j < n {
        acc = cmac::<T>(acc, at(a, j), at(b, j));
    }
    acc
}

/// Packed complex matmul: two output columns per iteration share the A loads
pub fn mat_mult_trans_cmplx_stride_packed<T: Element, O>(
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
        let arow = a.get(2 * i * sa..).unwrap_or_default();
        let out = y.get_mut(2 * i * sy..).unwrap_or_default();

        let mut k = 0;
        while k + 2 <= o {
            let b0 = b.get(2 * k * sb..).unwrap_or_default();
            let b1 = b.get(2 * (k + 1) * sb..).unwrap_or_default();
            let mut c0 = (T::Acc::ZERO, T::Acc::ZERO);
            let mut c1 = (T::Acc::ZERO, T::Acc::ZERO);

            let mut j = 0;
            while j + 2 <= n {
                let [ar0, ai0, ar1, ai1] = Lanes4::load(&arow[2 * j..]).0;
                let [br0, bi0, br1, bi1] = Lanes4::load(&b0[2 * j..]).0;
                let [cr0, ci0, cr1, ci1] = Lanes4::load(&b1[2 * j..]).0;
                c0 = cmac::<T>(c0, (ar0, ai0), (br0, bi0));
                c0 = cmac::<T>(c0, (ar1, ai1), (br1, bi1));
                c1 = cmac::<T>(c1, (ar0, ai0), (cr0, ci0));
                c1 = cmac::<T>(c1, (ar1, ai1), (cr1, ci1));
                j += 2;
            }
            if j < n {
                let x = at(arow, j);
                c0 = cmac::<T>(c0, x, at(b0, j));
                c1 = cmac::<T>(c1, x, at(b1, j));
            }

            out[2 * k] = finish(c0.0);
            out[2 * k + 1] = finish(c0.1);
            out[2 * k + 2] = finish(c1.0);
            out[2 * k + 3] = finish(c1.1);
            k += 2;
        }

        if k < o {
            let c = row_row_packed(arow, b.get(2 * k * sb..).unwrap_or_default(), n);
            out[2 * k] = finish(c.0);
            out[2 * k + 1] = finish(c.1);
        }
    }
}
