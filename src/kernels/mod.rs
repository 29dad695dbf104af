//! Kernel layer: one strategy per core class
//!
//! Every operation exists as two named bodies with identical results:
//!
//! | operation | general core (`ScalarCore`) | cluster core (`ClusterCore`) |
//! |-----------|-----------------------------|------------------------------|
//! | elementwise | `*_reference` | `*_packed` (row pairs, 4 lanes) |
//! | dot product | `dot_prod_reference` | `dot_prod_packed` |
//! | min / max | `*_reference` | `*_unrolled` (pairs) |
//! | matmul | `mat_mult_stride_reference` | `mat_mult_stride_packed` (2×2 blocks) |
//! | complex matmul | `*_reference` | `*_packed` (column pairs) |
//!
//! With the `basic-kernels` feature the cluster core also runs the reference
//! bodies. Kernels never check shapes and never query the core identity;
//! routing is the job of [`crate::ops::Glue`].

pub mod cmplx;
pub mod dot;
pub mod elementwise;
pub mod matmul;
pub mod reduce;
pub mod simd;
pub mod view;

#[cfg(test)]
mod testing;

pub use simd::{LANES, Lanes4};
pub use view::{MatMut, MatRef, required_len};

use crate::dtype::{Accumulator, Element};

/// Kernel set for one core class
///
/// Elementwise operations take their shape from `dst`; every source view
/// must have the same `(rows, cols)`. Matrix products take M and O from `dst`
/// and N from `a.cols()`. Violating a shape precondition panics or produces
/// unspecified values, never undefined behavior.
pub trait Kernels<T: Element> {
    /// `dst = a + b`, wrapping at the storage width
    fn mat_add_stride(&self, a: MatRef<'_, T>, b: MatRef<'_, T>, dst: MatMut<'_, T>);

    /// `dst = a - b`, wrapping at the storage width
    fn mat_sub_stride(&self, a: MatRef<'_, T>, b: MatRef<'_, T>, dst: MatMut<'_, T>);

    /// `dst = (src * factor) >> shift`
    fn mat_scale_stride(&self, src: MatRef<'_, T>, factor: T, shift: u32, dst: MatMut<'_, T>);

    /// `dst = src`
    fn mat_copy_stride(&self, src: MatRef<'_, T>, dst: MatMut<'_, T>);

    /// `dst = value`
    fn mat_fill_stride(&self, value: T, dst: MatMut<'_, T>);

    /// Full-width `Σ a[i] * b[i]` over `a.len()` elements
    fn dot_prod_acc(&self, a: &[T], b: &[T]) -> T::Acc;

    /// `Σ a[i] * b[i] >> deci_point`, shifted once after accumulation
    #[inline]
    fn dot_prod(&self, a: &[T], b: &[T], deci_point: u32) -> T::Wide {
        T::to_wide(self.dot_prod_acc(a, b).shr(deci_point))
    }

    /// Smallest element, `T::max_value()` for an empty block
    fn min(&self, src: &[T]) -> T;

    /// Largest element, `T::min_value()` for an empty block
    fn max(&self, src: &[T]) -> T;

    /// `dst = a @ b` with widened results
    fn mat_mult_stride(&self, a: MatRef<'_, T>, b: MatRef<'_, T>, dst: MatMut<'_, T::Wide>);

    /// `dst = (a @ b) >> shift`, narrowed to the storage width
    fn mat_mult_stride_q(&self, a: MatRef<'_, T>, b: MatRef<'_, T>, shift: u32, dst: MatMut<'_, T>);

    /// Complex `dst = a @ bᵀ` with widened results
    fn mat_mult_trans_cmplx_stride(
        &self,
        a: MatRef<'_, T>,
        b: MatRef<'_, T>,
        dst: MatMut<'_, T::Wide>,
    );

    /// Complex `dst = (a @ bᵀ) >> shift`, narrowed per component
    fn mat_mult_trans_cmplx_stride_q(
        &self,
        a: MatRef<'_, T>,
        b: MatRef<'_, T>,
        shift: u32,
        dst: MatMut<'_, T>,
    );
}

/// Kernels for the fabric controller (plain RV32IM)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ScalarCore;

/// Kernels for cluster cores (packed SIMD, hardware loops)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ClusterCore;

macro_rules! impl_kernels {
    ($core:ty, $packed:ident, $unrolled:ident) => {
        paste::paste! {
            impl<T: Element> Kernels<T> for $core {
                #[inline]
                fn mat_add_stride(&self, a: MatRef<'_, T>, b: MatRef<'_, T>, dst: MatMut<'_, T>) {
                    elementwise::[<mat_add_stride_ $packed>](a, b, dst)
                }

                #[inline]
                fn mat_sub_stride(&self, a: MatRef<'_, T>, b: MatRef<'_, T>, dst: MatMut<'_, T>) {
                    elementwise::[<mat_sub_stride_ $packed>](a, b, dst)
                }

                #[inline]
                fn mat_scale_stride(
                    &self,
                    src: MatRef<'_, T>,
                    factor: T,
                    shift: u32,
                    dst: MatMut<'_, T>,
                ) {
                    elementwise::[<mat_scale_stride_ $packed>](src, factor, shift, dst)
                }

                #[inline]
                fn mat_copy_stride(&self, src: MatRef<'_, T>, dst: MatMut<'_, T>) {
                    elementwise::[<mat_copy_stride_ $packed>](src, dst)
                }

                #[inline]
                fn mat_fill_stride(&self, value: T, dst: MatMut<'_, T>) {
                    elementwise::[<mat_fill_stride_ $packed>](value, dst)
                }

                #[inline]
                fn dot_prod_acc(&self, a: &[T], b: &[T]) -> T::Acc {
                    dot::[<dot_prod_ $packed>](a, b)
                }

                #[inline]
                fn min(&self, src: &[T]) -> T {
                    reduce::[<min_ $unrolled>](src)
                }

                #[inline]
                fn max(&self, src: &[T]) -> T {
                    reduce::[<max_ $unrolled>](src)
                }

                #[inline]
                fn mat_mult_stride(
                    &self,
                    a: MatRef<'_, T>,
                    b: MatRef<'_, T>,
                    dst: MatMut<'_, T::Wide>,
                ) {
                    matmul::[<mat_mult_stride_ $packed>](a, b, dst, T::to_wide)
                }

                #[inline]
                fn mat_mult_stride_q(
                    &self,
                    a: MatRef<'_, T>,
                    b: MatRef<'_, T>,
                    shift: u32,
                    dst: MatMut<'_, T>,
                ) {
                    matmul::[<mat_mult_stride_ $packed>](a, b, dst, |acc| T::narrow(acc.shr(shift)))
                }

                #[inline]
                fn mat_mult_trans_cmplx_stride(
                    &self,
                    a: MatRef<'_, T>,
                    b: MatRef<'_, T>,
                    dst: MatMut<'_, T::Wide>,
                ) {
                    cmplx::[<mat_mult_trans_cmplx_stride_ $packed>](a, b, dst, T::to_wide)
                }

                #[inline]
                fn mat_mult_trans_cmplx_stride_q(
                    &self,
                    a: MatRef<'_, T>,
                    b: MatRef<'_, T>,
                    shift: u32,
                    dst: MatMut<'_, T>,
                ) {
                    cmplx::[<mat_mult_trans_cmplx_stride_ $packed>](a, b, dst, |acc| {
                        T::narrow(acc.shr(shift))
                    })
                }
            }
        }
    };
}

impl_kernels!(ScalarCore, reference, reference);

#[cfg(not(feature = "basic-kernels"))]
impl_kernels!(ClusterCore, packed, unrolled);

#[cfg(feature = "basic-kernels")]
impl_kernels!(ClusterCore, reference, reference);
