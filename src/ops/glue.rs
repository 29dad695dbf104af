//! Typed entry points in the platform calling convention
//!
//! One function per (operation, type, precision), named `<op>_<type><bits>`.
//! Arguments follow the flat order of the platform library: inputs, sizes,
//! strides, fixed-point shift, output. Every function dispatches through
//! [`Glue::host`] and trusts its arguments; see [`super::checked`] for the
//! validating variants.
//!
//! | suffix | storage | products |
//! |--------|---------|----------|
//! | `i32`, `i16`, `i8` | integer | widened to `i32`, no shift |
//! | `q32`, `q16`, `q8` | integer | shifted, narrowed back to storage |
//! | `f32` | float | `f32` |

use super::Glue;
use crate::dtype::Element;
use crate::kernels::{Kernels, MatMut, MatRef};

// ---------------------------------------------------------------------------
// Operations shared by integer and float types
// ---------------------------------------------------------------------------

macro_rules! impl_plain_glue {
    ($($ty:ident),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = "Strided matrix addition for `" $ty "`: `dst = a + b` over `m × n`"]
                #[allow(clippy::too_many_arguments)]
                pub fn [<mat_add_stride_ $ty>](
                    src_a: &[$ty],
                    src_b: &[$ty],
                    m: usize,
                    n: usize,
                    stride_a: usize,
                    stride_b: usize,
                    stride_y: usize,
                    dst: &mut [$ty],
                ) {
                    Glue::host().mat_add_stride(
                        MatRef::new(src_a, m, n, stride_a),
                        MatRef::new(src_b, m, n, stride_b),
                        MatMut::new(dst, m, n, stride_y),
                    )
                }

                #[doc = "Strided matrix subtraction for `" $ty "`: `dst = a - b` over `m × n`"]
                #[allow(clippy::too_many_arguments)]
                pub fn [<mat_sub_stride_ $ty>](
                    src_a: &[$ty],
                    src_b: &[$ty],
                    m: usize,
                    n: usize,
                    stride_a: usize,
                    stride_b: usize,
                    stride_y: usize,
                    dst: &mut [$ty],
                ) {
                    Glue::host().mat_sub_stride(
                        MatRef::new(src_a, m, n, stride_a),
                        MatRef::new(src_b, m, n, stride_b),
                        MatMut::new(dst, m, n, stride_y),
                    )
                }

                #[doc = "Strided matrix copy for `" $ty "`"]
                pub fn [<mat_copy_stride_ $ty>](
                    src: &[$ty],
                    m: usize,
                    n: usize,
                    stride_src: usize,
                    stride_dst: usize,
                    dst: &mut [$ty],
                ) {
                    Glue::host().mat_copy_stride(
                        MatRef::new(src, m, n, stride_src),
                        MatMut::new(dst, m, n, stride_dst),
                    )
                }

                #[doc = "Strided matrix fill for `" $ty "`"]
                pub fn [<mat_fill_stride_ $ty>](
                    value: $ty,
                    m: usize,
                    n: usize,
                    stride: usize,
                    dst: &mut [$ty],
                ) {
                    Glue::host().mat_fill_stride(value, MatMut::new(dst, m, n, stride))
                }

                #[doc = "Smallest of the first `block_size` elements (`" $ty "::MAX` when empty)"]
                pub fn [<min_ $ty>](src: &[$ty], block_size: usize) -> $ty {
                    Kernels::<$ty>::min(&Glue::host(), &src[..block_size])
                }

                #[doc = "Largest of the first `block_size` elements (`" $ty "::MIN` when empty)"]
                pub fn [<max_ $ty>](src: &[$ty], block_size: usize) -> $ty {
                    Kernels::<$ty>::max(&Glue::host(), &src[..block_size])
                }

                #[doc = "Strided matrix scale for `" $ty "` without a shift: `dst = src * factor`"]
                pub fn [<mat_scale_stride_ $ty>](
                    src: &[$ty],
                    m: usize,
                    n: usize,
                    factor: $ty,
                    stride_src: usize,
                    stride_dst: usize,
                    dst: &mut [$ty],
                ) {
                    Glue::host().mat_scale_stride(
                        MatRef::new(src, m, n, stride_src),
                        factor,
                        0,
                        MatMut::new(dst, m, n, stride_dst),
                    )
                }

                #[doc = "Dot product of `" $ty "` vectors with a widened result"]
                pub fn [<dot_prod_ $ty>](
                    src_a: &[$ty],
                    src_b: &[$ty],
                    block_size: usize,
                ) -> <$ty as Element>::Wide {
                    Glue::host().dot_prod(&src_a[..block_size], &src_b[..block_size], 0)
                }

                #[doc = "Strided matrix product for `" $ty "`: `m × n` @ `n × o`, widened"]
                #[allow(clippy::too_many_arguments)]
                pub fn [<mat_mult_stride_ $ty>](
                    src_a: &[$ty],
                    src_b: &[$ty],
                    m: usize,
                    n: usize,
                    o: usize,
                    stride_a: usize,
                    stride_b: usize,
                    stride_y: usize,
                    dst: &mut [<$ty as Element>::Wide],
                ) {
                    Glue::host().mat_mult_stride(
                        MatRef::new(src_a, m, n, stride_a),
                        MatRef::new(src_b, n, o, stride_b),
                        MatMut::new(dst, m, o, stride_y),
                    )
                }

                #[doc = "Strided complex product for `" $ty "`: `m × n` @ (`o × n`)ᵀ, widened"]
                #[allow(clippy::too_many_arguments)]
                pub fn [<mat_mult_trans_cmplx_stride_ $ty>](
                    src_a: &[$ty],
                    src_b: &[$ty],
                    m: usize,
                    n: usize,
                    o: usize,
                    stride_a: usize,
                    stride_b: usize,
                    stride_c: usize,
                    dst: &mut [<$ty as Element>::Wide],
                ) {
                    Glue::host().mat_mult_trans_cmplx_stride(
                        MatRef::new(src_a, m, n, stride_a),
                        MatRef::new(src_b, o, n, stride_b),
                        MatMut::new(dst, m, o, stride_c),
                    )
                }
            )*
        }
    };
}

impl_plain_glue!(i32, i16, i8, f32);

// ---------------------------------------------------------------------------
// Fixed-point formats
// ---------------------------------------------------------------------------

macro_rules! impl_fixed_glue {
    ($($q:ident => $ty:ty),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = "Strided fixed-point scale (`" $q "`): `dst = (src * factor) >> shift`"]
                #[allow(clippy::too_many_arguments)]
                pub fn [<mat_scale_stride_ $q>](
                    src: &[$ty],
                    m: usize,
                    n: usize,
                    factor: $ty,
                    shift: u32,
                    stride_src: usize,
                    stride_dst: usize,
                    dst: &mut [$ty],
                ) {
                    Glue::host().mat_scale_stride(
                        MatRef::new(src, m, n, stride_src),
                        factor,
                        shift,
                        MatMut::new(dst, m, n, stride_dst),
                    )
                }

                #[doc = "Fixed-point dot product (`" $q "`), shifted right by `deci_point` once"]
                pub fn [<dot_prod_ $q>](
                    src_a: &[$ty],
                    src_b: &[$ty],
                    block_size: usize,
                    deci_point: u32,
                ) -> i32 {
                    Glue::host().dot_prod(&src_a[..block_size], &src_b[..block_size], deci_point)
                }

                #[doc = "Strided fixed-point matrix product (`" $q "`), narrowed after `shift`"]
                #[allow(clippy::too_many_arguments)]
                pub fn [<mat_mult_stride_ $q>](
                    src_a: &[$ty],
                    src_b: &[$ty],
                    m: usize,
                    n: usize,
                    o: usize,
                    stride_a: usize,
                    stride_b: usize,
                    stride_y: usize,
                    shift: u32,
                    dst: &mut [$ty],
                ) {
                    Glue::host().mat_mult_stride_q(
                        MatRef::new(src_a, m, n, stride_a),
                        MatRef::new(src_b, n, o, stride_b),
                        shift,
                        MatMut::new(dst, m, o, stride_y),
                    )
                }

                #[doc = "Strided fixed-point complex product (`" $q "`), narrowed after `shift`"]
                #[allow(clippy::too_many_arguments)]
                pub fn [<mat_mult_trans_cmplx_stride_ $q>](
                    src_a: &[$ty],
                    src_b: &[$ty],
                    m: usize,
                    n: usize,
                    o: usize,
                    stride_a: usize,
                    stride_b: usize,
                    stride_c: usize,
                    shift: u32,
                    dst: &mut [$ty],
                ) {
                    Glue::host().mat_mult_trans_cmplx_stride_q(
                        MatRef::new(src_a, m, n, stride_a),
                        MatRef::new(src_b, o, n, stride_b),
                        shift,
                        MatMut::new(dst, m, o, stride_c),
                    )
                }
            )*
        }
    };
}

impl_fixed_glue!(q32 => i32, q16 => i16, q8 => i8);
