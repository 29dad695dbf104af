//! Validating wrappers around the host glue
//!
//! Same operations as [`Kernels`], but every view is checked for
//! `stride >= cols` and a sufficiently long buffer, and operand shapes are
//! checked against each other before any kernel runs. On error nothing is
//! written.

use super::Glue;
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::kernels::{Kernels, MatMut, MatRef};

fn check_source<T>(src: &MatRef<'_, T>, shape: (usize, usize)) -> Result<()> {
    src.validate()?;
    if src.shape() != shape {
        return Err(Error::shape_mismatch(shape, src.shape()));
    }
    Ok(())
}

/// Shapes of `a @ b` (or `a @ bᵀ` when `transposed`) against `dst`
fn check_product<T, O>(
    a: &MatRef<'_, T>,
    b: &MatRef<'_, T>,
    dst: &MatMut<'_, O>,
    transposed: bool,
) -> Result<()> {
    let (expected_b, o) = if transposed {
        ((b.rows(), a.cols()), b.rows())
    } else {
        ((a.cols(), b.cols()), b.cols())
    };
    if b.shape() != expected_b {
        return Err(Error::shape_mismatch(expected_b, b.shape()));
    }
    if dst.shape() != (a.rows(), o) {
        return Err(Error::shape_mismatch((a.rows(), o), dst.shape()));
    }
    Ok(())
}

/// Checked `dst = a + b`
pub fn mat_add_stride<T: Element>(
    a: MatRef<'_, T>,
    b: MatRef<'_, T>,
    dst: MatMut<'_, T>,
) -> Result<()> {
    dst.validate()?;
    check_source(&a, dst.shape())?;
    check_source(&b, dst.shape())?;
    Glue::host().mat_add_stride(a, b, dst);
    Ok(())
}

/// Checked `dst = a - b`
pub fn mat_sub_stride<T: Element>(
    a: MatRef<'_, T>,
    b: MatRef<'_, T>,
    dst: MatMut<'_, T>,
) -> Result<()> {
    dst.validate()?;
    check_source(&a, dst.shape())?;
    check_source(&b, dst.shape())?;
    Glue::host().mat_sub_stride(a, b, dst);
    Ok(())
}

/// Checked `dst = (src * factor) >> shift`
pub fn mat_scale_stride<T: Element>(
    src: MatRef<'_, T>,
    factor: T,
    shift: u32,
    dst: MatMut<'_, T>,
) -> Result<()> {
    dst.validate()?;
    check_source(&src, dst.shape())?;
    Glue::host().mat_scale_stride(src, factor, shift, dst);
    Ok(())
}

/// Checked `dst = src`
pub fn mat_copy_stride<T: Element>(src: MatRef<'_, T>, dst: MatMut<'_, T>) -> Result<()> {
    dst.validate()?;
    check_source(&src, dst.shape())?;
    Glue::host().mat_copy_stride(src, dst);
    Ok(())
}

/// Checked `dst = value`
pub fn mat_fill_stride<T: Element>(value: T, dst: MatMut<'_, T>) -> Result<()> {
    dst.validate()?;
    Glue::host().mat_fill_stride(value, dst);
    Ok(())
}

/// Checked dot product; `a` and `b` must have the same length
pub fn dot_prod<T: Element>(a: &[T], b: &[T], deci_point: u32) -> Result<T::Wide> {
    Error::check_lengths(a.len(), b.len())?;
    Ok(Glue::host().dot_prod(a, b, deci_point))
}

/// Smallest element of `src`
///
/// Any slice is a valid input, so this cannot fail.
pub fn min<T: Element>(src: &[T]) -> T {
    Kernels::<T>::min(&Glue::host(), src)
}

/// Largest element of `src`
pub fn max<T: Element>(src: &[T]) -> T {
    Kernels::<T>::max(&Glue::host(), src)
}

/// Checked `dst = a @ b` with widened results
pub fn mat_mult_stride<T: Element>(
    a: MatRef<'_, T>,
    b: MatRef<'_, T>,
    dst: MatMut<'_, T::Wide>,
) -> Result<()> {
    a.validate()?;
    b.validate()?;
    dst.validate()?;
    check_product(&a, &b, &dst, false)?;
    Glue::host().mat_mult_stride(a, b, dst);
    Ok(())
}

/// Checked `dst = (a @ b) >> shift`
pub fn mat_mult_stride_q<T: Element>(
    a: MatRef<'_, T>,
    b: MatRef<'_, T>,
    shift: u32,
    dst: MatMut<'_, T>,
) -> Result<()> {
    a.validate()?;
    b.validate()?;
    dst.validate()?;
    check_product(&a, &b, &dst, false)?;
    Glue::host().mat_mult_stride_q(a, b, shift, dst);
    Ok(())
}

/// Checked complex `dst = a @ bᵀ` with widened results
pub fn mat_mult_trans_cmplx_stride<T: Element>(
    a: MatRef<'_, T>,
    b: MatRef<'_, T>,
    dst: MatMut<'_, T::Wide>,
) -> Result<()> {
    a.validate_complex()?;
    b.validate_complex()?;
    dst.validate_complex()?;
    check_product(&a, &b, &dst, true)?;
    Glue::host().mat_mult_trans_cmplx_stride(a, b, dst);
    Ok(())
}

/// Checked complex `dst = (a @ bᵀ) >> shift`
pub fn mat_mult_trans_cmplx_stride_q<T: Element>(
    a: MatRef<'_, T>,
    b: MatRef<'_, T>,
    shift: u32,
    dst: MatMut<'_, T>,
) -> Result<()> {
    a.validate_complex()?;
    b.validate_complex()?;
    dst.validate_complex()?;
    check_product(&a, &b, &dst, true)?;
    Glue::host().mat_mult_trans_cmplx_stride_q(a, b, shift, dst);
    Ok(())
}
