//! Strided matrix views over caller-owned buffers
//!
//! A view is `(data, rows, cols, stride)`: element `(r, c)` lives at
//! `data[r * stride + c]`. The `stride - cols` elements after each row belong
//! to the caller and are never read or written. Complex matrices use the same
//! views with `cols` and `stride` counted in complex elements and `data`
//! holding interleaved `[re, im]` pairs.

use crate::error::{Error, Result};

/// Minimum buffer length backing a `rows x cols` view with row stride `stride`
#[inline]
pub const fn required_len(rows: usize, cols: usize, stride: usize) -> usize {
    if rows == 0 || cols == 0 {
        0
    } else {
        (rows - 1) * stride + cols
    }
}

/// Check stride and buffer length; `width` is the number of scalars per element
fn validate(len: usize, rows: usize, cols: usize, stride: usize, width: usize) -> Result<()> {
    if stride < cols {
        return Err(Error::StrideTooSmall { stride, cols });
    }
    let required = width * required_len(rows, cols, stride);
    if len < required {
        return Err(Error::BufferTooShort { required, len });
    }
    Ok(())
}

/// Read-only strided matrix view
#[derive(Copy, Clone, Debug)]
pub struct MatRef<'a, T> {
    data: &'a [T],
    rows: usize,
    cols: usize,
    stride: usize,
}

impl<'a, T> MatRef<'a, T> {
    /// Create a view without validation
    ///
    /// The caller guarantees `stride >= cols` and that `data` holds
    /// [`required_len`] elements; kernels index out of bounds otherwise.
    #[inline]
    pub const fn new(data: &'a [T], rows: usize, cols: usize, stride: usize) -> Self {
        Self {
            data,
            rows,
            cols,
            stride,
        }
    }

    /// Create a view after checking stride and buffer length
    pub fn try_new(data: &'a [T], rows: usize, cols: usize, stride: usize) -> Result<Self> {
        validate(data.len(), rows, cols, stride, 1)?;
        Ok(Self::new(data, rows, cols, stride))
    }

    /// Check the view's invariants after unchecked construction
    pub fn validate(&self) -> Result<()> {
        validate(self.data.len(), self.rows, self.cols, self.stride, 1)
    }

    /// Check the view as a complex matrix of interleaved `[re, im]` pairs
    pub fn validate_complex(&self) -> Result<()> {
        validate(self.data.len(), self.rows, self.cols, self.stride, 2)
    }

    /// Contiguous view: `stride == cols`
    #[inline]
    pub const fn contiguous(data: &'a [T], rows: usize, cols: usize) -> Self {
        Self::new(data, rows, cols, cols)
    }

    /// Underlying buffer, including stride gaps
    #[inline]
    pub const fn data(&self) -> &'a [T] {
        self.data
    }

    /// Number of rows
    #[inline]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Elements between the starts of consecutive rows
    #[inline]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// `(rows, cols)`
    #[inline]
    pub const fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Sub-view of rows `start..end`
    #[inline]
    pub fn rows_range(&self, start: usize, end: usize) -> Self {
        let offset = (start * self.stride).min(self.data.len());
        Self::new(&self.data[offset..], end - start, self.cols, self.stride)
    }
}

/// Exclusive strided matrix view
#[derive(Debug)]
pub struct MatMut<'a, T> {
    data: &'a mut [T],
    rows: usize,
    cols: usize,
    stride: usize,
}

impl<'a, T> MatMut<'a, T> {
    /// Create a view without validation
    ///
    /// The caller guarantees `stride >= cols` and that `data` holds
    /// [`required_len`] elements; kernels index out of bounds otherwise.
    #[inline]
    pub fn new(data: &'a mut [T], rows: usize, cols: usize, stride: usize) -> Self {
        Self {
            data,
            rows,
            cols,
            stride,
        }
    }

    /// Create a view after checking stride and buffer length
    pub fn try_new(data: &'a mut [T], rows: usize, cols: usize, stride: usize) -> Result<Self> {
        validate(data.len(), rows, cols, stride, 1)?;
        Ok(Self::new(data, rows, cols, stride))
    }

    /// Check the view's invariants after unchecked construction
    pub fn validate(&self) -> Result<()> {
        validate(self.data.len(), self.rows, self.cols, self.stride, 1)
    }

    /// Check the view as a complex matrix of interleaved `[re, im]` pairs
    pub fn validate_complex(&self) -> Result<()> {
        validate(self.data.len(), self.rows, self.cols, self.stride, 2)
    }

    /// Contiguous view: `stride == cols`
    #[inline]
    pub fn contiguous(data: &'a mut [T], rows: usize, cols: usize) -> Self {
        Self::new(data, rows, cols, cols)
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Elements between the starts of consecutive rows
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// `(rows, cols)`
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Underlying buffer, including stride gaps
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut *self.data
    }

    /// Split into rows `0..mid` and `mid..rows`
    ///
    /// The two halves never overlap: the first keeps only the elements before
    /// row `mid`, so workers may write them concurrently.
    pub fn split_rows_at(self, mid: usize) -> (MatMut<'a, T>, MatMut<'a, T>) {
        let split = (mid * self.stride).min(self.data.len());
        let (top, bottom) = self.data.split_at_mut(split);
        (
            MatMut::new(top, mid, self.cols, self.stride),
            MatMut::new(bottom, self.rows - mid, self.cols, self.stride),
        )
    }
}
