//! Error types for dspcore
//!
//! Kernels and glue functions never fail: they trust the caller. These errors
//! are only produced by the validating constructors (`MatRef::try_new`,
//! `MatMut::try_new`), the `ops::checked` wrappers and `ClusterConfig`.

use thiserror::Error;

/// Result type alias using dspcore's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the checked entry points
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Row stride is smaller than the row width
    #[error("Stride {stride} is smaller than the row width {cols}")]
    StrideTooSmall {
        /// Elements between the start of consecutive rows
        stride: usize,
        /// Logical row width
        cols: usize,
    },

    /// Backing buffer cannot hold the described matrix or vector
    #[error("Buffer of {len} elements is too short, {required} required")]
    BufferTooShort {
        /// Minimum number of elements needed
        required: usize,
        /// Actual buffer length
        len: usize,
    },

    /// Matrix shapes disagree
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected `[rows, cols]`
        expected: [usize; 2],
        /// Actual `[rows, cols]`
        got: [usize; 2],
    },

    /// Vector operands have different lengths
    #[error("Length mismatch: {lhs} vs {rhs}")]
    LengthMismatch {
        /// Left-hand side length
        lhs: usize,
        /// Right-hand side length
        rhs: usize,
    },

    /// Cluster configuration asks for an unsupported number of cores
    #[error("Invalid core count {cores}: expected 1..={max}")]
    InvalidCoreCount {
        /// Requested core count
        cores: usize,
        /// Largest supported cluster
        max: usize,
    },
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: (usize, usize), got: (usize, usize)) -> Self {
        Self::ShapeMismatch {
            expected: [expected.0, expected.1],
            got: [got.0, got.1],
        }
    }

    /// Create a length mismatch error, or `Ok` if the lengths agree
    pub fn check_lengths(lhs: usize, rhs: usize) -> Result<()> {
        if lhs == rhs {
            Ok(())
        } else {
            Err(Self::LengthMismatch { lhs, rhs })
        }
    }
}
