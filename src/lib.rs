//! # dspcore
//!
//! **Fixed- and floating-point DSP kernels for multicore embedded clusters.**
//!
//! dspcore provides strided matrix arithmetic, dot products, min/max
//! reductions and real/complex matrix products over `i32`, `i16`, `i8`
//! (plain or fixed-point `q` formats) and `f32`, with one kernel set per
//! core class:
//!
//! - **Fabric controller**: plain scalar loops (`ScalarCore`)
//! - **Cluster cores**: row-paired, 4-lane packed loops (`ClusterCore`)
//!
//! Both sets produce bit-identical results. The [`ops::Glue`] dispatcher asks
//! the calling core for its class on every call and forwards accordingly.
//!
//! ## Quick Start
//!
//! ```rust
//! use dspcore::ops::glue;
//!
//! let a = [1i16, 2, 3, 4];
//! let b = [10i16, 20, 30, 40];
//! let mut y = [0i16; 4];
//! glue::mat_add_stride_i16(&a, &b, 2, 2, 2, 2, 2, &mut y);
//! assert_eq!(y, [11, 22, 33, 44]);
//!
//! assert_eq!(glue::dot_prod_i32(&[1, 2, 3], &[4, 5, 6], 3), 32);
//! assert_eq!(glue::min_i16(&[7, -3, 5, -3, 9], 5), -3);
//! ```
//!
//! ## Preconditions
//!
//! Kernels and glue functions trust their arguments: every view needs
//! `stride >= cols` and a buffer of at least
//! [`required_len`](kernels::required_len) elements. Violations panic on an
//! out-of-bounds index or produce unspecified values. Use [`ops::checked`]
//! for validated entry points.
//!
//! ## Feature Flags
//!
//! - `parallel` (default): fork-join variants across cluster cores (rayon)
//! - `basic-kernels`: run the reference loop bodies on cluster cores too

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dtype;
pub mod error;
pub mod kernels;
pub mod ops;
pub mod runtime;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dtype::{DType, Element, FixedPoint};
    pub use crate::error::{Error, Result};
    pub use crate::kernels::{ClusterCore, Kernels, MatMut, MatRef, ScalarCore};
    pub use crate::ops::Glue;
    pub use crate::runtime::{ClusterConfig, CoreClass, CoreId, CoreQuery, FixedCore, HostCore};
}
