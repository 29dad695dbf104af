//! Element types supported by the kernels
//!
//! The library works on three numeric representations at three precisions:
//! floating point (`f32`), integer (`i32`, `i16`, `i8`) and fixed point
//! (`q32`, `q16`, `q8`). Fixed-point values share the integer storage types;
//! their binary point is never stored, it travels with each call as a
//! `shift` / `deci_point` argument.

mod accumulator;
mod element;

pub use accumulator::Accumulator;
pub use element::{Element, FixedPoint};

use std::fmt;

/// Storage type of a kernel operand
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DType {
    /// 32-bit IEEE float
    F32,
    /// 32-bit two's-complement storage (`i32` / `q32`)
    I32,
    /// 16-bit two's-complement storage (`i16` / `q16`)
    I16,
    /// 8-bit two's-complement storage (`i8` / `q8`)
    I8,
}

impl DType {
    /// Short name used in the platform naming scheme
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::F32 => "f32",
            Self::I32 => "i32",
            Self::I16 => "i16",
            Self::I8 => "i8",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
