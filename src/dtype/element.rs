//! Element trait for mapping Rust storage types to kernel arithmetic

use super::{Accumulator, DType};
use bytemuck::{Pod, Zeroable};
use num_traits::Bounded;
use std::fmt::Debug;

/// Trait for types that can be kernel operands
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - Basic trait requirements
/// - `Pod + Zeroable` - Plain-old-data storage (bytemuck)
/// - `Bounded` - `max_value()` / `min_value()` seed the min/max reductions
/// - `PartialOrd` - Comparison for min/max reductions
///
/// # Overflow policy
/// Elementwise operations stay at the storage width and wrap (integers) or
/// round per IEEE (float); nothing saturates. Products are accumulated in
/// [`Element::Acc`] and only truncated when written back.
pub trait Element:
    Copy + Send + Sync + Pod + Zeroable + Bounded + PartialOrd + Debug + 'static
{
    /// Storage type tag
    const DTYPE: DType;

    /// Accumulator for sums of products
    type Acc: Accumulator;

    /// Widened result of dot products and integer matrix products
    type Wide: Copy + Send + Sync + Pod + PartialEq + Debug + 'static;

    /// `self + rhs` at the storage width
    fn add_wrapping(self, rhs: Self) -> Self;

    /// `self - rhs` at the storage width
    fn sub_wrapping(self, rhs: Self) -> Self;

    /// Lossless conversion into the accumulator
    fn widen(self) -> Self::Acc;

    /// Truncate an accumulator back to the storage width
    fn narrow(acc: Self::Acc) -> Self;

    /// Truncate an accumulator to the widened result type
    fn to_wide(acc: Self::Acc) -> Self::Wide;

    /// Fixed-point scaling: `narrow((self * factor) >> shift)`
    #[inline(always)]
    fn scale(self, factor: Self, shift: u32) -> Self {
        Self::narrow(self.widen().mul(factor.widen()).shr(shift))
    }
}

/// Integer storage types, which also carry the fixed-point formats
///
/// Their accumulation is exact, so partial sums computed on different cores
/// recombine to the single-core result bit for bit.
pub trait FixedPoint: Element<Wide = i32> {}

macro_rules! impl_integer_element {
    ($($ty:ty => ($dtype:ident, $acc:ty)),* $(,)?) => {
        $(
            impl Element for $ty {
                const DTYPE: DType = DType::$dtype;

                type Acc = $acc;
                type Wide = i32;

                #[inline(always)]
                fn add_wrapping(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline(always)]
                fn sub_wrapping(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }

                #[inline(always)]
                fn widen(self) -> $acc {
                    self as $acc
                }

                #[inline(always)]
                fn narrow(acc: $acc) -> Self {
                    acc as $ty
                }

                #[inline(always)]
                fn to_wide(acc: $acc) -> i32 {
                    acc as i32
                }
            }

            impl FixedPoint for $ty {}
        )*
    };
}

impl_integer_element!(i32 => (I32, i128), i16 => (I16, i64), i8 => (I8, i64));

impl Element for f32 {
    const DTYPE: DType = DType::F32;

    type Acc = f32;
    type Wide = f32;

    #[inline(always)]
    fn add_wrapping(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline(always)]
    fn sub_wrapping(self, rhs: Self) -> Self {
        self - rhs
    }

    #[inline(always)]
    fn widen(self) -> f32 {
        self
    }

    #[inline(always)]
    fn narrow(acc: f32) -> Self {
        acc
    }

    #[inline(always)]
    fn to_wide(acc: f32) -> f32 {
        acc
    }
}
