//! Accumulator arithmetic for products and sums

use std::fmt::Debug;

/// Running-sum type used by dot products and matrix products
///
/// 8- and 16-bit storage accumulates in `i64` and 32-bit storage in `i128`,
/// so a block of at least 2^31 full-scale products fits before the sum can
/// wrap. Floats accumulate in `f32`, in index order, so every kernel variant
/// rounds identically.
pub trait Accumulator: Copy + Send + Sync + PartialEq + Debug + 'static {
    /// Additive identity
    const ZERO: Self;

    /// `self + a * b`
    fn mac(self, a: Self, b: Self) -> Self;

    /// `self - a * b`
    fn msu(self, a: Self, b: Self) -> Self;

    /// `self + rhs`
    fn add(self, rhs: Self) -> Self;

    /// `self * rhs`
    fn mul(self, rhs: Self) -> Self;

    /// Re-normalize the binary point: arithmetic right shift for integers,
    /// identity for floats.
    fn shr(self, shift: u32) -> Self;
}

macro_rules! impl_integer_accumulator {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Accumulator for $ty {
                const ZERO: Self = 0;

                #[inline(always)]
                fn mac(self, a: Self, b: Self) -> Self {
                    self.wrapping_add(a.wrapping_mul(b))
                }

                #[inline(always)]
                fn msu(self, a: Self, b: Self) -> Self {
                    self.wrapping_sub(a.wrapping_mul(b))
                }

                #[inline(always)]
                fn add(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline(always)]
                fn mul(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }

                #[inline(always)]
                fn shr(self, shift: u32) -> Self {
                    // A count of BITS or more would overflow; BITS - 1 already
                    // saturates to the sign.
                    self >> shift.min(<$ty>::BITS - 1)
                }
            }
        )*
    };
}

impl_integer_accumulator!(i64, i128);

impl Accumulator for f32 {
    const ZERO: Self = 0.0;

    #[inline(always)]
    fn mac(self, a: Self, b: Self) -> Self {
        self + a * b
    }

    #[inline(always)]
    fn msu(self, a: Self, b: Self) -> Self {
        self - a * b
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline(always)]
    fn shr(self, _shift: u32) -> Self {
        self
    }
}
