//! 4-lane packed arithmetic
//!
//! [`Lanes4`] models the cluster core's packed-SIMD register: four adjacent
//! elements processed by one instruction. Lane operations use exactly the
//! same element arithmetic as the scalar kernels, so packed and scalar paths
//! agree bit for bit.

use crate::dtype::{Accumulator, Element};

/// Number of lanes in a pack
pub const LANES: usize = 4;

/// Four adjacent elements
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(transparent)]
pub struct Lanes4<T>(pub [T; LANES]);

impl<T: Element> Lanes4<T> {
    /// Load the first four elements of `src`
    #[inline(always)]
    pub fn load(src: &[T]) -> Self {
        Self([src[0], src[1], src[2], src[3]])
    }

    /// Gather four elements `stride` apart, starting at `src[0]`
    #[inline(always)]
    pub fn gather(src: &[T], stride: usize) -> Self {
        Self([src[0], src[stride], src[2 * stride], src[3 * stride]])
    }

    /// All lanes set to `value`
    #[inline(always)]
    pub fn splat(value: T) -> Self {
        Self([value; LANES])
    }

    /// Store into the first four elements of `dst`
    #[inline(always)]
    pub fn store(self, dst: &mut [T]) {
        dst[..LANES].copy_from_slice(&self.0);
    }

    /// Lane-wise map
    #[inline(always)]
    pub fn map(self, f: impl Fn(T) -> T) -> Self {
        let [a, b, c, d] = self.0;
        Self([f(a), f(b), f(c), f(d)])
    }

    /// Lane-wise combination of two packs
    #[inline(always)]
    pub fn zip(self, other: Self, f: impl Fn(T, T) -> T) -> Self {
        let [a0, a1, a2, a3] = self.0;
        let [b0, b1, b2, b3] = other.0;
        Self([f(a0, b0), f(a1, b1), f(a2, b2), f(a3, b3)])
    }

    /// Packed add, wrapping at the storage width
    #[inline(always)]
    pub fn add(self, other: Self) -> Self {
        self.zip(other, T::add_wrapping)
    }

    /// Packed subtract, wrapping at the storage width
    #[inline(always)]
    pub fn sub(self, other: Self) -> Self {
        self.zip(other, T::sub_wrapping)
    }

    /// Packed fixed-point scale
    #[inline(always)]
    pub fn scale(self, factor: T, shift: u32) -> Self {
        self.map(|x| x.scale(factor, shift))
    }

    /// Sum-of-dot-product: `acc + Σ self[i] * other[i]`, lanes in index order
    #[inline(always)]
    pub fn dotp(self, other: Self, acc: T::Acc) -> T::Acc {
        let [a0, a1, a2, a3] = self.0;
        let [b0, b1, b2, b3] = other.0;
        acc.mac(a0.widen(), b0.widen())
            .mac(a1.widen(), b1.widen())
            .mac(a2.widen(), b2.widen())
            .mac(a3.widen(), b3.widen())
    }
}
