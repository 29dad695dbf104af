//! Dot product kernels
//!
//! Both bodies return the full-width accumulator; the fixed-point shift is
//! applied once by the caller after accumulation (see
//! [`Kernels::dot_prod`](super::Kernels::dot_prod)), never per term.

use super::simd::{LANES, Lanes4};
use crate::dtype::{Accumulator, Element};

/// `Σ a[i] * b[i]`, one product at a time
///
/// `b` must hold at least `a.len()` elements.
pub fn dot_prod_reference<T: Element>(a: &[T], b: &[T]) -> T::Acc {
    let mut sum = T::Acc::ZERO;
    for (&x, &y) in a.iter().zip(&b[..a.len()]) {
        sum = sum.mac(x.widen(), y.widen());
    }
    sum
}

/// `Σ a[i] * b[i]`, four products per packed step
///
/// Products are accumulated in index order into a single accumulator, so
/// float results round exactly like [`dot_prod_reference`].
pub fn dot_prod_packed<T: Element>(a: &[T], b: &[T]) -> T::Acc {
    let b = &b[..a.len()];
    let mut sum = T::Acc::ZERO;

    let a_packs = a.chunks_exact(LANES);
    let b_packs = b.chunks_exact(LANES);
    let (a_tail, b_tail) = (a_packs.remainder(), b_packs.remainder());

    for (pa, pb) in a_packs.zip(b_packs) {
        sum = Lanes4::load(pa).dotp(Lanes4::load(pb), sum);
    }
    for (&x, &y) in a_tail.iter().zip(b_tail) {
        sum = sum.mac(x.widen(), y.widen());
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::testing::{random_vec, seeded_rng};

    #[test]
    fn test_dot_prod_scenario() {
        let a = [1i32, 2, 3];
        let b = [4i32, 5, 6];
        assert_eq!(dot_prod_reference(&a, &b), 32);
        assert_eq!(dot_prod_packed(&a, &b), 32);
    }

    #[test]
    fn test_no_intermediate_overflow() {
        // 1000 products of i16::MIN * i16::MIN overflow i32 many times over
        let a = vec![i16::MIN; 1000];
        let expected = 1000 * (1i64 << 30);
        assert_eq!(dot_prod_reference(&a, &a), expected);
        assert_eq!(dot_prod_packed(&a, &a), expected);

        let big = [i32::MAX, i32::MAX];
        assert_eq!(dot_prod_packed(&big, &big), 2 * (i32::MAX as i128).pow(2));

        // Eight full-scale q31 products already exceed i64
        let full = [i32::MIN; 8];
        assert_eq!(dot_prod_reference(&full, &full), 1i128 << 65);
        assert_eq!(dot_prod_packed(&full, &full), 1i128 << 65);
    }

    #[test]
    fn test_paths_agree() {
        let mut rng = seeded_rng(21);
        for len in 0..37 {
            let a = random_vec::<i8>(&mut rng, len);
            let b = random_vec::<i8>(&mut rng, len);
            assert_eq!(dot_prod_packed(&a, &b), dot_prod_reference(&a, &b));

            let a = random_vec::<f32>(&mut rng, len);
            let b = random_vec::<f32>(&mut rng, len);
            assert_eq!(
                dot_prod_packed(&a, &b).to_bits(),
                dot_prod_reference(&a, &b).to_bits(),
                "len={len}"
            );
        }
    }

    #[test]
    fn test_longer_b_is_truncated() {
        let a = [2i16, 3];
        let b = [5i16, 7, 100, 100, 100];
        assert_eq!(dot_prod_packed(&a, &b), 31);
        assert_eq!(dot_prod_reference(&a, &b), 31);
    }
}
