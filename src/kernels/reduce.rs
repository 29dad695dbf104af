//! Min / max reductions
//!
//! The running value starts at the type's extreme (`max_value()` for min,
//! `min_value()` for max), so an empty block returns that extreme. Only the
//! value is returned, never an index.

use crate::dtype::Element;

/// Smallest element, one comparison per element
pub fn min_reference<T: Element>(src: &[T]) -> T {
    let mut min = T::max_value();
    for &x in src {
        if x < min {
            min = x;
        }
    }
    min
}

/// Smallest element, two elements per iteration
///
/// Each pair costs at most two comparisons: `x1` is only tested against `x2`
/// when it already beats the running minimum.
pub fn min_unrolled<T: Element>(src: &[T]) -> T {
    let mut min = T::max_value();
    let mut pairs = src.chunks_exact(2);

    for pair in &mut pairs {
        let (x1, x2) = (pair[0], pair[1]);
        if x1 < min {
            min = if x2 < x1 { x2 } else { x1 };
        } else if x2 < min {
            min = x2;
        }
    }

    if let &[x] = pairs.remainder() {
        if x < min {
            min = x;
        }
    }
    min
}

/// Largest element, one comparison per element
pub fn max_reference<T: Element>(src: &[T]) -> T {
    let mut max = T::min_value();
    for &x in src {
        if x > max {
            max = x;
        }
    }
    max
}

/// Largest element, two elements per iteration
pub fn max_unrolled<T: Element>(src: &[T]) -> T {
    let mut max = T::min_value();
    let mut pairs = src.chunks_exact(2);

    for pair in &mut pairs {
        let (x1, x2) = (pair[0], pair[1]);
        if x1 > max {
            max = if x2 > x1 { x2 } else { x1 };
        } else if x2 > max {
            max = x2;
        }
    }

    if let &[x] = pairs.remainder() {
        if x > max {
            max = x;
        }
    }
    max
}
