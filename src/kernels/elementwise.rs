//! Strided elementwise kernels: add, sub, scale, copy, fill
//!
//! Every operation has a reference body (one row, one element at a time) and
//! a packed body built for the cluster core:
//!
//! - rows are processed in pairs, doubling the loads in flight,
//! - columns are processed four at a time with one [`Lanes4`] operation,
//! - the `N mod 4` tail is handled element by element, low index first,
//! - the stride gap is skipped with a step of `2 * stride - N` computed once.
//!
//! An odd trailing row gets a single-row pass with the same pack/tail split.
//! Both bodies write identical values; the gap between `cols` and `stride`
//! is never touched.

use super::simd::{LANES, Lanes4};
use super::view::{MatMut, MatRef};
use crate::dtype::Element;

// ---------------------------------------------------------------------------
// Loop skeletons
// ---------------------------------------------------------------------------

#[inline(always)]
fn zip_reference<T: Element>(
    a: MatRef<'_, T>,
    b: MatRef<'_, T>,
    mut dst: MatMut<'_, T>,
    f: impl Fn(T, T) -> T,
) {
    let (m, n) = dst.shape();
    let (sa, sb, sy) = (a.stride(), b.stride(), dst.stride());
    let (a, b, y) = (a.data(), b.data(), dst.data_mut());

    for i in 0..m {
        for j in 0..n {
            y[i * sy + j] = f(a[i * sa + j], b[i * sb + j]);
        }
    }
}

#[inline(always)]
fn zip_packed<T: Element>(
    a: MatRef<'_, T>,
    b: MatRef<'_, T>,
    mut dst: MatMut<'_, T>,
    pack: impl Fn(Lanes4<T>, Lanes4<T>) -> Lanes4<T>,
    one: impl Fn(T, T) -> T,
) {
    let (m, n) = dst.shape();
    if m == 0 || n == 0 {
        return;
    }
    let (sa, sb, sy) = (a.stride(), b.stride(), dst.stride());
    let (a, b, y) = (a.data(), b.data(), dst.data_mut());

    let n_iter = n / LANES;
    let n_rem = n % LANES;

    // From the end of row m to the start of row m + 2
    let step_a = (2 * sa).wrapping_sub(n);
    let step_b = (2 * sb).wrapping_sub(n);
    let step_y = (2 * sy).wrapping_sub(n);

    let (mut ia, mut ib, mut iy) = (0usize, 0usize, 0usize);

    for _ in 0..m / 2 {
        for _ in 0..n_iter {
            let r0 = pack(Lanes4::load(&a[ia..]), Lanes4::load(&b[ib..]));
            let r1 = pack(Lanes4::load(&a[ia + sa..]), Lanes4::load(&b[ib + sb..]));
            r0.store(&mut y[iy..]);
            r1.store(&mut y[iy + sy..]);
            ia += LANES;
            ib += LANES;
            iy += LANES;
        }
        for _ in 0..n_rem {
            y[iy] = one(a[ia], b[ib]);
            y[iy + sy] = one(a[ia + sa], b[ib + sb]);
            ia += 1;
            ib += 1;
            iy += 1;
        }
        ia = ia.wrapping_add(step_a);
        ib = ib.wrapping_add(step_b);
        iy = iy.wrapping_add(step_y);
    }

    if m % 2 == 1 {
        for _ in 0..n_iter {
            pack(Lanes4::load(&a[ia..]), Lanes4::load(&b[ib..])).store(&mut y[iy..]);
            ia += LANES;
            ib += LANES;
            iy += LANES;
        }
        for _ in 0..n_rem {
            y[iy] = one(a[ia], b[ib]);
            ia += 1;
            ib += 1;
            iy += 1;
        }
    }
}

#[inline(always)]
fn map_reference<T: Element>(src: MatRef<'_, T>, mut dst: MatMut<'_, T>, f: impl Fn(T) -> T) {
    let (m, n) = dst.shape();
    let (ss, sy) = (src.stride(), dst.stride());
    let (s, y) = (src.data(), dst.data_mut());

    for i in 0..m {
        for j in 0..n {
            y[i * sy + j] = f(s[i * ss + j]);
        }
    }
}

#[inline(always)]
fn map_packed<T: Element>(
    src: MatRef<'_, T>,
    mut dst: MatMut<'_, T>,
    pack: impl Fn(Lanes4<T>) -> Lanes4<T>,
    one: impl Fn(T) -> T,
) {
    let (m, n) = dst.shape();
    if m == 0 || n == 0 {
        return;
    }
    let (ss, sy) = (src.stride(), dst.stride());
    let (s, y) = (src.data(), dst.data_mut());

    let n_iter = n / LANES;
    let n_rem = n % LANES;
    let step_s = (2 * ss).wrapping_sub(n);
    let step_y = (2 * sy).wrapping_sub(n);

    let (mut is, mut iy) = (0usize, 0usize);

    for _ in 0..m / 2 {
        for _ in 0..n_iter {
            let r0 = pack(Lanes4::load(&s[is..]));
            let r1 = pack(Lanes4::load(&s[is + ss..]));
            r0.store(&mut y[iy..]);
            r1.store(&mut y[iy + sy..]);
            is += LANES;
            iy += LANES;
        }
        for _ in 0..n_rem {
            y[iy] = one(s[is]);
            y[iy + sy] = one(s[is + ss]);
            is += 1;
            iy += 1;
        }
        is = is.wrapping_add(step_s);
        iy = iy.wrapping_add(step_y);
    }

    if m % 2 == 1 {
        for _ in 0..n_iter {
            pack(Lanes4::load(&s[is..])).store(&mut y[iy..]);
            is += LANES;
            iy += LANES;
        }
        for _ in 0..n_rem {
            y[iy] = one(s[is]);
            is += 1;
            iy += 1;
        }
    }
}

// ---------------------------------------------------------------------------
// Add / sub
// ---------------------------------------------------------------------------

/// `dst = a + b`, one element at a time
pub fn mat_add_stride_reference<T: Element>(
    a: MatRef<'_, T>,
    b: MatRef<'_, T>,
    dst: MatMut<'_, T>,
) {
    zip_reference(a, b, dst, T::add_wrapping);
}

/// `dst = a + b`, row pairs and 4-lane packs
pub fn mat_add_stride_packed<T: Element>(a: MatRef<'_, T>, b: MatRef<'_, T>, dst: MatMut<'_, T>) {
    zip_packed(a, b, dst, Lanes4::add, T::add_wrapping);
}

/// `dst = a - b`, one element at a time
pub fn mat_sub_stride_reference<T: Element>(
    a: MatRef<'_, T>,
    b: MatRef<'_, T>,
    dst: MatMut<'_, T>,
) {
    zip_reference(a, b, dst, T::sub_wrapping);
}

/// `dst = a - b`, row pairs and 4-lane packs
pub fn mat_sub_stride_packed<T: Element>(a: MatRef<'_, T>, b: MatRef<'_, T>, dst: MatMut<'_, T>) {
    zip_packed(a, b, dst, Lanes4::sub, T::sub_wrapping);
}

// ---------------------------------------------------------------------------
// Scale / copy / fill
// ---------------------------------------------------------------------------

/// `dst = (src * factor) >> shift`, one element at a time
pub fn mat_scale_stride_reference<T: Element>(
    src: MatRef<'_, T>,
    factor: T,
    shift: u32,
    dst: MatMut<'_, T>,
) {
    map_reference(src, dst, |x| x.scale(factor, shift));
}

/// `dst = (src * factor) >> shift`, row pairs and 4-lane packs
pub fn mat_scale_stride_packed<T: Element>(
    src: MatRef<'_, T>,
    factor: T,
    shift: u32,
    dst: MatMut<'_, T>,
) {
    map_packed(
        src,
        dst,
        |p| p.scale(factor, shift),
        |x| x.scale(factor, shift),
    );
}

/// `dst = src`, one element at a time
pub fn mat_copy_stride_reference<T: Element>(src: MatRef<'_, T>, dst: MatMut<'_, T>) {
    map_reference(src, dst, |x| x);
}

/// `dst = src`, row pairs and 4-lane packs
pub fn mat_copy_stride_packed<T: Element>(src: MatRef<'_, T>, dst: MatMut<'_, T>) {
    map_packed(src, dst, |p| p, |x| x);
}

/// `dst = value`, one element at a time
pub fn mat_fill_stride_reference<T: Element>(value: T, mut dst: MatMut<'_, T>) {
    let (m, n) = dst.shape();
    let sy = dst.stride();
    let y = dst.data_mut();

    for i in 0..m {
        for j in 0..n {
            y[i * sy + j] = value;
        }
    }
}

/// `dst = value`, row pairs and 4-lane packed stores
pub fn mat_fill_stride_packed<T: Element>(value: T, mut dst: MatMut<'_, T>) {
    let (m, n) = dst.shape();
    if m == 0 || n == 0 {
        return;
    }
    let sy = dst.stride();
    let y = dst.data_mut();

    let pack = Lanes4::splat(value);
    let n_iter = n / LANES;
    let n_rem = n % LANES;
    let step_y = (2 * sy).wrapping_sub(n);
    let mut iy = 0usize;

    for _ in 0..m / 2 {
        for _ in 0..n_iter {
            pack.store(&mut y[iy..]);
            pack.store(&mut y[iy + sy..]);
            iy += LANES;
        }
        for _ in 0..n_rem {
            y[iy] = value;
            y[iy + sy] = value;
            iy += 1;
        }
        iy = iy.wrapping_add(step_y);
    }

    if m % 2 == 1 {
        for _ in 0..n_iter {
            pack.store(&mut y[iy..]);
            iy += LANES;
        }
        for _ in 0..n_rem {
            y[iy] = value;
            iy += 1;
        }
    }
}
