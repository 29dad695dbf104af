//! Dispatch layer
//!
//! [`Glue`] is the single place that asks "which core am I?". Each operation
//! queries the [`CoreQuery`] exactly once and forwards to the scalar kernel
//! set on the fabric controller or to the cluster kernel set anywhere else:
//!
//! ```text
//! caller ──► Glue::op ──► CoreQuery::core_class()
//!                          ├── FabricController ──► S: Kernels<T> (ScalarCore)
//!                          └── Cluster          ──► C: Kernels<T> (ClusterCore)
//! ```
//!
//! - [`glue`]: typed entry points in the flat platform calling convention
//! - [`checked`]: validating wrappers returning [`crate::error::Result`]
//! - `parallel`: fork-join variants over a cluster (feature `parallel`)

pub mod checked;
pub mod glue;
#[cfg(feature = "parallel")]
pub mod parallel;

use crate::dtype::Element;
use crate::kernels::{ClusterCore, Kernels, MatMut, MatRef, ScalarCore};
use crate::runtime::{CoreClass, CoreQuery, HostCore};

/// Core-class dispatcher over two kernel sets
///
/// The kernel sets are chosen at compile time through the type parameters;
/// only the core class is observed at run time.
#[derive(Copy, Clone, Debug, Default)]
pub struct Glue<Q = HostCore, S = ScalarCore, C = ClusterCore> {
    query: Q,
    scalar: S,
    cluster: C,
}

impl Glue {
    /// Dispatcher over the built-in kernel sets, asking the hardware
    #[inline]
    pub const fn host() -> Self {
        Self {
            query: HostCore,
            scalar: ScalarCore,
            cluster: ClusterCore,
        }
    }
}

impl<Q: CoreQuery, S, C> Glue<Q, S, C> {
    /// Dispatcher with an injected core query and kernel sets
    #[inline]
    pub const fn new(query: Q, scalar: S, cluster: C) -> Self {
        Self {
            query,
            scalar,
            cluster,
        }
    }

    /// Class of the calling core, as the next operation would see it
    #[inline]
    pub fn core_class(&self) -> CoreClass {
        self.query.core_class()
    }
}

/// Query once, log, forward to the kernel set for the observed class
macro_rules! route {
    ($self:ident, $op:ident($($arg:expr),* $(,)?)) => {{
        let class = $self.query.core_class();
        log::trace!(
            target: "dspcore::glue",
            "{} {} -> {}",
            stringify!($op),
            T::DTYPE,
            class
        );
        match class {
            CoreClass::FabricController => $self.scalar.$op($($arg),*),
            CoreClass::Cluster => $self.cluster.$op($($arg),*),
        }
    }};
}

impl<T, Q, S, C> Kernels<T> for Glue<Q, S, C>
where
    T: Element,
    Q: CoreQuery,
    S: Kernels<T>,
    C: Kernels<T>,
{
    fn mat_add_stride(&self, a: MatRef<'_, T>, b: MatRef<'_, T>, dst: MatMut<'_, T>) {
        route!(self, mat_add_stride(a, b, dst))
    }

    fn mat_sub_stride(&self, a: MatRef<'_, T>, b: MatRef<'_, T>, dst: MatMut<'_, T>) {
        route!(self, mat_sub_stride(a, b, dst))
    }

    fn mat_scale_stride(&self, src: MatRef<'_, T>, factor: T, shift: u32, dst: MatMut<'_, T>) {
        route!(self, mat_scale_stride(src, factor, shift, dst))
    }

    fn mat_copy_stride(&self, src: MatRef<'_, T>, dst: MatMut<'_, T>) {
        route!(self, mat_copy_stride(src, dst))
    }

    fn mat_fill_stride(&self, value: T, dst: MatMut<'_, T>) {
        route!(self, mat_fill_stride(value, dst))
    }

    fn dot_prod_acc(&self, a: &[T], b: &[T]) -> T::Acc {
        route!(self, dot_prod_acc(a, b))
    }

    fn dot_prod(&self, a: &[T], b: &[T], deci_point: u32) -> T::Wide {
        route!(self, dot_prod(a, b, deci_point))
    }

    fn min(&self, src: &[T]) -> T {
        route!(self, min(src))
    }

    fn max(&self, src: &[T]) -> T {
        route!(self, max(src))
    }

    fn mat_mult_stride(&self, a: MatRef<'_, T>, b: MatRef<'_, T>, dst: MatMut<'_, T::Wide>) {
        route!(self, mat_mult_stride(a, b, dst))
    }

    fn mat_mult_stride_q(
        &self,
        a: MatRef<'_, T>,
        b: MatRef<'_, T>,
        shift: u32,
        dst: MatMut<'_, T>,
    ) {
        route!(self, mat_mult_stride_q(a, b, shift, dst))
    }

    fn mat_mult_trans_cmplx_stride(
        &self,
        a: MatRef<'_, T>,
        b: MatRef<'_, T>,
        dst: MatMut<'_, T::Wide>,
    ) {
        route!(self, mat_mult_trans_cmplx_stride(a, b, dst))
    }

    fn mat_mult_trans_cmplx_stride_q(
        &self,
        a: MatRef<'_, T>,
        b: MatRef<'_, T>,
        shift: u32,
        dst: MatMut<'_, T>,
    ) {
        route!(self, mat_mult_trans_cmplx_stride_q(a, b, shift, dst))
    }
}
