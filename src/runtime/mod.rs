//! Core identity and cluster runtime
//!
//! The platform has two classes of execution unit: a general-purpose
//! fabric controller (FC) and a cluster of SIMD-capable cores. Every glue
//! call asks "which cluster am I on?" through a [`CoreQuery`] and picks the
//! kernel set for that class.
//!
//! ```text
//! CoreQuery (opaque capability query)
//! ├── HostCore   reads mhartid on riscv32, thread identity elsewhere
//! └── FixedCore  always answers the same cluster id (tests, simulators)
//! ```

pub mod cluster;

pub use cluster::{ClusterConfig, MAX_CLUSTER_CORES};

#[cfg(not(target_arch = "riscv32"))]
use std::cell::Cell;
use std::fmt;

/// Cluster id reported by the fabric controller
pub const FC_CLUSTER_ID: u32 = 32;

/// Identity of one execution unit
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CoreId {
    /// Cluster the core belongs to (`FC_CLUSTER_ID` for the fabric controller)
    pub cluster: u32,
    /// Core index inside the cluster
    pub core: u32,
}

impl CoreId {
    /// The fabric controller
    pub const FABRIC_CONTROLLER: Self = Self {
        cluster: FC_CLUSTER_ID,
        core: 0,
    };

    /// Core `core` of cluster 0
    #[inline]
    pub const fn cluster_core(core: u32) -> Self {
        Self { cluster: 0, core }
    }
}

/// Capability class of the calling core
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CoreClass {
    /// General-purpose scalar core: plain RV32IM kernels
    FabricController,
    /// Cluster core with packed-SIMD and hardware-loop extensions
    Cluster,
}

impl CoreClass {
    /// Classify a cluster id. Only the fabric controller id is special;
    /// every other id is a cluster core.
    #[inline]
    pub const fn of(cluster_id: u32) -> Self {
        if cluster_id == FC_CLUSTER_ID {
            Self::FabricController
        } else {
            Self::Cluster
        }
    }

    /// Returns the name of this class as a string
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FabricController => "fabric-controller",
            Self::Cluster => "cluster",
        }
    }
}

impl fmt::Display for CoreClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque "which core am I" query
///
/// Implementations must be side-effect free and O(1); the glue layer calls
/// [`CoreQuery::cluster_id`] exactly once per operation and never caches it.
pub trait CoreQuery {
    /// Cluster id of the calling core
    fn cluster_id(&self) -> u32;

    /// Class of the calling core
    #[inline]
    fn core_class(&self) -> CoreClass {
        CoreClass::of(self.cluster_id())
    }
}

impl<Q: CoreQuery + ?Sized> CoreQuery for &Q {
    #[inline]
    fn cluster_id(&self) -> u32 {
        (**self).cluster_id()
    }
}

/// Query answered by the hardware (or the emulated thread identity)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HostCore;

impl CoreQuery for HostCore {
    #[inline]
    fn cluster_id(&self) -> u32 {
        current_core().cluster
    }
}

/// Query that always reports the same cluster id
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FixedCore(pub u32);

impl FixedCore {
    /// Pretend to be the fabric controller
    pub const FABRIC_CONTROLLER: Self = Self(FC_CLUSTER_ID);

    /// Pretend to be a core of cluster 0
    pub const CLUSTER: Self = Self(0);
}

impl CoreQuery for FixedCore {
    #[inline]
    fn cluster_id(&self) -> u32 {
        self.0
    }
}

// ---------------------------------------------------------------------------
// Identity of the calling core
// ---------------------------------------------------------------------------

/// Identity of the calling core, read from `mhartid`
#[cfg(target_arch = "riscv32")]
#[inline]
pub fn current_core() -> CoreId {
    let hartid: u32;
    // SAFETY: reading mhartid has no side effects; kernels run in M-mode.
    unsafe {
        core::arch::asm!("csrr {0}, mhartid", out(reg) hartid, options(nomem, nostack));
    }
    CoreId {
        cluster: (hartid >> 5) & 0x3f,
        core: hartid & 0x1f,
    }
}

#[cfg(not(target_arch = "riscv32"))]
thread_local! {
    static CURRENT_CORE: Cell<CoreId> = const { Cell::new(CoreId::FABRIC_CONTROLLER) };
}

/// Identity of the calling core
///
/// Off-target, every thread starts out as the fabric controller; the parallel
/// runtime and [`with_core`] assign cluster identities.
#[cfg(not(target_arch = "riscv32"))]
#[inline]
pub fn current_core() -> CoreId {
    CURRENT_CORE.with(Cell::get)
}

/// Run `f` with the calling thread posing as core `id`
///
/// The previous identity is restored when `f` returns or unwinds. On riscv32
/// the identity is fixed by hardware and `f` runs unchanged.
pub fn with_core<R>(id: CoreId, f: impl FnOnce() -> R) -> R {
    #[cfg(not(target_arch = "riscv32"))]
    {
        struct Restore(CoreId);

        impl Drop for Restore {
            fn drop(&mut self) {
                CURRENT_CORE.with(|c| c.set(self.0));
            }
        }

        let _restore = Restore(CURRENT_CORE.with(|c| c.replace(id)));
        f()
    }

    #[cfg(target_arch = "riscv32")]
    {
        let _ = id;
        f()
    }
}
