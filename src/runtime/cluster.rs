//! Cluster configuration and static work partitioning

use crate::error::{Error, Result};
use std::ops::Range;

/// Largest number of cores a cluster can have
pub const MAX_CLUSTER_CORES: usize = 16;

/// Default number of cluster cores
const DEFAULT_CLUSTER_CORES: usize = 8;

/// Configuration of the fork-join (`p`) kernel variants
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ClusterConfig {
    cores: usize,
}

impl ClusterConfig {
    /// Create a configuration for `cores` cluster cores
    ///
    /// # Errors
    /// Returns [`Error::InvalidCoreCount`] when `cores` is zero or exceeds
    /// [`MAX_CLUSTER_CORES`].
    pub fn new(cores: usize) -> Result<Self> {
        if cores == 0 || cores > MAX_CLUSTER_CORES {
            return Err(Error::InvalidCoreCount {
                cores,
                max: MAX_CLUSTER_CORES,
            });
        }
        Ok(Self { cores })
    }

    /// Number of cores work is split across
    #[inline]
    pub const fn cores(&self) -> usize {
        self.cores
    }

    /// Statically partition `0..len` into contiguous, disjoint ranges
    ///
    /// Every core except possibly the last receives `ceil(len / cores)`
    /// indices; cores that would receive nothing are omitted.
    pub fn partition(&self, len: usize) -> impl Iterator<Item = Range<usize>> + '_ {
        let chunk = len.div_ceil(self.cores).max(1);
        (0..self.cores)
            .map(move |core| {
                let start = (core * chunk).min(len);
                let end = ((core + 1) * chunk).min(len);
                start..end
            })
            .filter(|range| !range.is_empty())
    }
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            cores: DEFAULT_CLUSTER_CORES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_core_counts() {
        assert_eq!(
            ClusterConfig::new(0),
            Err(Error::InvalidCoreCount { cores: 0, max: 16 })
        );
        assert!(ClusterConfig::new(17).is_err());
        assert_eq!(ClusterConfig::new(16).map(|c| c.cores()), Ok(16));
        assert_eq!(ClusterConfig::default().cores(), 8);
    }

    #[test]
    fn test_partition_covers_range_disjointly() {
        let config = ClusterConfig::new(4).unwrap();
        let parts: Vec<_> = config.partition(10).collect();
        assert_eq!(parts, vec![0..3, 3..6, 6..9, 9..10]);
    }

    #[test]
    fn test_partition_fewer_items_than_cores() {
        let config = ClusterConfig::new(8).unwrap();
        let parts: Vec<_> = config.partition(3).collect();
        assert_eq!(parts, vec![0..1, 1..2, 2..3]);
        assert_eq!(config.partition(0).count(), 0);
    }
}
