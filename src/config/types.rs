//! Configuration type definitions

use crate::graph::types::{Frontier, PathOptions};
use serde::{Deserialize, Serialize};

/// Current configuration format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Default minimum sublist length handed to rayon by the parallel quicksort
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 2048;

/// Algorithm configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgoConfig {
    /// Config format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Sorting configuration
    #[serde(default)]
    pub sort: SortConfig,

    /// Graph algorithm configuration
    #[serde(default)]
    pub graph: GraphConfig,
}

/// Configuration for the sorting routines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortConfig {
    /// Sublists shorter than this are sorted sequentially by `par_quicksort`
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

impl SortConfig {
    /// Run [`crate::sort::par_quicksort`] with the configured threshold
    pub fn par_quicksort<T>(&self, seq: &[T]) -> Vec<T>
    where
        T: PartialOrd + Clone + Send + Sync,
    {
        crate::sort::par_quicksort(seq, self.parallel_threshold)
    }
}

/// Configuration for shortest-path computation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Frontier strategy used by `shortest_path_with`
    #[serde(default)]
    pub frontier: Frontier,
}

impl GraphConfig {
    /// Options for the shortest-path functions
    pub fn path_options(&self) -> PathOptions {
        PathOptions {
            frontier: self.frontier,
        }
    }
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_parallel_threshold() -> usize {
    DEFAULT_PARALLEL_THRESHOLD
}

impl Default for AlgoConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_FORMAT_VERSION,
            sort: SortConfig::default(),
            graph: GraphConfig::default(),
        }
    }
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}
