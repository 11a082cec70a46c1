//! Algokit
//!
//! Classic algorithms as independent, stateless functions: ordering checks,
//! selection sort and quicksort, binary search, breadth-first search and
//! single-source shortest paths.

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod order;
pub mod search;
pub mod sort;

pub use error::{AlgoError, Result};
pub use graph::{
    bfs_find_path, bfs_traverse, breadth_first_search, shortest_path, shortest_path_with, Graph,
    PathResult, WeightedGraph,
};
pub use order::{find_minimum, is_ordered, reverse};
pub use search::binary_search;
pub use sort::{par_quicksort, quicksort, selection_sort};
