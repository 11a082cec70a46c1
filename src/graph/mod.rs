//! Graph traversal and path-finding operations
//!
//! Provides graph algorithms over adjacency mappings:
//! - BFS traversal in level order, with optional limits
//! - Fewest-hops path finding
//! - Shortest weighted paths with a FIFO or heap frontier
//! - Provider traits so plain `HashMap` adjacency works too

pub mod algos;
pub mod bfs;
pub mod document;
pub mod traversal;
pub mod types;

pub use algos::{
    bfs_traverse, breadth_first_search, shortest_costs, shortest_path, shortest_path_with,
};
pub use bfs::bfs_find_path;
pub use traversal::{GraphProvider, WeightedGraphProvider};
pub use types::{
    Cost, Frontier, Graph, PathOptions, PathResult, TraversalOptions, TraversalResult,
    WeightedGraph,
};
