//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `bfs`: Breadth-first search for level-order traversal
//! - `dijkstra`: Weighted shortest path finding
//! - `shared`: Common utilities used by multiple algorithms

pub mod bfs;
pub mod dijkstra;
pub mod shared;

pub use bfs::{bfs_traverse, breadth_first_search};
pub use dijkstra::{shortest_costs, shortest_path, shortest_path_with};
pub use shared::reconstruct_path;
