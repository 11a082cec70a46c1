use crate::graph::types::{Graph, WeightedGraph};
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Trait for providing unweighted adjacency
pub trait GraphProvider<N> {
    /// Neighbors of `node` in adjacency order. Unknown nodes have none.
    fn neighbors(&self, node: &N) -> &[N];
}

/// Trait for providing weighted adjacency
pub trait WeightedGraphProvider<N> {
    /// `(neighbor, weight)` pairs of `node`. Unknown nodes have none.
    fn edges(&self, node: &N) -> &[(N, f64)];
}

impl<N: Eq + Hash + Clone> GraphProvider<N> for Graph<N> {
    fn neighbors(&self, node: &N) -> &[N] {
        Graph::neighbors(self, node)
    }
}

impl<N: Eq + Hash, S: BuildHasher> GraphProvider<N> for HashMap<N, Vec<N>, S> {
    fn neighbors(&self, node: &N) -> &[N] {
        self.get(node).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl<N: Eq + Hash + Clone> WeightedGraphProvider<N> for WeightedGraph<N> {
    fn edges(&self, node: &N) -> &[(N, f64)] {
        WeightedGraph::edges(self, node)
    }
}

impl<N: Eq + Hash, S: BuildHasher> WeightedGraphProvider<N> for HashMap<N, Vec<(N, f64)>, S> {
    fn edges(&self, node: &N) -> &[(N, f64)] {
        self.get(node).map(Vec::as_slice).unwrap_or(&[])
    }
}
