use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

/// Accumulated cost of a path.
/// Edge weights are expected to be non-negative; nothing here enforces it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);
    pub const INFINITY: Cost = Cost(f64::INFINITY);

    pub fn new(cost: f64) -> Self {
        Cost(cost)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Total order over costs, usable as a heap key
    pub fn total_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Default for Cost {
    fn default() -> Self {
        Self::INFINITY
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost(self.0 + other.0)
    }
}

impl From<f64> for Cost {
    fn from(cost: f64) -> Self {
        Cost(cost)
    }
}

/// Frontier strategy for shortest-path relaxation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frontier {
    /// FIFO work queue; a node may be relaxed and re-queued many times
    Fifo,
    #[default]
    /// Binary min-heap keyed by accumulated cost
    Heap,
}

impl std::str::FromStr for Frontier {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fifo" => Ok(Frontier::Fifo),
            "heap" => Ok(Frontier::Heap),
            other => Err(format!(
                "unknown frontier '{}' (expected: fifo, heap)",
                other
            )),
        }
    }
}

/// Options for shortest-path computation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathOptions {
    pub frontier: Frontier,
}

/// Options for breadth-first traversal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraversalOptions {
    /// Do not expand nodes at this depth (start is depth 0)
    pub max_depth: Option<usize>,
    /// Maximum nodes to visit
    pub max_nodes: Option<usize>,
}

/// Breadth-first traversal output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraversalResult<N> {
    pub start: N,
    /// Nodes in visitation order
    pub order: Vec<N>,
    /// Depth of each node in `order`, index for index
    pub depths: Vec<usize>,
    pub truncated: bool,
    pub truncation_reason: Option<String>,
}

/// Minimum-cost path from a start node to a target node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult<N> {
    pub cost: f64,
    /// Nodes from start to target, both inclusive
    pub path: Vec<N>,
}

impl<N> PathResult<N> {
    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Unweighted directed graph as an adjacency mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "N: Serialize",
    deserialize = "N: Deserialize<'de> + Eq + Hash"
))]
pub struct Graph<N: Eq + Hash> {
    adjacency: HashMap<N, Vec<N>>,
}

impl<N: Eq + Hash + Clone> Graph<N> {
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Add a node with no neighbors; existing neighbors are kept
    pub fn add_node(&mut self, node: N) {
        self.adjacency.entry(node).or_default();
    }

    /// Append `to` to the neighbors of `from`, registering both nodes
    pub fn add_edge(&mut self, from: N, to: N) {
        self.adjacency.entry(to.clone()).or_default();
        self.adjacency.entry(from).or_default().push(to);
    }

    pub fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Neighbors of `node` in insertion order; empty for unknown nodes
    pub fn neighbors(&self, node: &N) -> &[N] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

impl<N: Eq + Hash + Clone> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Eq + Hash> From<HashMap<N, Vec<N>>> for Graph<N> {
    fn from(adjacency: HashMap<N, Vec<N>>) -> Self {
        Self { adjacency }
    }
}

impl<N: Eq + Hash> FromIterator<(N, Vec<N>)> for Graph<N> {
    fn from_iter<I: IntoIterator<Item = (N, Vec<N>)>>(iter: I) -> Self {
        Self {
            adjacency: iter.into_iter().collect(),
        }
    }
}

/// Weighted directed graph as an adjacency mapping of `(neighbor, weight)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "N: Serialize",
    deserialize = "N: Deserialize<'de> + Eq + Hash"
))]
pub struct WeightedGraph<N: Eq + Hash> {
    adjacency: HashMap<N, Vec<(N, f64)>>,
}

impl<N: Eq + Hash + Clone> WeightedGraph<N> {
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    pub fn add_node(&mut self, node: N) {
        self.adjacency.entry(node).or_default();
    }

    pub fn add_edge(&mut self, from: N, to: N, weight: f64) {
        self.adjacency.entry(to.clone()).or_default();
        self.adjacency.entry(from).or_default().push((to, weight));
    }

    pub fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    pub fn edges(&self, node: &N) -> &[(N, f64)] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Whether any edge carries a negative weight.
    /// Shortest-path results are unspecified for such graphs.
    pub fn has_negative_weight(&self) -> bool {
        self.adjacency
            .values()
            .flatten()
            .any(|(_, weight)| *weight < 0.0)
    }
}

impl<N: Eq + Hash + Clone> Default for WeightedGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Eq + Hash> From<HashMap<N, Vec<(N, f64)>>> for WeightedGraph<N> {
    fn from(adjacency: HashMap<N, Vec<(N, f64)>>) -> Self {
        Self { adjacency }
    }
}

impl<N: Eq + Hash> FromIterator<(N, Vec<(N, f64)>)> for WeightedGraph<N> {
    fn from_iter<I: IntoIterator<Item = (N, Vec<(N, f64)>)>>(iter: I) -> Self {
        Self {
            adjacency: iter.into_iter().collect(),
        }
    }
}
