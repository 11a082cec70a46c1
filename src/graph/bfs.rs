use crate::graph::algos::shared::reconstruct_path;
use crate::graph::GraphProvider;
use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

/// Predecessor table from a breadth-first search that stops at `to`
fn bfs_search<N, G>(graph: &G, from: &N, to: &N) -> (bool, HashMap<N, N>)
where
    N: Eq + Hash + Clone,
    G: GraphProvider<N> + ?Sized,
{
    let mut visited: HashSet<N> = HashSet::new();
    let mut predecessors: HashMap<N, N> = HashMap::new();
    let mut queue: VecDeque<N> = VecDeque::new();

    visited.insert(from.clone());
    queue.push_back(from.clone());

    while let Some(current) = queue.pop_front() {
        if current == *to {
            return (true, predecessors);
        }

        for neighbor in graph.neighbors(&current) {
            if visited.insert(neighbor.clone()) {
                predecessors.insert(neighbor.clone(), current.clone());
                queue.push_back(neighbor.clone());
            }
        }
    }

    (false, predecessors)
}

/// Fewest-hops path from `from` to `to`, both inclusive.
/// Returns `None` when `to` is unreachable.
pub fn bfs_find_path<N, G>(graph: &G, from: &N, to: &N) -> Option<Vec<N>>
where
    N: Eq + Hash + Clone,
    G: GraphProvider<N> + ?Sized,
{
    let (found, predecessors) = bfs_search(graph, from, to);
    if !found {
        tracing::debug!(visited = predecessors.len() + 1, "bfs_find_path: no path");
        return None;
    }
    reconstruct_path(&predecessors, from, to)
}
