use crate::graph::algos::shared::{check_limits, set_truncation_if_unset};
use crate::graph::types::{TraversalOptions, TraversalResult};
use crate::graph::GraphProvider;
use std::collections::{HashSet, VecDeque};
use std::hash::Hash;
use std::time::Instant;

/// State tracked during BFS traversal
struct BfsState<N> {
    visited: HashSet<N>,
    /// Nodes that have been enqueued at least once
    discovered: HashSet<N>,
    queue: VecDeque<(N, usize)>,
    order: Vec<N>,
    depths: Vec<usize>,
    truncated: bool,
    truncation_reason: Option<String>,
}

impl<N: Eq + Hash + Clone> BfsState<N> {
    fn new(start: &N) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back((start.clone(), 0));
        Self {
            visited: HashSet::new(),
            discovered: HashSet::from([start.clone()]),
            queue,
            order: Vec::new(),
            depths: Vec::new(),
            truncated: false,
            truncation_reason: None,
        }
    }

    fn visit(&mut self, node: N, depth: usize) {
        self.visited.insert(node.clone());
        self.order.push(node);
        self.depths.push(depth);
    }

    fn enqueue(&mut self, node: &N, depth: usize) {
        self.discovered.insert(node.clone());
        self.queue.push_back((node.clone(), depth));
    }

    /// True when `node` is neither visited nor waiting in the queue
    fn is_unseen(&self, node: &N) -> bool {
        !self.visited.contains(node) && !self.discovered.contains(node)
    }
}

/// Level-order traversal with optional depth and node limits.
///
/// Nodes are visited once each, by distance from `start`, ties broken by
/// enqueue order. A node may sit in the queue more than once; later copies
/// are skipped when dequeued.
pub fn bfs_traverse<N, G>(graph: &G, start: &N, opts: &TraversalOptions) -> TraversalResult<N>
where
    N: Eq + Hash + Clone,
    G: GraphProvider<N> + ?Sized,
{
    let started = Instant::now();
    let mut state = BfsState::new(start);

    while let Some((current, depth)) = state.queue.pop_front() {
        if state.visited.contains(&current) {
            continue;
        }

        if !check_limits(
            state.visited.len(),
            &mut state.truncated,
            &mut state.truncation_reason,
            opts,
        ) {
            break;
        }

        let neighbors = graph.neighbors(&current);
        state.visit(current, depth);

        if opts.max_depth.is_some_and(|max| depth >= max) {
            if neighbors.iter().any(|n| state.is_unseen(n)) {
                set_truncation_if_unset(
                    &mut state.truncated,
                    &mut state.truncation_reason,
                    "max_depth",
                );
            }
            continue;
        }

        for neighbor in neighbors {
            if !state.visited.contains(neighbor) {
                state.enqueue(neighbor, depth + 1);
            }
        }
    }

    crate::trace_time!(
        started,
        "bfs_traverse",
        visited = state.order.len(),
        truncated = state.truncated
    );

    TraversalResult {
        start: start.clone(),
        order: state.order,
        depths: state.depths,
        truncated: state.truncated,
        truncation_reason: state.truncation_reason,
    }
}

/// Visit every node reachable from `start` exactly once, in level order,
/// and return the visitation order.
pub fn breadth_first_search<N, G>(graph: &G, start: &N) -> Vec<N>
where
    N: Eq + Hash + Clone,
    G: GraphProvider<N> + ?Sized,
{
    bfs_traverse(graph, start, &TraversalOptions::default()).order
}
