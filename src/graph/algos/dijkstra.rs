use crate::error::{AlgoError, Result};
use crate::graph::algos::shared::reconstruct_path;
use crate::graph::types::{Cost, Frontier, PathOptions, PathResult};
use crate::graph::WeightedGraphProvider;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, VecDeque};
use std::fmt::Display;
use std::hash::Hash;
use std::time::Instant;

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated cost).
/// Entries compare by cost alone.
#[derive(Debug, Clone)]
pub struct HeapEntry<N> {
    pub node_id: N,
    pub accumulated_cost: Cost,
}

impl<N> PartialEq for HeapEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl<N> Eq for HeapEntry<N> {}

impl<N> PartialOrd for HeapEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for HeapEntry<N> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.accumulated_cost.total_cmp(&other.accumulated_cost)
    }
}

/// Cost and predecessor tables built by one relaxation run
struct CostTables<N> {
    costs: HashMap<N, Cost>,
    predecessors: HashMap<N, N>,
    relaxations: usize,
}

impl<N: Eq + Hash + Clone> CostTables<N> {
    fn new(start: &N) -> Self {
        let mut costs = HashMap::new();
        costs.insert(start.clone(), Cost::ZERO);
        Self {
            costs,
            predecessors: HashMap::new(),
            relaxations: 0,
        }
    }

    /// Best known cost; unknown nodes are infinitely far
    fn cost_of(&self, node: &N) -> Cost {
        self.costs.get(node).copied().unwrap_or(Cost::INFINITY)
    }

    /// Record `candidate` if it beats the best known cost of `node`
    fn relax(&mut self, node: &N, candidate: Cost, via: &N) -> bool {
        if candidate < self.cost_of(node) {
            self.costs.insert(node.clone(), candidate);
            self.predecessors.insert(node.clone(), via.clone());
            self.relaxations += 1;
            true
        } else {
            false
        }
    }
}

/// Label-correcting relaxation over a FIFO work queue.
/// A node is re-queued every time its cost improves, duplicates included.
fn relax_fifo<N, G>(graph: &G, start: &N) -> CostTables<N>
where
    N: Eq + Hash + Clone,
    G: WeightedGraphProvider<N> + ?Sized,
{
    let mut tables = CostTables::new(start);
    let mut queue: VecDeque<N> = VecDeque::new();
    queue.push_back(start.clone());

    while let Some(current) = queue.pop_front() {
        let current_cost = tables.cost_of(&current);
        for (neighbor, weight) in graph.edges(&current) {
            let candidate = current_cost + Cost::new(*weight);
            if tables.relax(neighbor, candidate, &current) {
                queue.push_back(neighbor.clone());
            }
        }
    }

    tables
}

/// Relaxation over a min-heap frontier. Heap entries whose cost is above
/// the table value are stale and skipped.
fn relax_heap<N, G>(graph: &G, start: &N) -> CostTables<N>
where
    N: Eq + Hash + Clone,
    G: WeightedGraphProvider<N> + ?Sized,
{
    let mut tables = CostTables::new(start);
    let mut heap: BinaryHeap<Reverse<HeapEntry<N>>> = BinaryHeap::new();
    heap.push(Reverse(HeapEntry {
        node_id: start.clone(),
        accumulated_cost: Cost::ZERO,
    }));

    while let Some(Reverse(HeapEntry {
        node_id: current,
        accumulated_cost,
    })) = heap.pop()
    {
        if accumulated_cost > tables.cost_of(&current) {
            continue;
        }

        for (neighbor, weight) in graph.edges(&current) {
            let candidate = accumulated_cost + Cost::new(*weight);
            if tables.relax(neighbor, candidate, &current) {
                heap.push(Reverse(HeapEntry {
                    node_id: neighbor.clone(),
                    accumulated_cost: candidate,
                }));
            }
        }
    }

    tables
}

fn run<N, G>(graph: &G, start: &N, frontier: Frontier) -> CostTables<N>
where
    N: Eq + Hash + Clone,
    G: WeightedGraphProvider<N> + ?Sized,
{
    match frontier {
        Frontier::Fifo => relax_fifo(graph, start),
        Frontier::Heap => relax_heap(graph, start),
    }
}

/// Minimum-cost path from `start` to `target` with the default frontier.
pub fn shortest_path<N, G>(graph: &G, start: &N, target: &N) -> Result<PathResult<N>>
where
    N: Eq + Hash + Clone + Display,
    G: WeightedGraphProvider<N> + ?Sized,
{
    shortest_path_with(graph, start, target, &PathOptions::default())
}

/// Minimum-cost path from `start` to `target`.
///
/// Edge weights must be non-negative; results are unspecified otherwise.
/// Fails with [`AlgoError::UnreachableTarget`] when no path exists, so a
/// partial path is never returned. Both frontiers produce the same cost, and
/// the same path whenever the minimum-cost path is unique.
#[tracing::instrument(
    skip_all,
    fields(start = %start, target = %target, frontier = ?opts.frontier)
)]
pub fn shortest_path_with<N, G>(
    graph: &G,
    start: &N,
    target: &N,
    opts: &PathOptions,
) -> Result<PathResult<N>>
where
    N: Eq + Hash + Clone + Display,
    G: WeightedGraphProvider<N> + ?Sized,
{
    let started = Instant::now();
    let tables = run(graph, start, opts.frontier);
    crate::trace_time!(
        started,
        "shortest_path",
        relaxations = tables.relaxations,
        reached = tables.costs.len()
    );

    let cost = tables.cost_of(target);
    if !cost.is_finite() {
        tracing::debug!("target never reached");
        return Err(AlgoError::unreachable(start, target));
    }

    let path = reconstruct_path(&tables.predecessors, start, target)
        .ok_or_else(|| AlgoError::unreachable(start, target))?;

    tracing::debug!(cost = cost.value(), hops = path.len() - 1, "shortest_path_found");
    Ok(PathResult {
        cost: cost.value(),
        path,
    })
}

/// Final cost of every node reachable from `start`, `start` included.
pub fn shortest_costs<N, G>(graph: &G, start: &N, opts: &PathOptions) -> HashMap<N, f64>
where
    N: Eq + Hash + Clone,
    G: WeightedGraphProvider<N> + ?Sized,
{
    run(graph, start, opts.frontier)
        .costs
        .into_iter()
        .map(|(node, cost)| (node, cost.value()))
        .collect()
}
