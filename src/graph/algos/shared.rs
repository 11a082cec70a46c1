use crate::graph::types::TraversalOptions;
use std::collections::HashMap;
use std::hash::Hash;

/// Check node limit and return false if traversal should stop
pub fn check_limits(
    visited_len: usize,
    truncated: &mut bool,
    truncation_reason: &mut Option<String>,
    opts: &TraversalOptions,
) -> bool {
    if let Some(max) = opts.max_nodes {
        if visited_len >= max {
            set_truncation(truncated, truncation_reason, "max_nodes");
            return false;
        }
    }

    true
}

pub fn set_truncation(truncated: &mut bool, truncation_reason: &mut Option<String>, reason: &str) {
    *truncated = true;
    *truncation_reason = Some(reason.to_string());
}

pub fn set_truncation_if_unset(
    truncated: &mut bool,
    truncation_reason: &mut Option<String>,
    reason: &str,
) {
    if !*truncated {
        set_truncation(truncated, truncation_reason, reason);
    }
}

/// Walk predecessor links from `target` back to `start`.
///
/// Returns `None` when the chain does not lead back to `start`. The walk is
/// bounded by the table size, so a cyclic table cannot loop forever.
pub fn reconstruct_path<N: Eq + Hash + Clone>(
    predecessors: &HashMap<N, N>,
    start: &N,
    target: &N,
) -> Option<Vec<N>> {
    let mut path = vec![target.clone()];
    let mut current = target;

    while current != start {
        if path.len() > predecessors.len() {
            return None;
        }
        current = predecessors.get(current)?;
        path.push(current.clone());
    }

    path.reverse();
    Some(path)
}
