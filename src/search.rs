//! Binary search over ordered sequences

use crate::bail_empty;
use crate::error::{AlgoError, Result};
use crate::order::first_inversion;

/// Find the index of `target` in a non-decreasing sequence.
///
/// Order is validated before searching, so an unordered input fails with
/// [`AlgoError::UnorderedInput`] instead of returning a wrong answer. That
/// O(n) check dominates the O(log n) search.
///
/// Returns `Ok(None)` when `target` is absent. With duplicates, the index of
/// whichever match the bisection lands on first is returned.
#[tracing::instrument(skip(seq, target), fields(len = seq.len()))]
pub fn binary_search<T: PartialOrd>(seq: &[T], target: &T) -> Result<Option<usize>> {
    if seq.is_empty() {
        bail_empty!("binary_search");
    }

    if let Some(index) = first_inversion(seq) {
        tracing::debug!(index, "binary_search requires an ordered sequence");
        return Err(AlgoError::UnorderedInput { index });
    }

    let mut low: usize = 0;
    let mut high: usize = seq.len() - 1;

    while low <= high {
        let mid = low + (high - low) / 2;
        let candidate = &seq[mid];

        if candidate == target {
            tracing::debug!(index = mid, "target found");
            return Ok(Some(mid));
        } else if candidate < target {
            low = mid + 1;
        } else {
            if mid == 0 {
                break;
            }
            high = mid - 1;
        }
    }

    tracing::debug!("target not in sequence");
    Ok(None)
}
