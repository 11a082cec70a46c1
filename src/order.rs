//! Ordering helpers shared by the sorting and searching routines

use crate::bail_empty;
use crate::error::Result;

/// Index `i` of the first adjacent pair with `seq[i] > seq[i + 1]`
pub fn first_inversion<T: PartialOrd>(seq: &[T]) -> Option<usize> {
    seq.windows(2).position(|pair| pair[0] > pair[1])
}

/// Whether `seq` is in non-decreasing order.
/// Empty and single-element sequences are ordered.
pub fn is_ordered<T: PartialOrd>(seq: &[T]) -> bool {
    match first_inversion(seq) {
        Some(index) => {
            tracing::debug!(
                index,
                "sequence not ordered: element is larger than its successor"
            );
            false
        }
        None => true,
    }
}

/// Position of the first minimum, or `None` for an empty sequence
pub(crate) fn min_position<T: PartialOrd>(seq: &[T]) -> Option<usize> {
    let mut iter = seq.iter().enumerate();
    let (mut index_smallest, mut smallest) = iter.next()?;
    for (index, element) in iter {
        if element < smallest {
            smallest = element;
            index_smallest = index;
        }
    }
    Some(index_smallest)
}

/// First occurrence of the minimum value, with its index
pub fn find_minimum<T: PartialOrd + Clone>(seq: &[T]) -> Result<(T, usize)> {
    let Some(index) = min_position(seq) else {
        bail_empty!("find_minimum");
    };
    Ok((seq[index].clone(), index))
}

/// Reversed copy of `seq`
pub fn reverse<T: Clone>(seq: &[T]) -> Vec<T> {
    seq.iter().rev().cloned().collect()
}
