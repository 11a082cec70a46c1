use crate::order::min_position;

/// Selection sort over an owned copy of `seq`.
///
/// The first minimum of the remaining elements is always taken, so equal
/// elements keep their relative order.
#[tracing::instrument(skip(seq), fields(len = seq.len()))]
pub fn selection_sort<T: PartialOrd + Clone>(seq: &[T]) -> Vec<T> {
    let mut unsorted = seq.to_vec();
    let mut sorted = Vec::with_capacity(unsorted.len());

    while let Some(index) = min_position(&unsorted) {
        sorted.push(unsorted.remove(index));
    }

    sorted
}
