/// Split `seq` around its middle element.
///
/// Elements before and after the pivot keep their relative order inside
/// each side. Caller guarantees `seq.len() >= 2`.
fn partition<T: PartialOrd + Clone>(seq: Vec<T>) -> (Vec<T>, T, Vec<T>) {
    let pivot_index = seq.len() / 2;
    let pivot = seq[pivot_index].clone();

    let mut less = Vec::new();
    let mut greater_or_equal = Vec::with_capacity(seq.len() - 1);
    for (index, element) in seq.into_iter().enumerate() {
        if index == pivot_index {
            continue;
        }
        if element < pivot {
            less.push(element);
        } else {
            greater_or_equal.push(element);
        }
    }

    (less, pivot, greater_or_equal)
}

/// Pending step of the sequential quicksort
enum Work<T> {
    Sort(Vec<T>),
    Emit(T),
}

/// Quicksort with a fixed middle pivot (`len / 2`).
///
/// Not in place: every partition allocates new sublists. The fixed pivot
/// makes some input shapes (all-equal input among them) quadratic. Pending
/// sublists live on an explicit work stack rather than the call stack.
pub fn quicksort<T: PartialOrd + Clone>(seq: &[T]) -> Vec<T> {
    let mut output = Vec::with_capacity(seq.len());
    let mut stack = vec![Work::Sort(seq.to_vec())];

    while let Some(work) = stack.pop() {
        match work {
            Work::Emit(pivot) => output.push(pivot),
            Work::Sort(mut part) if part.len() < 2 => output.append(&mut part),
            Work::Sort(part) => {
                let (less, pivot, greater_or_equal) = partition(part);
                // popped in reverse: less, then pivot, then the rest
                stack.push(Work::Sort(greater_or_equal));
                stack.push(Work::Emit(pivot));
                stack.push(Work::Sort(less));
            }
        }
    }

    output
}

/// Quicksort that partitions sublists of at least `threshold` elements on
/// the rayon pool. Output is identical to [`quicksort`].
///
/// Each partition writes its pivot into the output slot fixed by the
/// sublist sizes and spawns both sides as scope tasks.
#[tracing::instrument(skip(seq), fields(len = seq.len()))]
pub fn par_quicksort<T>(seq: &[T], threshold: usize) -> Vec<T>
where
    T: PartialOrd + Clone + Send + Sync,
{
    let mut output = seq.to_vec();
    rayon::scope(|scope| spawn_partition(scope, seq.to_vec(), &mut output, threshold));
    output
}

fn spawn_partition<'scope, T>(
    scope: &rayon::Scope<'scope>,
    part: Vec<T>,
    out: &'scope mut [T],
    threshold: usize,
) where
    T: PartialOrd + Clone + Send + Sync + 'scope,
{
    if part.len() < 2 || part.len() < threshold {
        for (slot, value) in out.iter_mut().zip(quicksort(&part)) {
            *slot = value;
        }
        return;
    }

    let (less, pivot, greater_or_equal) = partition(part);
    let (less_out, rest) = out.split_at_mut(less.len());
    let Some((pivot_slot, greater_out)) = rest.split_first_mut() else {
        return;
    };
    *pivot_slot = pivot;

    scope.spawn(move |s| spawn_partition(s, less, less_out, threshold));
    scope.spawn(move |s| spawn_partition(s, greater_or_equal, greater_out, threshold));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_keeps_relative_order() {
        let (less, pivot, rest) = partition(vec![4, 9, 1, 5, 3, 5, 8]);
        assert_eq!(pivot, 5);
        assert_eq!(less, vec![4, 1, 3]);
        assert_eq!(rest, vec![9, 5, 8]);
    }

    #[test]
    fn test_quicksort_basic() {
        assert_eq!(quicksort(&[10, 5, 2, 3]), vec![2, 3, 5, 10]);
        assert_eq!(quicksort(&[3.0, 1.5, -2.0, 1.5]), vec![-2.0, 1.5, 1.5, 3.0]);
    }

    #[test]
    fn test_quicksort_short_inputs() {
        assert!(quicksort::<u32>(&[]).is_empty());
        assert_eq!(quicksort(&["only"]), vec!["only"]);
        assert_eq!(quicksort(&[2, 1]), vec![1, 2]);
    }

    #[test]
    fn test_quicksort_descending_input() {
        let input: Vec<i32> = (0..200).rev().collect();
        let expected: Vec<i32> = (0..200).collect();
        assert_eq!(quicksort(&input), expected);
    }

    /// Equal elements before the pivot end up after it, as the partition
    /// rule dictates
    #[test]
    fn test_quicksort_equal_key_placement() {
        #[derive(Debug, Clone, PartialEq)]
        struct Keyed(u8, char);
        impl PartialOrd for Keyed {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                self.0.partial_cmp(&other.0)
            }
        }

        let input = vec![Keyed(1, 'a'), Keyed(1, 'b'), Keyed(1, 'c')];
        let expected = vec![Keyed(1, 'b'), Keyed(1, 'c'), Keyed(1, 'a')];
        assert_eq!(quicksort(&input), expected);
        assert_eq!(par_quicksort(&input, 0), expected);
    }

    #[test]
    fn test_quicksort_all_equal_deep_partitioning() {
        let input = vec![7u32; 20_000];
        assert_eq!(quicksort(&input), input);
    }

    #[test]
    fn test_par_quicksort_matches_sequential() {
        let input: Vec<i64> = (0..5_000).map(|i| (i * 7919) % 1013 - 500).collect();
        let expected = quicksort(&input);
        for threshold in [0, 1, 2, 64, 10_000] {
            assert_eq!(par_quicksort(&input, threshold), expected);
        }
    }

    #[test]
    fn test_par_quicksort_all_equal_deep_partitioning() {
        let input = vec![7u32; 10_000];
        assert_eq!(par_quicksort(&input, 2048), input);
        assert_eq!(par_quicksort(&input, 1), input);
    }
}
