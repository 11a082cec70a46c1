//! Sorting algorithms
//!
//! Each routine copies its input and returns a new vector in non-decreasing
//! order:
//! - `selection`: repeated-minimum extraction
//! - `quick`: middle-pivot quicksort, sequential and rayon-parallel

pub mod quick;
pub mod selection;

pub use quick::{par_quicksort, quicksort};
pub use selection::selection_sort;
