//! Heap sort built on the max-heap sift primitives
//!
//! ```rust
//! use indexed_heaps::sort::{heap_sort, heap_sort_in_place};
//!
//! assert_eq!(heap_sort(vec![3, 1, 2]), vec![1, 2, 3]);
//!
//! let mut words = ["pear", "apple", "fig"];
//! heap_sort_in_place(&mut words);
//! assert_eq!(words, ["apple", "fig", "pear"]);
//! ```

use crate::max_heap::{build_heap, sort_heap, IndexedMaxHeap};

/// Sorts `values` in ascending order
///
/// Not stable. O(n log n) time, no allocation beyond `values` itself.
pub fn heap_sort<T: Ord>(values: Vec<T>) -> Vec<T> {
    IndexedMaxHeap::from_vec(values).into_sorted_vec()
}

/// Sorts a slice in ascending order without allocating
pub fn heap_sort_in_place<T: Ord>(values: &mut [T]) {
    build_heap(values);
    sort_heap(values);
}
