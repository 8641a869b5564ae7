//! Indexed binary max-heap
//!
//! An array-backed binary max-heap with a fixed capacity that only grows when
//! asked to. The tree is implicit: the children of slot `i` live at `2i + 1`
//! and `2i + 2`, its parent at `(i - 1) / 2`.
//!
//! Unlike `std::collections::BinaryHeap`, elements can be addressed by their
//! current slot index. That makes it possible to change or remove an element
//! in O(log n) once its index is known, and [`IndexedHeap::search`] recovers
//! an index from a key with a linear scan.
//!
//! # Time Complexity
//!
//! | Operation            | Complexity |
//! |----------------------|------------|
//! | `insert`             | O(log n)   |
//! | `extract_root`       | O(log n)   |
//! | `root`               | O(1)       |
//! | `change_value`       | O(log n)   |
//! | `remove`             | O(log n)   |
//! | `search`             | O(n)       |
//! | `from_vec`           | O(n)       |
//! | `expand_capacity_to` | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use indexed_heaps::IndexedHeap;
//! use indexed_heaps::max_heap::IndexedMaxHeap;
//!
//! let mut heap = IndexedMaxHeap::new(10);
//! for value in [5, 3, 8, 1, 9, 2] {
//!     heap.insert(value).unwrap();
//! }
//!
//! assert_eq!(heap.extract_root(), Ok(9));
//! assert_eq!(heap.extract_root(), Ok(8));
//! assert_eq!(heap.len(), 4);
//! ```

use std::cmp::Ordering;
use std::fmt;

use log::{debug, trace};

use crate::error::{HeapError, Result};
use crate::traits::IndexedHeap;

/// Capacity used by [`IndexedMaxHeap::default`]
pub const DEFAULT_CAPACITY: usize = 10;

/// An array-backed max-heap with index-addressed mutation
///
/// Live elements occupy `data[..len]`; `capacity` is the logical slot count.
/// The vector's own allocation is kept at least as large as `capacity`, so
/// inserts below capacity never reallocate.
#[derive(Debug, Clone)]
pub struct IndexedMaxHeap<T> {
    data: Vec<T>,
    capacity: usize,
}

/// Index of the parent of slot `i`. Slot 0 has no parent.
#[inline]
pub const fn parent(i: usize) -> usize {
    (i - 1) / 2
}

/// Index of the left child of slot `i`
#[inline]
pub const fn left(i: usize) -> usize {
    2 * i + 1
}

/// Index of the right child of slot `i`
#[inline]
pub const fn right(i: usize) -> usize {
    2 * i + 2
}

/// Moves the element at `index` towards the root while it exceeds its parent
///
/// Returns the index the element came to rest at.
pub(crate) fn sift_up<T: Ord>(data: &mut [T], mut index: usize) -> usize {
    while index > 0 {
        let p = parent(index);
        if data[index] > data[p] {
            data.swap(index, p);
            index = p;
        } else {
            break;
        }
    }
    index
}

/// Moves the element at `index` towards the leaves while a child exceeds it
///
/// Only `data[..end]` is treated as part of the heap. Returns the index the
/// element came to rest at.
pub(crate) fn sift_down<T: Ord>(data: &mut [T], mut index: usize, end: usize) -> usize {
    loop {
        let l = left(index);
        let r = right(index);
        let mut largest = index;

        if l < end && data[l] > data[largest] {
            largest = l;
        }
        if r < end && data[r] > data[largest] {
            largest = r;
        }

        if largest == index {
            return index;
        }
        data.swap(index, largest);
        index = largest;
    }
}

/// Rearranges `data` so that it satisfies the max-heap property
pub(crate) fn build_heap<T: Ord>(data: &mut [T]) {
    let end = data.len();
    for i in (0..end / 2).rev() {
        sift_down(data, i, end);
    }
}

/// Sorts a slice that already satisfies the max-heap property into ascending order
pub(crate) fn sort_heap<T: Ord>(data: &mut [T]) {
    for end in (1..data.len()).rev() {
        data.swap(0, end);
        sift_down(data, 0, end);
    }
}

impl<T: Ord> IndexedMaxHeap<T> {
    /// Creates an empty heap with room for `capacity` elements
    pub fn new(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Builds a heap from arbitrary data in O(n)
    ///
    /// The resulting heap is full: its capacity equals the number of
    /// elements passed in.
    pub fn from_vec(mut data: Vec<T>) -> Self {
        build_heap(&mut data);
        let capacity = data.len();
        debug!("built max-heap of {} elements", capacity);
        Self { data, capacity }
    }

    /// Borrows the maximum element, if any
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Live elements in backing-array order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates live elements in backing-array order (not sorted order)
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns the index of the first live element matching `predicate`
    ///
    /// Like [`IndexedHeap::search`] this is a linear scan, but lets the
    /// caller decide what counts as a match.
    pub fn position<F>(&self, predicate: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.data.iter().position(predicate)
    }

    /// Inserts a key, first growing by `increment` slots if the heap is full
    ///
    /// This never fails with [`HeapError::CapacityExceeded`]. An `increment`
    /// of zero is treated as one.
    pub fn insert_or_grow(&mut self, key: T, increment: usize) -> usize {
        if self.is_full() {
            self.grow_by(increment.max(1));
        }
        self.push_unchecked(key)
    }

    /// Adds `additional` slots to the capacity
    pub fn grow_by(&mut self, additional: usize) {
        self.grow_to(self.capacity.saturating_add(additional));
    }

    /// Checks the heap property over every live slot
    pub fn is_valid_heap(&self) -> bool {
        (1..self.data.len()).all(|i| self.data[parent(i)] >= self.data[i])
    }

    /// Consumes the heap and returns its elements in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        sort_heap(&mut self.data);
        self.data
    }

    /// Copies the full backing store into `target` starting at `offset`
    ///
    /// Live slots are written as `Some`, the unused slots up to the capacity
    /// as `None`. Slots are written in backing-array order.
    ///
    /// # Errors
    /// Returns [`HeapError::BufferTooSmall`] if `target[offset..]` has fewer
    /// than [`capacity`](IndexedHeap::capacity) slots. Nothing is written in
    /// that case.
    pub fn copy_to(&self, target: &mut [Option<T>], offset: usize) -> Result<()>
    where
        T: Clone,
    {
        let available = target.len().saturating_sub(offset);
        if available < self.capacity {
            return Err(HeapError::BufferTooSmall {
                required: self.capacity,
                available,
            });
        }

        for (i, slot) in target[offset..offset + self.capacity].iter_mut().enumerate() {
            *slot = self.data.get(i).cloned();
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.data.len() {
            Ok(())
        } else {
            Err(HeapError::IndexOutOfBounds {
                index,
                len: self.data.len(),
            })
        }
    }

    fn push_unchecked(&mut self, key: T) -> usize {
        self.data.push(key);
        let start = self.data.len() - 1;
        let index = sift_up(&mut self.data, start);
        trace!("inserted at slot {} (rest at {})", start, index);
        index
    }

    fn grow_to(&mut self, new_capacity: usize) {
        debug!(
            "expanding heap capacity from {} to {} ({} live)",
            self.capacity,
            new_capacity,
            self.data.len()
        );
        self.data.reserve_exact(new_capacity - self.data.len());
        self.capacity = new_capacity;
    }
}

impl<T: Ord> IndexedHeap<T> for IndexedMaxHeap<T> {
    fn with_capacity(capacity: usize) -> Self {
        Self::new(capacity)
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn root(&self) -> Result<&T> {
        self.data.first().ok_or(HeapError::EmptyCollection)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    fn insert(&mut self, key: T) -> Result<usize> {
        if self.is_full() {
            return Err(HeapError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        Ok(self.push_unchecked(key))
    }

    fn extract_root(&mut self) -> Result<T> {
        if self.data.is_empty() {
            return Err(HeapError::EmptyCollection);
        }

        // The last live element takes the root's slot.
        let root = self.data.swap_remove(0);
        let end = self.data.len();
        if end > 0 {
            sift_down(&mut self.data, 0, end);
        }
        Ok(root)
    }

    fn change_value(&mut self, index: usize, new_val: T) -> Result<usize> {
        self.check_index(index)?;

        let old = std::mem::replace(&mut self.data[index], new_val);
        let end = self.data.len();
        let new_index = match self.data[index].cmp(&old) {
            Ordering::Greater => sift_up(&mut self.data, index),
            Ordering::Less => sift_down(&mut self.data, index, end),
            Ordering::Equal => index,
        };
        trace!("changed slot {} (rest at {})", index, new_index);
        Ok(new_index)
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;

        let removed = self.data.swap_remove(index);
        let end = self.data.len();
        if index < end {
            // The element moved in from the last slot may belong above or
            // below `index`.
            if sift_up(&mut self.data, index) == index {
                sift_down(&mut self.data, index, end);
            }
        }
        trace!("removed slot {}", index);
        Ok(removed)
    }

    fn search(&self, key: &T) -> Option<usize> {
        self.position(|item| item.cmp(key) == Ordering::Equal)
    }

    fn clear(&mut self) {
        self.data.clear();
    }

    fn expand_capacity_to(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity < self.capacity {
            return Err(HeapError::InvalidResize {
                current: self.capacity,
                requested: new_capacity,
            });
        }
        self.grow_to(new_capacity);
        Ok(())
    }
}

impl<T: Ord> Default for IndexedMaxHeap<T> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<T: Ord> From<Vec<T>> for IndexedMaxHeap<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<'a, T> IntoIterator for &'a IndexedMaxHeap<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Renders slots in backing-array order, e.g. `[9, 5, 8]`
///
/// The alternate form (`{:#}`) renders every slot up to the capacity and
/// marks empty ones with `_`.
impl<T: fmt::Display> fmt::Display for IndexedMaxHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots = if f.alternate() {
            self.capacity.max(self.data.len())
        } else {
            self.data.len()
        };

        f.write_str("[")?;
        for i in 0..slots {
            if i > 0 {
                f.write_str(", ")?;
            }
            match self.data.get(i) {
                Some(item) => write!(f, "{}", item)?,
                None => f.write_str("_")?,
            }
        }
        f.write_str("]")
    }
}
