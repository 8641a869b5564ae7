//! Common trait for index-addressed heaps
//!
//! [`IndexedHeap`] captures the primitives an array-backed heap exposes when
//! callers are allowed to address elements by their current slot index:
//! insert, extract-root, change-value-at-index, remove-at-index and a linear
//! search that maps a key back to an index.
//!
//! Indices returned by these operations are only valid until the next
//! mutation. Growing the heap (see [`IndexedHeap::expand_capacity_to`])
//! invalidates every index previously handed out.

use crate::error::Result;

/// Index-addressed heap with a fixed, explicitly growable capacity
///
/// The root (index 0) holds the element that ranks first under the heap's
/// order. For [`IndexedMaxHeap`](crate::max_heap::IndexedMaxHeap) that is the
/// maximum.
///
/// # Example
///
/// ```rust
/// use indexed_heaps::IndexedHeap;
/// use indexed_heaps::max_heap::IndexedMaxHeap;
///
/// let mut heap = IndexedMaxHeap::with_capacity(4);
/// heap.insert(3).unwrap();
/// heap.insert(7).unwrap();
/// let idx = heap.insert(5).unwrap();
///
/// assert_eq!(heap.root(), Ok(&7));
/// assert_eq!(heap.change_value(idx, 10), Ok(0));
/// assert_eq!(heap.extract_root(), Ok(10));
/// ```
pub trait IndexedHeap<T: Ord> {
    /// Creates an empty heap able to hold `capacity` elements
    fn with_capacity(capacity: usize) -> Self;

    /// Returns the number of live elements
    fn len(&self) -> usize;

    /// Returns true if the heap holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of addressable slots
    fn capacity(&self) -> usize;

    /// Returns true if another insert would fail for lack of space
    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Borrows the root element
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyCollection`](crate::HeapError::EmptyCollection)
    /// if the heap is empty.
    fn root(&self) -> Result<&T>;

    /// Borrows the element at `index`, if it is a live slot
    fn get(&self, index: usize) -> Option<&T>;

    /// Inserts a key and returns the index it came to rest at
    ///
    /// # Errors
    /// Returns [`HeapError::CapacityExceeded`](crate::HeapError::CapacityExceeded)
    /// when every slot is in use.
    ///
    /// # Time Complexity
    /// O(log n)
    fn insert(&mut self, key: T) -> Result<usize>;

    /// Removes and returns the root
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyCollection`](crate::HeapError::EmptyCollection)
    /// if the heap is empty.
    ///
    /// # Time Complexity
    /// O(log n)
    fn extract_root(&mut self) -> Result<T>;

    /// Overwrites the element at `index` and restores the heap order
    ///
    /// Returns the index the new value ends up at. Passing a value equal to
    /// the current one leaves the heap untouched and returns `index`.
    ///
    /// # Errors
    /// Returns [`HeapError::IndexOutOfBounds`](crate::HeapError::IndexOutOfBounds)
    /// if `index` is not a live slot.
    ///
    /// # Time Complexity
    /// O(log n)
    fn change_value(&mut self, index: usize, new_val: T) -> Result<usize>;

    /// Removes and returns the element at `index`
    ///
    /// # Errors
    /// Returns [`HeapError::IndexOutOfBounds`](crate::HeapError::IndexOutOfBounds)
    /// if `index` is not a live slot.
    ///
    /// # Time Complexity
    /// O(log n)
    fn remove(&mut self, index: usize) -> Result<T>;

    /// Returns the index of the first live element that compares equal to `key`
    ///
    /// # Time Complexity
    /// O(n), the live slots are scanned in array order.
    fn search(&self, key: &T) -> Option<usize>;

    /// Returns true if some live element compares equal to `key`
    fn contains(&self, key: &T) -> bool {
        self.search(key).is_some()
    }

    /// Drops every element while keeping the allocated capacity
    fn clear(&mut self);

    /// Grows the heap so it can hold `new_capacity` elements
    ///
    /// Live elements keep their indices.
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidResize`](crate::HeapError::InvalidResize)
    /// if `new_capacity` is below the current capacity.
    fn expand_capacity_to(&mut self, new_capacity: usize) -> Result<()>;
}
