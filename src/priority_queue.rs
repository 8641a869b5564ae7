//! Growable priority queue on top of [`IndexedMaxHeap`]
//!
//! [`PriorityQueue`] stores `(payload, priority)` pairs as [`QueueNode`]s in a
//! single max-heap and always hands out the payload with the highest
//! priority first. The queue grows by a fixed increment whenever an add would
//! overflow the heap, so callers never see
//! [`HeapError::CapacityExceeded`](crate::HeapError::CapacityExceeded).
//!
//! Entries are identified by value: changing the priority of an entry, or
//! removing one, first locates it with a linear scan over the heap and then
//! applies the heap's index-addressed operation.
//!
//! Ties between equal priorities are broken by heap structure, not by
//! insertion order.
//!
//! # Example
//!
//! ```rust
//! use indexed_heaps::priority_queue::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new();
//! queue.add("a", 2).add("b", 5).add("c", 3);
//!
//! assert_eq!(queue.poll(), Ok("b"));
//! assert_eq!(queue.poll(), Ok("c"));
//! assert_eq!(queue.poll(), Ok("a"));
//! assert!(queue.poll().is_err());
//! ```

use std::cmp::Ordering;
use std::fmt;

use log::trace;

use crate::error::{HeapError, Result};
use crate::max_heap::IndexedMaxHeap;
use crate::traits::IndexedHeap;

/// A payload paired with its priority
///
/// Nodes are ordered, and compare equal, by priority alone: two nodes with the
/// same priority but different payloads are `==`. Use
/// [`QueueNode::matches`] to check whether a node is a particular
/// `(payload, priority)` entry.
#[derive(Debug, Clone, Copy)]
pub struct QueueNode<T, P = i32> {
    payload: T,
    priority: P,
}

impl<T, P> QueueNode<T, P> {
    pub fn new(payload: T, priority: P) -> Self {
        Self { payload, priority }
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn priority(&self) -> &P {
        &self.priority
    }

    pub fn into_parts(self) -> (T, P) {
        (self.payload, self.priority)
    }

    /// Returns true if this node is the entry `(payload, priority)`
    pub fn matches(&self, payload: &T, priority: &P) -> bool
    where
        T: PartialEq,
        P: PartialEq,
    {
        self.priority == *priority && self.payload == *payload
    }
}

impl<T, P: Ord> PartialEq for QueueNode<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl<T, P: Ord> Eq for QueueNode<T, P> {}

impl<T, P: Ord> PartialOrd for QueueNode<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, P: Ord> Ord for QueueNode<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority.cmp(&other.priority)
    }
}

impl<T: fmt::Display, P: fmt::Display> fmt::Display for QueueNode<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.payload, self.priority)
    }
}

/// Sizing policy for a [`PriorityQueue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueConfig {
    /// Slots allocated when the queue is created
    pub initial_capacity: usize,
    /// Slots added each time an add finds the queue full
    pub growth_increment: usize,
}

impl QueueConfig {
    pub const DEFAULT_INITIAL_CAPACITY: usize = 10;
    pub const DEFAULT_GROWTH_INCREMENT: usize = 10;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Sets the growth increment. Values below one are raised to one.
    pub fn with_growth_increment(mut self, growth_increment: usize) -> Self {
        self.growth_increment = growth_increment.max(1);
        self
    }
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
            growth_increment: Self::DEFAULT_GROWTH_INCREMENT,
        }
    }
}

/// A max-priority queue that grows on demand
///
/// # Time Complexity
///
/// | Operation         | Complexity |
/// |-------------------|------------|
/// | `add`             | O(log n) amortized over growth |
/// | `peek`            | O(1)       |
/// | `poll`            | O(log n)   |
/// | `change_priority` | O(n)       |
/// | `remove`          | O(n)       |
/// | `contains`        | O(n)       |
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, P = i32> {
    heap: IndexedMaxHeap<QueueNode<T, P>>,
    growth_increment: usize,
}

impl<T, P: Ord> PriorityQueue<T, P> {
    /// Creates an empty queue with the default sizing policy
    pub fn new() -> Self {
        Self::with_config(QueueConfig::default())
    }

    /// Creates an empty queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(QueueConfig::default().with_initial_capacity(capacity))
    }

    pub fn with_config(config: QueueConfig) -> Self {
        Self {
            heap: IndexedMaxHeap::new(config.initial_capacity),
            growth_increment: config.growth_increment.max(1),
        }
    }

    /// Creates a queue holding every `(payload, priority)` pair in `pairs`
    ///
    /// The queue is sized to the number of pairs plus one growth increment.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (T, P)>,
    {
        let pairs: Vec<_> = pairs.into_iter().collect();
        let config = QueueConfig::default();
        let mut queue = Self::with_config(
            config.with_initial_capacity(pairs.len() + config.growth_increment),
        );
        queue.add_range(pairs);
        queue
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// Adds `payload` with `priority`, growing the queue first if it is full
    pub fn add(&mut self, payload: T, priority: P) -> &mut Self {
        self.heap
            .insert_or_grow(QueueNode::new(payload, priority), self.growth_increment);
        self
    }

    /// Adds every pair in `pairs`
    ///
    /// If the batch does not fit, the queue grows once, by one increment plus
    /// the batch length, before any pair is inserted.
    pub fn add_range<I>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (T, P)>,
    {
        let pairs: Vec<_> = pairs.into_iter().collect();
        let needed = self.heap.len() + pairs.len();
        if needed > self.heap.capacity() {
            self.heap.grow_by(self.growth_increment + pairs.len());
        }

        for (payload, priority) in pairs {
            self.add(payload, priority);
        }
        self
    }

    /// Borrows the payload with the highest priority
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyCollection`] if the queue is empty.
    pub fn peek(&self) -> Result<&T> {
        self.heap.root().map(QueueNode::payload)
    }

    /// Borrows the payload and priority of the highest-priority entry
    pub fn peek_entry(&self) -> Result<(&T, &P)> {
        self.heap
            .root()
            .map(|node| (node.payload(), node.priority()))
    }

    /// Removes and returns the payload with the highest priority
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyCollection`] if the queue is empty.
    pub fn poll(&mut self) -> Result<T> {
        self.heap.extract_root().map(|node| node.payload)
    }

    /// Drops every entry, keeping the allocated capacity
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Grows the queue to hold `new_capacity` entries
    ///
    /// The queue grows on its own; calling this before a large batch of adds
    /// avoids repeated reallocation.
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidResize`] if `new_capacity` is below the
    /// current capacity.
    pub fn expand_size_to(&mut self, new_capacity: usize) -> Result<()> {
        self.heap.expand_capacity_to(new_capacity)
    }

    /// Snapshot of every entry in backing-array order (not priority order)
    pub fn to_list(&self) -> Vec<(T, P)>
    where
        T: Clone,
        P: Clone,
    {
        self.heap
            .iter()
            .map(|node| (node.payload.clone(), node.priority.clone()))
            .collect()
    }

    /// Copies the heap's backing store into `target` starting at `offset`
    ///
    /// See [`IndexedMaxHeap::copy_to`].
    pub fn copy_to(&self, target: &mut [Option<QueueNode<T, P>>], offset: usize) -> Result<()>
    where
        T: Clone,
        P: Clone,
    {
        self.heap.copy_to(target, offset)
    }

    /// Consumes the queue and returns every entry, highest priority first
    pub fn into_sorted_vec(self) -> Vec<(T, P)> {
        self.heap
            .into_sorted_vec()
            .into_iter()
            .rev()
            .map(QueueNode::into_parts)
            .collect()
    }
}

impl<T: PartialEq, P: Ord> PriorityQueue<T, P> {
    fn find(&self, payload: &T, priority: &P) -> Option<usize> {
        self.heap.position(|node| node.matches(payload, priority))
    }

    /// Returns true if the entry `(payload, priority)` is queued
    pub fn contains(&self, payload: &T, priority: &P) -> bool {
        self.find(payload, priority).is_some()
    }

    /// Moves the entry `(payload, old_priority)` to `new_priority`
    ///
    /// The payload passed in replaces the stored one; the two are equal by
    /// definition of the lookup.
    ///
    /// # Errors
    /// Returns [`HeapError::NotFound`] if the entry is not queued.
    pub fn change_priority(&mut self, entry: (T, P), new_priority: P) -> Result<()> {
        let (payload, old_priority) = entry;
        let index = self
            .find(&payload, &old_priority)
            .ok_or(HeapError::NotFound)?;
        let new_index = self
            .heap
            .change_value(index, QueueNode::new(payload, new_priority))?;
        trace!("changed queue entry priority, slot {} -> {}", index, new_index);
        Ok(())
    }

    /// Removes the entry `(payload, priority)` and returns its payload
    ///
    /// Only the first matching entry is removed when duplicates are queued.
    ///
    /// # Errors
    /// Returns [`HeapError::NotFound`] if the entry is not queued.
    pub fn remove(&mut self, payload: &T, priority: &P) -> Result<T> {
        let index = self.find(payload, priority).ok_or(HeapError::NotFound)?;
        self.heap.remove(index).map(|node| node.payload)
    }
}

impl<T, P: Ord> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Ord> FromIterator<(T, P)> for PriorityQueue<T, P> {
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl<T, P: Ord> Extend<(T, P)> for PriorityQueue<T, P> {
    fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
        self.add_range(iter);
    }
}

/// Renders entries in backing-array order, e.g. `[(b, 5), (a, 2), (c, 3)]`
///
/// `{:#}` includes the unused slots up to the capacity.
impl<T: fmt::Display, P: fmt::Display> fmt::Display for PriorityQueue<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.heap, f)
    }
}
