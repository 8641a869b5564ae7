//! Indexed Heaps for Rust
//!
//! This crate provides an array-backed binary max-heap whose elements can be
//! addressed by slot index, and a growable priority queue built on top of it.
//!
//! # Features
//!
//! - **IndexedMaxHeap**: fixed capacity, explicit growth; O(log n) insert, extract-root,
//!   change-value-at-index and remove-at-index; O(n) search by key
//! - **PriorityQueue**: (payload, priority) entries; grows by a fixed increment when full;
//!   change-priority and remove by value
//! - **Heap sort**: in-place and by-value sorting on the same sift primitives
//!
//! The library logs capacity growth at `debug` level and per-operation slot
//! movement at `trace` level through the [`log`] facade. It installs no
//! logger of its own.
//!
//! # Example
//!
//! ```rust
//! use indexed_heaps::priority_queue::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new();
//! queue.add("x", 4).add("y", 7);
//!
//! queue.change_priority(("x", 4), 40).unwrap();
//! assert!(queue.contains(&"x", &40));
//! assert_eq!(queue.peek(), Ok(&"x"));
//! ```

pub mod error;
pub mod max_heap;
pub mod priority_queue;
pub mod sort;
pub mod traits;

// Re-export the main types for convenience
pub use error::{HeapError, Result};
pub use max_heap::IndexedMaxHeap;
pub use priority_queue::{PriorityQueue, QueueConfig, QueueNode};
pub use traits::IndexedHeap;
