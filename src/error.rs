//! Error type shared by the heap and the priority queue

use thiserror::Error;

/// Error type for heap and queue operations
///
/// Every variant is reported before the structure is mutated, so a caller
/// that receives an error can keep using the heap as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// Peek, poll or extract was called on an empty structure
    #[error("collection is empty")]
    EmptyCollection,
    /// Insert was called on a heap that has no free slot
    #[error("heap is at its capacity of {capacity} elements")]
    CapacityExceeded { capacity: usize },
    /// A resize asked for less room than the heap already has
    #[error("cannot resize heap from capacity {current} down to {requested}")]
    InvalidResize { current: usize, requested: usize },
    /// The requested (payload, priority) entry is not in the queue
    #[error("entry was not found in the queue")]
    NotFound,
    /// An index-addressed operation named a slot outside the live range
    #[error("index {index} is out of bounds for heap of size {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    /// The target buffer of a copy cannot hold the backing store
    #[error("target buffer needs {required} slots but only {available} are available")]
    BufferTooSmall { required: usize, available: usize },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, HeapError>;
