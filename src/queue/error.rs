//! Queue error type.

// Layer 1: Standard library imports
// (none)

// Layer 2: Third-party crate imports
use thiserror::Error;

// Layer 3: Internal module imports
// (none)

/// Errors produced by [`crate::queue::BoundedQueue`] operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// `put` could not enqueue the item: the queue was at capacity and
    /// either non-blocking was requested or the timeout elapsed first.
    #[error("queue is full")]
    Full,
    /// `get` could not dequeue an item: the queue was empty and either
    /// non-blocking was requested or the timeout elapsed first.
    #[error("queue is empty")]
    Empty,
    /// The queue has been shut down; no further `put`/`get` can succeed.
    #[error("queue is closed")]
    Closed,
}
