//! `BoundedQueue`: a bounded, multi-producer/single-consumer blocking queue
//! with `Full`/`Empty` semantics and optional timeouts.
//!
//! `spec.md` §5 mandates real OS-thread blocking semantics for `put`/`get`,
//! which the teacher's `tokio::sync::mpsc`-based mailbox cannot provide
//! without an async runtime. `crossbeam-channel` is the idiomatic
//! synchronous replacement: `send`/`recv` block, `try_send`/`try_recv`
//! never block, and `send_timeout`/`recv_timeout` bound how long either
//! side waits — an exact match for `put`/`get`'s `block`/`timeout`
//! parameters.

// Layer 1: Standard library imports
use std::time::Duration;

// Layer 2: Third-party crate imports
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, TryRecvError, TrySendError};

// Layer 3: Internal module imports
use crate::queue::error::QueueError;

/// A bounded FIFO queue shared between producer threads (`put`) and a
/// single consumer thread (`get`).
pub struct BoundedQueue<T> {
    sender: Sender<T>,
    receiver: Receiver<T>,
}

impl<T> BoundedQueue<T> {
    /// Create a queue that holds at most `capacity` items.
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = crossbeam_channel::bounded(capacity);
        Self { sender, receiver }
    }

    /// Maximum number of items this queue can hold.
    pub fn capacity(&self) -> usize {
        self.sender.capacity().unwrap_or(0)
    }

    /// Items currently queued.
    pub fn len(&self) -> usize {
        self.sender.len()
    }

    /// `true` if no items are queued.
    pub fn is_empty(&self) -> bool {
        self.sender.is_empty()
    }

    /// `true` if the queue is at capacity.
    pub fn is_full(&self) -> bool {
        self.sender.is_full()
    }

    /// A producer-side handle that can be cloned and moved to other
    /// threads independently of this queue.
    pub fn sender(&self) -> Sender<T> {
        self.sender.clone()
    }

    /// Enqueue `item`.
    ///
    /// - `block = false`: return [`QueueError::Full`] immediately if the
    ///   queue is at capacity.
    /// - `block = true`, `timeout = None`: wait indefinitely for space.
    /// - `block = true`, `timeout = Some(d)`: wait up to `d` for space,
    ///   returning [`QueueError::Full`] on elapse.
    pub fn put(&self, item: T, block: bool, timeout: Option<Duration>) -> Result<(), QueueError> {
        if !block {
            return self.sender.try_send(item).map_err(|e| match e {
                TrySendError::Full(_) => QueueError::Full,
                TrySendError::Disconnected(_) => QueueError::Closed,
            });
        }
        match timeout {
            Some(d) => self.sender.send_timeout(item, d).map_err(|e| match e {
                crossbeam_channel::SendTimeoutError::Timeout(_) => QueueError::Full,
                crossbeam_channel::SendTimeoutError::Disconnected(_) => QueueError::Closed,
            }),
            None => self.sender.send(item).map_err(|_| QueueError::Closed),
        }
    }

    /// Dequeue the next item.
    ///
    /// - `block = false`: return [`QueueError::Empty`] immediately if
    ///   nothing is queued.
    /// - `block = true`, `timeout = None`: wait indefinitely for an item.
    /// - `block = true`, `timeout = Some(d)`: wait up to `d`, returning
    ///   [`QueueError::Empty`] on elapse.
    pub fn get(&self, block: bool, timeout: Option<Duration>) -> Result<T, QueueError> {
        if !block {
            return self.receiver.try_recv().map_err(|e| match e {
                TryRecvError::Empty => QueueError::Empty,
                TryRecvError::Disconnected => QueueError::Closed,
            });
        }
        match timeout {
            Some(d) => self.receiver.recv_timeout(d).map_err(|e| match e {
                RecvTimeoutError::Timeout => QueueError::Empty,
                RecvTimeoutError::Disconnected => QueueError::Closed,
            }),
            None => self.receiver.recv().map_err(|_| QueueError::Closed),
        }
    }
}
