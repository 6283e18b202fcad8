//! A bounded, blocking multi-producer/single-consumer queue.

mod bounded;
mod error;

pub use bounded::BoundedQueue;
pub use error::QueueError;
