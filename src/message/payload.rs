//! The message payload carried through the dispatch engine's queue.

// Layer 1: Standard library imports
use std::sync::Arc;

// Layer 2: Third-party crate imports
use chrono::{DateTime, Utc}; // §3.2-style timestamp convention
use serde::Serialize;

// Layer 3: Internal module imports
use crate::message::value::{Args, Kwargs};
use crate::topic::Topic;

/// One published event: the concrete topic it was published on, its
/// positional/keyword arguments, a monotonically increasing sequence
/// number, and the wall-clock time it was published at.
///
/// `published_at` is informational only — it plays no role in routing or
/// matching, unlike the queue's own `seq_id` ordering.
#[derive(Debug, Clone, Serialize)]
pub struct MessagePayload {
    /// The concrete (all-`Exact`) topic this message was published on.
    #[serde(skip)]
    pub topic: Arc<Topic>,

    /// Positional arguments.
    pub args: Args,

    /// Keyword arguments.
    pub kwargs: Kwargs,

    /// Monotonically increasing sequence number assigned by the engine at
    /// publish time, used to preserve per-producer ordering through the
    /// queue.
    pub seq_id: u64,

    /// Wall-clock publish time.
    pub published_at: DateTime<Utc>,
}

impl MessagePayload {
    /// Construct a payload for `topic` with no arguments, stamped with the
    /// current time. `seq_id` is assigned separately by the engine at
    /// enqueue time.
    pub fn new(topic: Arc<Topic>) -> Self {
        Self {
            topic,
            args: Args::new(),
            kwargs: Kwargs::new(),
            seq_id: 0,
            published_at: Utc::now(),
        }
    }

    /// Builder method: set positional arguments.
    pub fn with_args(mut self, args: Args) -> Self {
        self.args = args;
        self
    }

    /// Builder method: set keyword arguments.
    pub fn with_kwargs(mut self, kwargs: Kwargs) -> Self {
        self.kwargs = kwargs;
        self
    }

    /// Builder method: set the sequence number.
    pub fn with_seq_id(mut self, seq_id: u64) -> Self {
        self.seq_id = seq_id;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topic(value: &str) -> Arc<Topic> {
        Arc::new(Topic::parse(value).unwrap())
    }

    #[test]
    fn test_new_payload_has_empty_args_and_kwargs() {
        let payload = MessagePayload::new(topic("md.MD.002412"));
        assert!(payload.args.is_empty());
        assert!(payload.kwargs.is_empty());
        assert_eq!(payload.seq_id, 0);
    }

    #[test]
    fn test_builder_chaining() {
        let mut kwargs = Kwargs::new();
        kwargs.insert("price".to_string(), serde_json::Value::from(12.5));

        let payload = MessagePayload::new(topic("md.MD.002412"))
            .with_args(vec![serde_json::Value::from(1)])
            .with_kwargs(kwargs.clone())
            .with_seq_id(7);

        assert_eq!(payload.args, vec![serde_json::Value::from(1)]);
        assert_eq!(payload.kwargs, kwargs);
        assert_eq!(payload.seq_id, 7);
    }

    #[test]
    fn test_published_at_is_recent() {
        let payload = MessagePayload::new(topic("md.MD.002412"));
        let age = Utc::now().signed_duration_since(payload.published_at);
        assert!(age.num_seconds() < 5);
    }
}
