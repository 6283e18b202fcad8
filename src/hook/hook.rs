//! `EventHook`: the set of handlers registered against one subscription
//! topic.

// Layer 1: Standard library imports
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;

// Layer 2: Third-party crate imports
use parking_lot::RwLock;

// Layer 3: Internal module imports
use crate::hook::error::HookError;
use crate::hook::handler::{HandlerFn, HandlerKind};
use crate::hook::stats::HandlerStats;
use crate::logging::Logger;
use crate::message::value::{Args, Kwargs};
use crate::topic::Topic;
use crate::util::HandlerId;

struct RegisteredHandler {
    id: HandlerId,
    func: HandlerFn,
    stats: HandlerStats,
}

/// The handlers subscribed to one topic (exact or pattern).
///
/// `retry_on_unexpected_topic` is carried for interface fidelity with the
/// Python original's flag of the same name, which told the engine to retry
/// delivery as a topic-less call if a with-topic handler's signature turned
/// out not to accept a `topic` keyword. In this port a handler's calling
/// convention is fixed by its [`crate::hook::HandlerKind`] at registration
/// time, so that failure mode cannot occur; the flag is accepted and stored
/// but otherwise inert.
pub struct EventHook {
    topic: Arc<Topic>,
    handlers: RwLock<Vec<RegisteredHandler>>,
    retry_on_unexpected_topic: bool,
}

impl EventHook {
    /// Create an empty hook for `topic`.
    pub fn new(topic: Arc<Topic>, retry_on_unexpected_topic: bool) -> Self {
        Self {
            topic,
            handlers: RwLock::new(Vec::new()),
            retry_on_unexpected_topic,
        }
    }

    /// The subscription topic this hook is attached to.
    pub fn topic(&self) -> &Arc<Topic> {
        &self.topic
    }

    /// See the type-level documentation. Always reflects what was passed at
    /// construction; never consulted during dispatch.
    pub fn retry_on_unexpected_topic(&self) -> bool {
        self.retry_on_unexpected_topic
    }

    /// Register `func` and return a fresh [`HandlerId`] for later removal
    /// or statistics lookup.
    pub fn add_handler(&self, func: HandlerFn) -> HandlerId {
        let id = HandlerId::new();
        self.handlers.write().push(RegisteredHandler {
            id,
            func,
            stats: HandlerStats::default(),
        });
        id
    }

    /// Remove the handler registered under `id`.
    pub fn remove_handler(&self, id: HandlerId) -> Result<(), HookError> {
        let mut handlers = self.handlers.write();
        let before = handlers.len();
        handlers.retain(|h| h.id != id);
        if handlers.len() == before {
            Err(HookError::HandlerNotFound(id))
        } else {
            Ok(())
        }
    }

    /// Number of handlers currently registered.
    pub fn len(&self) -> usize {
        self.handlers.read().len()
    }

    /// `true` if no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.read().is_empty()
    }

    /// Remove every registered handler.
    pub fn clear(&self) {
        self.handlers.write().clear();
    }

    /// Ids of every handler currently registered, in registration order.
    pub fn handler_ids(&self) -> Vec<HandlerId> {
        self.handlers.read().iter().map(|h| h.id).collect()
    }

    /// Total invocation count and cumulative time for the handler
    /// registered under `id`.
    pub fn stats(&self, id: HandlerId) -> Result<(u64, std::time::Duration), HookError> {
        self.handlers
            .read()
            .iter()
            .find(|h| h.id == id)
            .map(|h| (h.stats.calls(), h.stats.total_time()))
            .ok_or(HookError::HandlerNotFound(id))
    }

    /// Invoke every registered `without_topic` handler first, in
    /// registration order, then every `with_topic` handler, in registration
    /// order — regardless of the order the two kinds were interleaved at
    /// registration time.
    ///
    /// Each invocation is wrapped in [`catch_unwind`]: a panicking handler
    /// is logged at `Error` and does not prevent the remaining handlers
    /// from running, nor does it propagate to the dispatch engine's
    /// consumer thread (per `spec.md` §7, a faulty handler must never take
    /// down the engine).
    pub fn trigger(&self, logger: &dyn Logger, concrete_topic: &Topic, args: &Args, kwargs: &Kwargs) {
        let handlers = self.handlers.read();
        let ordered = handlers
            .iter()
            .filter(|h| h.func.kind() == HandlerKind::WithoutTopic)
            .chain(handlers.iter().filter(|h| h.func.kind() == HandlerKind::WithTopic));
        for handler in ordered {
            let started = Instant::now();
            let outcome = catch_unwind(AssertUnwindSafe(|| {
                handler.func.call(concrete_topic, args, kwargs);
            }));
            handler.stats.record_call(started.elapsed());
            if let Err(panic) = outcome {
                let message = panic
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| panic.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "handler panicked with a non-string payload".to_string());
                logger.log(crate::logging::LogEvent::new(
                    crate::logging::LogLevel::Error,
                    "hook.trigger",
                    format!(
                        "handler {} on topic '{}' panicked: {}",
                        handler.id, concrete_topic, message
                    ),
                ));
            }
        }
    }
}
