//! Handler callables and the tag that selects their calling convention.

// Layer 1: Standard library imports
// (none)

// Layer 2: Third-party crate imports
// (none)

// Layer 3: Internal module imports
use crate::message::value::{Args, Kwargs};
use crate::topic::Topic;

/// A handler that receives the concrete topic a message was published on,
/// in addition to its arguments.
pub type WithTopicFn = Box<dyn Fn(&Topic, &Args, &Kwargs) + Send + Sync>;

/// A handler that receives only the message's arguments.
pub type WithoutTopicFn = Box<dyn Fn(&Args, &Kwargs) + Send + Sync>;

/// Which calling convention a registered handler expects.
///
/// The Python original inspects a callable's parameter list at registration
/// time to decide whether to pass the triggering topic; Rust has no such
/// introspection (nor would it be desirable for a statically-typed boxed
/// closure). Per `spec.md` §9's redesign note, the caller instead states the
/// calling convention explicitly when registering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerKind {
    /// Handler accepts `(topic, args, kwargs)`.
    WithTopic,
    /// Handler accepts `(args, kwargs)`.
    WithoutTopic,
}

/// A registered handler callable, tagged with its calling convention.
pub enum HandlerFn {
    /// See [`HandlerKind::WithTopic`].
    WithTopic(WithTopicFn),
    /// See [`HandlerKind::WithoutTopic`].
    WithoutTopic(WithoutTopicFn),
}

impl HandlerFn {
    /// The calling convention this callable expects.
    pub fn kind(&self) -> HandlerKind {
        match self {
            HandlerFn::WithTopic(_) => HandlerKind::WithTopic,
            HandlerFn::WithoutTopic(_) => HandlerKind::WithoutTopic,
        }
    }

    /// Invoke the callable with the appropriate arguments for its kind.
    pub fn call(&self, topic: &Topic, args: &Args, kwargs: &Kwargs) {
        match self {
            HandlerFn::WithTopic(f) => f(topic, args, kwargs),
            HandlerFn::WithoutTopic(f) => f(args, kwargs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_with_topic_handler_receives_topic() {
        let seen = Arc::new(AtomicUsize::new(0));
        let seen2 = Arc::clone(&seen);
        let handler = HandlerFn::WithTopic(Box::new(move |topic, _args, _kwargs| {
            if topic.value() == "md.MD.002412" {
                seen2.fetch_add(1, Ordering::Relaxed);
            }
        }));
        assert_eq!(handler.kind(), HandlerKind::WithTopic);

        let topic = Topic::parse("md.MD.002412").unwrap();
        handler.call(&topic, &Args::new(), &Kwargs::new());
        assert_eq!(seen.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_without_topic_handler_ignores_topic() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls2 = Arc::clone(&calls);
        let handler = HandlerFn::WithoutTopic(Box::new(move |_args, _kwargs| {
            calls2.fetch_add(1, Ordering::Relaxed);
        }));
        assert_eq!(handler.kind(), HandlerKind::WithoutTopic);

        let topic = Topic::parse("md.MD.002412").unwrap();
        handler.call(&topic, &Args::new(), &Kwargs::new());
        assert_eq!(calls.load(Ordering::Relaxed), 1);
    }
}
