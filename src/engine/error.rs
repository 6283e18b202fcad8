//! Dispatch engine error type.

// Layer 1: Standard library imports
// (none)

// Layer 2: Third-party crate imports
use thiserror::Error;

// Layer 3: Internal module imports
use crate::hook::HookError;
use crate::queue::QueueError;
use crate::topic::TopicError;
use crate::util::HandlerId;

/// Errors produced by [`crate::engine::EventEngine`] operations.
///
/// Follows the teacher's `SystemError`/`BrokerError` convention: structured
/// variants with contextual fields, `#[from]` conversions from the
/// lower-level error types the engine composes, and `is_transient`/
/// `is_fatal` helpers for callers that want to branch on recoverability.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The topic expression itself failed to parse.
    #[error("invalid topic: {0}")]
    InvalidTopic(#[from] TopicError),

    /// No hook is registered for the given topic.
    #[error("no hook registered for topic '{0}'")]
    UnknownTopic(String),

    /// No handler with the given id is registered on any hook.
    #[error("handler not found: {0}")]
    HandlerNotFound(HandlerId),

    /// The internal queue was at capacity and the call was non-blocking or
    /// its timeout elapsed.
    #[error("queue is full")]
    Full,

    /// The internal queue was empty and the call was non-blocking or its
    /// timeout elapsed.
    #[error("queue is empty")]
    Empty,

    /// The engine's consumer thread is not running.
    #[error("engine is not running")]
    NotRunning,

    /// `start` was called on an engine that is already running.
    #[error("engine is already running")]
    AlreadyRunning,
}

impl EngineError {
    /// `true` for conditions a caller may reasonably retry (e.g. a
    /// momentarily full queue).
    pub fn is_transient(&self) -> bool {
        matches!(self, EngineError::Full | EngineError::Empty)
    }

    /// `true` for conditions that indicate the engine itself is unusable
    /// until restarted.
    pub fn is_fatal(&self) -> bool {
        matches!(self, EngineError::NotRunning)
    }
}

impl From<QueueError> for EngineError {
    fn from(err: QueueError) -> Self {
        match err {
            QueueError::Full => EngineError::Full,
            QueueError::Empty => EngineError::Empty,
            QueueError::Closed => EngineError::NotRunning,
        }
    }
}

impl From<HookError> for EngineError {
    fn from(err: HookError) -> Self {
        match err {
            HookError::HandlerNotFound(id) => EngineError::HandlerNotFound(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_is_transient_not_fatal() {
        assert!(EngineError::Full.is_transient());
        assert!(!EngineError::Full.is_fatal());
    }

    #[test]
    fn test_not_running_is_fatal_not_transient() {
        assert!(EngineError::NotRunning.is_fatal());
        assert!(!EngineError::NotRunning.is_transient());
    }

    #[test]
    fn test_queue_error_conversion() {
        assert!(matches!(EngineError::from(QueueError::Full), EngineError::Full));
        assert!(matches!(EngineError::from(QueueError::Empty), EngineError::Empty));
        assert!(matches!(
            EngineError::from(QueueError::Closed),
            EngineError::NotRunning
        ));
    }
}
