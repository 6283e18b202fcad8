//! Event hook error type.

// Layer 1: Standard library imports
// (none)

// Layer 2: Third-party crate imports
use thiserror::Error;

// Layer 3: Internal module imports
use crate::util::HandlerId;

/// Errors produced by [`crate::hook::EventHook`] operations.
///
/// Kept as a narrow, dedicated error type even though only one variant is
/// currently reachable from the public surface, mirroring the teacher's
/// practice of giving every module its own error enum rather than folding
/// everything into one crate-wide type.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HookError {
    /// `remove_handler` (or `stats`) was called with an id that is not
    /// currently registered on this hook.
    #[error("handler not found: {0}")]
    HandlerNotFound(HandlerId),
}
