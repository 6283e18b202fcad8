//! Timer service error type.

// Layer 1: Standard library imports
// (none)

// Layer 2: Third-party crate imports
use thiserror::Error;

// Layer 3: Internal module imports
// (none)

/// Errors produced by [`crate::timer::TimerService`] operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TimerError {
    /// A zero-length interval was registered; ticking at that rate would
    /// spin the thread with no useful delay.
    #[error("timer interval must be greater than zero")]
    InvalidInterval,
    /// `start` was called on a service that is already running.
    #[error("timer service is already running")]
    AlreadyRunning,
    /// `stop` was called on a service that is not running.
    #[error("timer service is not running")]
    NotRunning,
}
