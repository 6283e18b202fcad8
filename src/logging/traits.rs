//! The `Logger` contract: a synchronous, object-safe log sink.

// Layer 1: Standard library imports
use std::fmt::Debug;

// Layer 2: Third-party crate imports
use chrono::{DateTime, Utc}; // §3.2-style timestamp convention

// Layer 3: Internal module imports
// (none)

/// Severity of a log record.
///
/// Deliberately narrower than the teacher's `monitoring::EventSeverity`
/// (which spans `Trace`..`Critical`): the engine only ever needs to report
/// informational progress, recoverable anomalies, and handler faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Routine, expected activity (hook registered, timer started, …).
    Info,
    /// Recoverable anomaly (queue full, unknown topic on an internal path).
    Warn,
    /// A handler panicked, or another fault the caller should know about.
    Error,
}

/// One emitted log record.
#[derive(Debug, Clone)]
pub struct LogEvent {
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// Severity of the event.
    pub level: LogLevel,
    /// Short machine-stable tag identifying the emitting component, e.g.
    /// `"engine.dispatch"` or `"timer.tick"`.
    pub target: &'static str,
    /// Human-readable message.
    pub message: String,
}

impl LogEvent {
    /// Construct a new event stamped with the current time.
    pub fn new(level: LogLevel, target: &'static str, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            target,
            message: message.into(),
        }
    }
}

/// A synchronous log sink.
///
/// Mirrors the teacher's `monitoring::Monitor<E>` trait family, but
/// synchronous (no `async_trait`) since every component that logs here runs
/// on an OS thread, never inside a `tokio` task.
pub trait Logger: Send + Sync + Debug {
    /// Record one log event.
    fn log(&self, event: LogEvent);

    /// Convenience: build and record an `Info`-level event.
    ///
    /// Not part of the trait's object-safe surface (`Self: Sized`); callers
    /// holding a `dyn Logger` build a [`LogEvent`] and call `log` directly.
    fn info(&self, target: &'static str, message: impl Into<String>)
    where
        Self: Sized,
    {
        self.log(LogEvent::new(LogLevel::Info, target, message));
    }

    /// Convenience: build and record a `Warn`-level event. See [`Logger::info`].
    fn warn(&self, target: &'static str, message: impl Into<String>)
    where
        Self: Sized,
    {
        self.log(LogEvent::new(LogLevel::Warn, target, message));
    }

    /// Convenience: build and record an `Error`-level event. See [`Logger::info`].
    fn error(&self, target: &'static str, message: impl Into<String>)
    where
        Self: Sized,
    {
        self.log(LogEvent::new(LogLevel::Error, target, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event_carries_fields() {
        let event = LogEvent::new(LogLevel::Warn, "engine.dispatch", "queue full");
        assert_eq!(event.level, LogLevel::Warn);
        assert_eq!(event.target, "engine.dispatch");
        assert_eq!(event.message, "queue full");
    }

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Error > LogLevel::Warn);
        assert!(LogLevel::Warn > LogLevel::Info);
    }
}
