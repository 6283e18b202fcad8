//! An in-memory logger useful for tests and for embedding applications that
//! want to bridge events into their own logging framework.

// Layer 1: Standard library imports
// (none)

// Layer 2: Third-party crate imports
use parking_lot::RwLock;

// Layer 3: Internal module imports
use super::traits::{LogEvent, Logger};

/// Records every event in an in-process buffer, guarded by a `parking_lot`
/// lock, mirroring the teacher's `InMemoryMonitor` history buffer.
#[derive(Debug, Default)]
pub struct InMemoryLogger {
    events: RwLock<Vec<LogEvent>>,
}

impl InMemoryLogger {
    /// Create an empty logger.
    pub fn new() -> Self {
        Self::default()
    }

    /// A snapshot of every event recorded so far, oldest first.
    pub fn events(&self) -> Vec<LogEvent> {
        self.events.read().clone()
    }

    /// Number of events recorded so far.
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    /// `true` if no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }

    /// Discard all recorded events.
    pub fn clear(&self) {
        self.events.write().clear();
    }
}

impl Logger for InMemoryLogger {
    fn log(&self, event: LogEvent) {
        self.events.write().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::traits::LogLevel;

    #[test]
    fn test_in_memory_logger_records_events_in_order() {
        let logger = InMemoryLogger::new();
        logger.log(LogEvent::new(LogLevel::Info, "a", "first"));
        logger.log(LogEvent::new(LogLevel::Warn, "b", "second"));

        let events = logger.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].message, "first");
        assert_eq!(events[1].message, "second");
    }

    #[test]
    fn test_clear_empties_buffer() {
        let logger = InMemoryLogger::new();
        logger.log(LogEvent::new(LogLevel::Info, "a", "first"));
        assert_eq!(logger.len(), 1);
        logger.clear();
        assert!(logger.is_empty());
    }
}
