//! Lock-free per-handler call statistics.
//!
//! Grounded on `mailbox::metrics::AtomicMetrics`: atomic counters for the
//! hot path, no locks, no allocations.

// Layer 1: Standard library imports
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

// Layer 2: Third-party crate imports
// (none)

// Layer 3: Internal module imports
// (none)

/// Call count and cumulative execution time for one registered handler.
#[derive(Debug, Default)]
pub struct HandlerStats {
    calls: AtomicU64,
    total_time_ns: AtomicU64,
}

impl HandlerStats {
    /// Record one invocation that took `elapsed`.
    pub fn record_call(&self, elapsed: Duration) {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.total_time_ns
            .fetch_add(elapsed.as_nanos() as u64, Ordering::Relaxed);
    }

    /// Total number of invocations recorded.
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }

    /// Cumulative time spent across all invocations.
    pub fn total_time(&self) -> Duration {
        Duration::from_nanos(self.total_time_ns.load(Ordering::Relaxed))
    }

    /// Mean time per invocation, or `Duration::ZERO` if never called.
    pub fn average_time(&self) -> Duration {
        let calls = self.calls();
        if calls == 0 {
            Duration::ZERO
        } else {
            Duration::from_nanos(self.total_time_ns.load(Ordering::Relaxed) / calls)
        }
    }
}
