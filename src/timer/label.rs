//! Canonical topic labels for timer intervals.
//!
//! Resolves the open question in `spec.md` §9: a deterministic mapping from
//! an arbitrary interval `Duration` to the label used in that timer's
//! reserved topic (`EventEngine.Internal.Timer.<Label>`). Exact-unit
//! intervals get the readable names; anything else falls back to an exact
//! millisecond count so two distinct intervals never collide on the same
//! topic.

// Layer 1: Standard library imports
use std::time::Duration;

// Layer 2: Third-party crate imports
// (none)

// Layer 3: Internal module imports
// (none)

const SECOND: Duration = Duration::from_secs(1);
const MINUTE: Duration = Duration::from_secs(60);
const HOUR: Duration = Duration::from_secs(3600);
const DAY: Duration = Duration::from_secs(86400);

/// Prefix of the reserved namespace all internal topics (currently, only
/// timer ticks) are published under.
pub const RESERVED_PREFIX: &str = "EventEngine.Internal";

/// Return the canonical label for `interval`.
pub fn label_for_interval(interval: Duration) -> String {
    match interval {
        d if d == SECOND => "Second".to_string(),
        d if d == MINUTE => "Minute".to_string(),
        d if d == HOUR => "Hour".to_string(),
        d if d == DAY => "Day".to_string(),
        d => format!("{}Ms", d.as_millis()),
    }
}

/// Return the reserved topic value timer ticks for `interval` are published
/// on: `EventEngine.Internal.Timer.<Label>`.
pub fn topic_for_interval(interval: Duration) -> String {
    format!("{RESERVED_PREFIX}.Timer.{}", label_for_interval(interval))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_unit_intervals_get_readable_labels() {
        assert_eq!(label_for_interval(Duration::from_secs(1)), "Second");
        assert_eq!(label_for_interval(Duration::from_secs(60)), "Minute");
        assert_eq!(label_for_interval(Duration::from_secs(3600)), "Hour");
        assert_eq!(label_for_interval(Duration::from_secs(86400)), "Day");
    }

    #[test]
    fn test_arbitrary_interval_falls_back_to_millis() {
        assert_eq!(label_for_interval(Duration::from_millis(2500)), "2500Ms");
        assert_eq!(label_for_interval(Duration::from_millis(250)), "250Ms");
    }

    #[test]
    fn test_near_miss_intervals_do_not_alias_to_named_labels() {
        assert_eq!(label_for_interval(Duration::from_millis(999)), "999Ms");
        assert_eq!(label_for_interval(Duration::from_millis(1001)), "1001Ms");
    }

    #[test]
    fn test_topic_for_interval_uses_reserved_namespace() {
        assert_eq!(
            topic_for_interval(Duration::from_secs(1)),
            "EventEngine.Internal.Timer.Second"
        );
        assert_eq!(
            topic_for_interval(Duration::from_millis(250)),
            "EventEngine.Internal.Timer.250Ms"
        );
    }
}
