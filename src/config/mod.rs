//! Engine configuration, mirroring `SystemConfig`'s defaults-plus-builder
//! ergonomics.

// Layer 1: Standard library imports
use std::time::Duration;

// Layer 2: Third-party crate imports
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// Layer 3: Internal module imports
// (none)

/// Default capacity of the dispatch engine's internal queue.
pub const DEFAULT_QUEUE_CAPACITY: usize = 1000;

/// Default interval at which the consumer thread re-checks the shutdown
/// flag while the queue is empty.
pub const DEFAULT_CONSUMER_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Default `retry_on_unexpected_topic` value applied to newly registered
/// hooks when a caller does not specify one explicitly.
pub const DEFAULT_RETRY_ON_UNEXPECTED_TOPIC: bool = false;

mod millis_duration_serde {
    use super::*;

    /// A millisecond-granular `Duration` serde helper.
    ///
    /// `util::serde_helpers::duration_serde` rounds to whole seconds, which
    /// would silently truncate `consumer_poll_interval`'s sub-second
    /// granularity; this module exists solely for that field.
    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (duration.as_millis() as u64).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

/// Tunable parameters for an [`crate::engine::EventEngine`].
///
/// # Examples
///
/// ```rust
/// use topicbus::config::EngineConfig;
/// use std::time::Duration;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.queue_capacity, topicbus::config::DEFAULT_QUEUE_CAPACITY);
///
/// let config = EngineConfig::builder()
///     .with_queue_capacity(256)
///     .with_consumer_poll_interval(Duration::from_millis(25))
///     .build();
/// assert_eq!(config.queue_capacity, 256);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum number of queued, not-yet-dispatched messages.
    pub queue_capacity: usize,

    /// How often the consumer thread checks for a shutdown request while
    /// the queue has nothing to dequeue.
    #[serde(with = "millis_duration_serde")]
    pub consumer_poll_interval: Duration,

    /// Default `retry_on_unexpected_topic` applied to hooks created via
    /// `EventEngine::register_handler` when the caller does not override
    /// it per-call.
    pub retry_on_unexpected_topic: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            consumer_poll_interval: DEFAULT_CONSUMER_POLL_INTERVAL,
            retry_on_unexpected_topic: DEFAULT_RETRY_ON_UNEXPECTED_TOPIC,
        }
    }
}

impl EngineConfig {
    /// Start building a configuration from defaults.
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }
}

/// Fluent builder for [`EngineConfig`].
#[derive(Debug, Clone, Default)]
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    /// Set the queue capacity.
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.config.queue_capacity = capacity;
        self
    }

    /// Set the consumer thread's shutdown-poll interval.
    pub fn with_consumer_poll_interval(mut self, interval: Duration) -> Self {
        self.config.consumer_poll_interval = interval;
        self
    }

    /// Set the default `retry_on_unexpected_topic` for new hooks.
    pub fn with_retry_on_unexpected_topic(mut self, retry: bool) -> Self {
        self.config.retry_on_unexpected_topic = retry;
        self
    }

    /// Finish building.
    pub fn build(self) -> EngineConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_documented_constants() {
        let config = EngineConfig::default();
        assert_eq!(config.queue_capacity, DEFAULT_QUEUE_CAPACITY);
        assert_eq!(config.consumer_poll_interval, DEFAULT_CONSUMER_POLL_INTERVAL);
        assert!(!config.retry_on_unexpected_topic);
    }

    #[test]
    fn test_builder_overrides_defaults() {
        let config = EngineConfig::builder()
            .with_queue_capacity(16)
            .with_consumer_poll_interval(Duration::from_millis(5))
            .with_retry_on_unexpected_topic(true)
            .build();

        assert_eq!(config.queue_capacity, 16);
        assert_eq!(config.consumer_poll_interval, Duration::from_millis(5));
        assert!(config.retry_on_unexpected_topic);
    }

    #[test]
    fn test_millis_duration_roundtrip() {
        let config = EngineConfig::builder()
            .with_consumer_poll_interval(Duration::from_millis(250))
            .build();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.consumer_poll_interval, Duration::from_millis(250));
    }
}
