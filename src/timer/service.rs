//! `TimerService`: periodic ticks published onto reserved
//! `EventEngine.Internal.Timer.<Label>` topics.
//!
//! Grounded on the periodic-poll pattern in the teacher's
//! `supervisor::health_monitor` and the fixed/backoff scheduling helpers in
//! `supervisor::backoff`, adapted from a single supervised loop to one
//! independent thread per registered interval.

// Layer 1: Standard library imports
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

// Layer 2: Third-party crate imports
use chrono::Utc;
use parking_lot::Mutex;
use serde_json::Value;

// Layer 3: Internal module imports
use crate::engine::EventEngine;
use crate::logging::{LogEvent, LogLevel, Logger, NoopLogger};
use crate::message::value::{Args, Kwargs};
use crate::timer::error::TimerError;
use crate::timer::label::topic_for_interval;

const BUSY_WAIT_STEP: Duration = Duration::from_millis(50);

/// Publishes a `{interval, trigger_time}` tick onto
/// `EventEngine.Internal.Timer.<Label>` for every registered interval, once
/// per interval, aligned to wall-clock boundaries of that interval.
pub struct TimerService {
    engine: Arc<EventEngine>,
    logger: Arc<dyn Logger>,
    intervals: Mutex<HashSet<Duration>>,
    active: Arc<AtomicBool>,
    handles: Mutex<Vec<JoinHandle<()>>>,
}

impl TimerService {
    /// Create a timer service that publishes through `engine`, logging
    /// nowhere.
    pub fn new(engine: Arc<EventEngine>) -> Self {
        Self::with_logger(engine, Arc::new(NoopLogger))
    }

    /// Create a timer service that publishes through `engine`, logging
    /// through `logger`.
    pub fn with_logger(engine: Arc<EventEngine>, logger: Arc<dyn Logger>) -> Self {
        Self {
            engine,
            logger,
            intervals: Mutex::new(HashSet::new()),
            active: Arc::new(AtomicBool::new(false)),
            handles: Mutex::new(Vec::new()),
        }
    }

    /// Register `interval` to be ticked once [`TimerService::start`] runs.
    /// Registering the same interval twice is a no-op. Returns the reserved
    /// topic (`EventEngine.Internal.Timer.<Label>`) the caller should
    /// subscribe to in order to receive this interval's ticks.
    pub fn register_interval(&self, interval: Duration) -> Result<String, TimerError> {
        if interval.is_zero() {
            return Err(TimerError::InvalidInterval);
        }
        self.intervals.lock().insert(interval);
        Ok(topic_for_interval(interval))
    }

    /// Return the reserved topic (`EventEngine.Internal.Timer.<Label>`) a
    /// given `interval` would tick on, regardless of whether it has been
    /// registered.
    pub fn topic_for(interval: Duration) -> String {
        topic_for_interval(interval)
    }

    /// `true` while the service's timer threads are running.
    pub fn is_running(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Spawn one thread per registered interval.
    pub fn start(&self) -> Result<(), TimerError> {
        let mut handles = self.handles.lock();
        if !handles.is_empty() {
            return Err(TimerError::AlreadyRunning);
        }
        self.active.store(true, Ordering::SeqCst);

        let intervals: Vec<Duration> = self.intervals.lock().iter().copied().collect();
        for interval in intervals {
            let engine = Arc::clone(&self.engine);
            let logger = Arc::clone(&self.logger);
            let active = Arc::clone(&self.active);
            handles.push(thread::spawn(move || run_timer(&engine, logger.as_ref(), &active, interval)));
        }
        Ok(())
    }

    /// Signal every timer thread to stop and join them.
    pub fn stop(&self) -> Result<(), TimerError> {
        let mut handles = self.handles.lock();
        if handles.is_empty() {
            return Err(TimerError::NotRunning);
        }
        self.active.store(false, Ordering::SeqCst);
        for handle in handles.drain(..) {
            if let Err(panic) = handle.join() {
                self.logger.log(LogEvent::new(
                    LogLevel::Error,
                    "timer.service",
                    format!("timer thread panicked: {panic:?}"),
                ));
            }
        }
        Ok(())
    }
}

fn sleep_while_active(duration: Duration, active: &AtomicBool) {
    let mut remaining = duration;
    while remaining > Duration::ZERO && active.load(Ordering::SeqCst) {
        let step = remaining.min(BUSY_WAIT_STEP);
        thread::sleep(step);
        remaining -= step;
    }
}

fn align_to_next_boundary(interval: Duration, active: &AtomicBool) {
    let interval_ms = interval.as_millis().max(1);
    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    let remainder = now_ms % interval_ms;
    let wait_ms = if remainder == 0 { 0 } else { interval_ms - remainder };
    sleep_while_active(Duration::from_millis(wait_ms as u64), active);
}

fn run_timer(engine: &EventEngine, logger: &dyn Logger, active: &AtomicBool, interval: Duration) {
    let topic_value = topic_for_interval(interval);
    align_to_next_boundary(interval, active);

    while active.load(Ordering::SeqCst) {
        let trigger_time = Utc::now();
        let mut kwargs = Kwargs::new();
        kwargs.insert("interval".to_string(), Value::from(interval.as_secs_f64()));
        kwargs.insert(
            "trigger_time".to_string(),
            Value::from(trigger_time.timestamp() as f64 + f64::from(trigger_time.timestamp_subsec_nanos()) / 1e9),
        );

        if let Err(err) = engine.publish(&topic_value, Args::new(), kwargs, false, None) {
            logger.log(LogEvent::new(
                LogLevel::Warn,
                "timer.tick",
                format!("failed to publish tick on '{topic_value}': {err}"),
            ));
        }

        sleep_while_active(interval, active);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::hook::HandlerFn;
    use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

    #[test]
    fn test_register_zero_interval_errors() {
        let engine = Arc::new(EventEngine::new(EngineConfig::default()));
        let service = TimerService::new(engine);
        assert!(matches!(
            service.register_interval(Duration::ZERO),
            Err(TimerError::InvalidInterval)
        ));
    }

    #[test]
    fn test_start_twice_errors() {
        let engine = Arc::new(EventEngine::new(EngineConfig::default()));
        let service = TimerService::new(engine);
        service.register_interval(Duration::from_millis(50)).unwrap();
        service.start().unwrap();
        assert!(matches!(service.start(), Err(TimerError::AlreadyRunning)));
        service.stop().unwrap();
    }

    #[test]
    fn test_stop_without_start_errors() {
        let engine = Arc::new(EventEngine::new(EngineConfig::default()));
        let service = TimerService::new(engine);
        assert!(matches!(service.stop(), Err(TimerError::NotRunning)));
    }

    #[test]
    fn test_register_interval_returns_reserved_topic() {
        let engine = Arc::new(EventEngine::new(EngineConfig::default()));
        let service = TimerService::new(engine);
        let topic = service.register_interval(Duration::from_millis(50)).unwrap();
        assert_eq!(topic, "EventEngine.Internal.Timer.50Ms");
    }

    #[test]
    fn test_timer_ticks_reach_registered_handler() {
        let engine = Arc::new(EventEngine::new(
            EngineConfig::builder()
                .with_consumer_poll_interval(Duration::from_millis(10))
                .build(),
        ));
        let ticks = Arc::new(AtomicUsize::new(0));
        let ticks2 = Arc::clone(&ticks);
        let service = TimerService::new(Arc::clone(&engine));
        let topic = service.register_interval(Duration::from_millis(50)).unwrap();
        engine
            .register_handler(
                &topic,
                HandlerFn::WithoutTopic(Box::new(move |_, _| {
                    ticks2.fetch_add(1, AtomicOrdering::Relaxed);
                })),
                None,
            )
            .unwrap();
        engine.start().unwrap();
        service.start().unwrap();

        thread::sleep(Duration::from_millis(260));
        service.stop().unwrap();
        engine.stop().unwrap();

        assert!(ticks.load(AtomicOrdering::Relaxed) >= 2);
    }
}
