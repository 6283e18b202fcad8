//! `EventEngine`: the dispatch engine tying the topic index, event hooks,
//! and bounded queue together behind a single-consumer thread.

// Layer 1: Standard library imports
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

// Layer 2: Third-party crate imports
use dashmap::DashMap;
use parking_lot::Mutex;

// Layer 3: Internal module imports
use crate::config::EngineConfig;
use crate::engine::error::EngineError;
use crate::engine::index::RoutingIndex;
use crate::hook::{EventHook, HandlerFn};
use crate::logging::{LogEvent, LogLevel, Logger, NoopLogger};
use crate::message::value::{Args, Kwargs};
use crate::message::MessagePayload;
use crate::queue::BoundedQueue;
use crate::topic::{self, Topic, TopicError};
use crate::util::HandlerId;

/// The in-process, multi-producer/single-consumer event bus.
///
/// Producers call [`EventEngine::publish`] from any thread; a single
/// internal consumer thread (started with [`EventEngine::start`]) dequeues
/// messages in publish order and triggers every matching hook in place.
pub struct EventEngine {
    index: RoutingIndex,
    handler_index: DashMap<HandlerId, Arc<EventHook>>,
    queue: Arc<BoundedQueue<MessagePayload>>,
    logger: Arc<dyn Logger>,
    config: EngineConfig,
    seq_counter: AtomicU64,
    active: Arc<AtomicBool>,
    consumer: Mutex<Option<JoinHandle<()>>>,
}

impl EventEngine {
    /// Create an engine with `config`, logging nowhere.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_logger(config, Arc::new(NoopLogger))
    }

    /// Create an engine with `config`, logging through `logger`.
    pub fn with_logger(config: EngineConfig, logger: Arc<dyn Logger>) -> Self {
        let queue = Arc::new(BoundedQueue::new(config.queue_capacity));
        Self {
            index: RoutingIndex::new(),
            handler_index: DashMap::new(),
            queue,
            logger,
            config,
            seq_counter: AtomicU64::new(0),
            active: Arc::new(AtomicBool::new(false)),
            consumer: Mutex::new(None),
        }
    }

    /// `true` while the consumer thread is running.
    pub fn is_running(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Start the consumer thread. Errors if already running.
    pub fn start(self: &Arc<Self>) -> Result<(), EngineError> {
        let mut guard = self.consumer.lock();
        if guard.is_some() {
            return Err(EngineError::AlreadyRunning);
        }
        self.active.store(true, Ordering::SeqCst);

        let queue = Arc::clone(&self.queue);
        let engine = Arc::clone(self);
        let active = Arc::clone(&self.active);
        let poll_interval = self.config.consumer_poll_interval;

        let handle = thread::spawn(move || consume(&engine, &queue, &active, poll_interval));
        *guard = Some(handle);
        Ok(())
    }

    /// Stop the consumer thread and discard whatever remains queued.
    ///
    /// Per the crate's shutdown-drain design decision, `stop` does not
    /// attempt to flush queued messages to their handlers before
    /// returning — it signals the consumer thread, joins it, and then
    /// drains the queue so a later `start` never replays stale messages.
    pub fn stop(&self) -> Result<(), EngineError> {
        let handle = {
            let mut guard = self.consumer.lock();
            guard.take().ok_or(EngineError::NotRunning)?
        };
        self.active.store(false, Ordering::SeqCst);
        if let Err(panic) = handle.join() {
            self.logger.log(LogEvent::new(
                LogLevel::Error,
                "engine.consumer",
                format!("consumer thread panicked: {panic:?}"),
            ));
        }
        while self.queue.get(false, None).is_ok() {}
        Ok(())
    }

    /// Parse (and intern) `topic_str`, register `func` against it, and
    /// return a fresh [`HandlerId`] for later removal or statistics lookup.
    ///
    /// `retry_on_unexpected_topic` overrides the engine's configured
    /// default for this hook only when `Some`.
    pub fn register_handler(
        &self,
        topic_str: &str,
        func: HandlerFn,
        retry_on_unexpected_topic: Option<bool>,
    ) -> Result<HandlerId, EngineError> {
        let topic = topic::parse_interned(topic_str)?;
        let retry = retry_on_unexpected_topic.unwrap_or(self.config.retry_on_unexpected_topic);
        let hook = self.index.get_or_insert(topic, retry);
        let id = hook.add_handler(func);
        self.handler_index.insert(id, hook);
        Ok(id)
    }

    /// Remove the handler registered under `id`, wherever it lives.
    pub fn unregister_handler(&self, id: HandlerId) -> Result<(), EngineError> {
        let (_, hook) = self
            .handler_index
            .remove(&id)
            .ok_or(EngineError::HandlerNotFound(id))?;
        hook.remove_handler(id)?;
        Ok(())
    }

    /// Remove the entire hook (and every handler on it) registered for
    /// `topic_str`.
    pub fn unregister_hook(&self, topic_str: &str) -> Result<(), EngineError> {
        let topic = Topic::parse(topic_str)?;
        let hook = self
            .index
            .remove(&topic)
            .ok_or_else(|| EngineError::UnknownTopic(topic.value().to_string()))?;
        for id in hook.handler_ids() {
            self.handler_index.remove(&id);
        }
        Ok(())
    }

    /// Call count and cumulative time for the handler registered under
    /// `id`.
    pub fn stats(&self, id: HandlerId) -> Result<(u64, Duration), EngineError> {
        let hook = self
            .handler_index
            .get(&id)
            .ok_or(EngineError::HandlerNotFound(id))?;
        Ok(hook.stats(id)?)
    }

    /// Number of hooks currently registered (exact + pattern).
    pub fn hook_count(&self) -> usize {
        self.index.len()
    }

    /// Remove every hook and handler.
    ///
    /// Rejected while the engine is running: clearing hooks out from under
    /// a live consumer thread would drop in-flight dispatch state with no
    /// way for a caller to know which messages were affected. Call
    /// [`EventEngine::stop`] first. A rejected call is logged and has no
    /// effect — it does not return an error, mirroring the engine's
    /// documented `running --clear()--> running` state-machine transition.
    pub fn clear(&self) {
        if self.is_running() {
            self.logger.log(LogEvent::new(
                LogLevel::Warn,
                "engine.clear",
                "clear() rejected: engine is running; call stop() first".to_string(),
            ));
            return;
        }
        self.index.clear();
        self.handler_index.clear();
    }

    /// Publish one message on `topic_str` (which must be a concrete,
    /// all-`Exact` topic), returning the sequence number assigned to it.
    ///
    /// `block`/`timeout` behave exactly as [`crate::queue::BoundedQueue::put`].
    pub fn publish(
        &self,
        topic_str: &str,
        args: Args,
        kwargs: Kwargs,
        block: bool,
        timeout: Option<Duration>,
    ) -> Result<u64, EngineError> {
        let topic = topic::parse_interned(topic_str)?;
        if !topic.is_exact() {
            return Err(EngineError::InvalidTopic(TopicError::invalid(
                topic_str,
                "publish requires a concrete (all-Exact) topic",
            )));
        }
        let seq_id = self.seq_counter.fetch_add(1, Ordering::Relaxed);
        let payload = MessagePayload::new(topic)
            .with_args(args)
            .with_kwargs(kwargs)
            .with_seq_id(seq_id);
        self.queue.put(payload, block, timeout)?;
        Ok(seq_id)
    }
}

fn consume(engine: &EventEngine, queue: &BoundedQueue<MessagePayload>, active: &AtomicBool, poll_interval: Duration) {
    while active.load(Ordering::SeqCst) {
        match queue.get(true, Some(poll_interval)) {
            Ok(payload) => {
                for hook in engine.index.matching(&payload.topic) {
                    hook.trigger(engine.logger.as_ref(), &payload.topic, &payload.args, &payload.kwargs);
                }
            }
            Err(crate::queue::QueueError::Empty) => continue,
            Err(crate::queue::QueueError::Closed) => break,
            Err(crate::queue::QueueError::Full) => unreachable!("get() never returns Full"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration as StdDuration;

    fn engine() -> Arc<EventEngine> {
        Arc::new(EventEngine::new(EngineConfig::builder()
            .with_consumer_poll_interval(StdDuration::from_millis(10))
            .build()))
    }

    #[test]
    fn test_register_and_publish_exact_topic() {
        let engine = engine();
        let calls = Arc::new(AtomicUsize::new(0));
        let calls2 = Arc::clone(&calls);
        engine
            .register_handler(
                "md.MD.002412",
                HandlerFn::WithoutTopic(Box::new(move |_, _| {
                    calls2.fetch_add(1, Ordering::Relaxed);
                })),
                None,
            )
            .unwrap();

        engine.start().unwrap();
        engine.publish("md.MD.002412", Args::new(), Kwargs::new(), true, None).unwrap();
        thread::sleep(StdDuration::from_millis(50));
        engine.stop().unwrap();

        assert_eq!(calls.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_pattern_fan_out_to_multiple_hooks() {
        let engine = engine();
        let exact_calls = Arc::new(AtomicUsize::new(0));
        let pattern_calls = Arc::new(AtomicUsize::new(0));
        let e2 = Arc::clone(&exact_calls);
        let p2 = Arc::clone(&pattern_calls);

        engine
            .register_handler(
                "md.MD.002412",
                HandlerFn::WithoutTopic(Box::new(move |_, _| {
                    e2.fetch_add(1, Ordering::Relaxed);
                })),
                None,
            )
            .unwrap();
        engine
            .register_handler(
                "md.{ticker}",
                HandlerFn::WithoutTopic(Box::new(move |_, _| {
                    p2.fetch_add(1, Ordering::Relaxed);
                })),
                None,
            )
            .unwrap();

        engine.start().unwrap();
        engine.publish("md.MD.002412", Args::new(), Kwargs::new(), true, None).unwrap();
        thread::sleep(StdDuration::from_millis(50));
        engine.stop().unwrap();

        assert_eq!(exact_calls.load(Ordering::Relaxed), 1);
        assert_eq!(pattern_calls.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_publish_rejects_non_exact_topic() {
        let engine = engine();
        let err = engine
            .publish("md.{ticker}", Args::new(), Kwargs::new(), true, None)
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidTopic(_)));
    }

    #[test]
    fn test_start_twice_errors() {
        let engine = engine();
        engine.start().unwrap();
        assert!(matches!(engine.start(), Err(EngineError::AlreadyRunning)));
        engine.stop().unwrap();
    }

    #[test]
    fn test_stop_without_start_errors() {
        let engine = engine();
        assert!(matches!(engine.stop(), Err(EngineError::NotRunning)));
    }

    #[test]
    fn test_stop_discards_queued_messages() {
        let engine = engine();
        // never started: messages just sit in the queue
        engine.publish("md.MD.002412", Args::new(), Kwargs::new(), true, None).unwrap();
        engine.start().unwrap();
        thread::sleep(StdDuration::from_millis(30));
        engine.stop().unwrap();
        assert!(engine.queue.is_empty());
    }

    #[test]
    fn test_unregister_handler_removes_it() {
        let engine = engine();
        let id = engine
            .register_handler("md.MD.002412", HandlerFn::WithoutTopic(Box::new(|_, _| {})), None)
            .unwrap();
        assert!(engine.unregister_handler(id).is_ok());
        assert!(matches!(
            engine.unregister_handler(id),
            Err(EngineError::HandlerNotFound(_))
        ));
    }

    #[test]
    fn test_unregister_hook_removes_all_its_handlers() {
        let engine = engine();
        let id = engine
            .register_handler("md.MD.002412", HandlerFn::WithoutTopic(Box::new(|_, _| {})), None)
            .unwrap();
        engine.unregister_hook("md.MD.002412").unwrap();
        assert_eq!(engine.hook_count(), 0);
        assert!(matches!(
            engine.unregister_handler(id),
            Err(EngineError::HandlerNotFound(_))
        ));
    }

    #[test]
    fn test_unregister_unknown_hook_errors() {
        let engine = engine();
        assert!(matches!(
            engine.unregister_hook("does.not.exist"),
            Err(EngineError::UnknownTopic(_))
        ));
    }

    #[test]
    fn test_stats_tracks_call_count() {
        let engine = engine();
        let id = engine
            .register_handler("md.MD.002412", HandlerFn::WithoutTopic(Box::new(|_, _| {})), None)
            .unwrap();

        engine.start().unwrap();
        engine.publish("md.MD.002412", Args::new(), Kwargs::new(), true, None).unwrap();
        engine.publish("md.MD.002412", Args::new(), Kwargs::new(), true, None).unwrap();
        thread::sleep(StdDuration::from_millis(50));
        engine.stop().unwrap();

        let (calls, _) = engine.stats(id).unwrap();
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_clear_while_idle_removes_hooks() {
        let engine = engine();
        engine
            .register_handler("md.MD.002412", HandlerFn::WithoutTopic(Box::new(|_, _| {})), None)
            .unwrap();
        assert_eq!(engine.hook_count(), 1);

        engine.clear();

        assert_eq!(engine.hook_count(), 0);
    }

    #[test]
    fn test_clear_while_running_is_rejected() {
        let engine = engine();
        engine
            .register_handler("md.MD.002412", HandlerFn::WithoutTopic(Box::new(|_, _| {})), None)
            .unwrap();
        engine.start().unwrap();

        engine.clear();

        assert_eq!(engine.hook_count(), 1);
        engine.stop().unwrap();
    }
}
