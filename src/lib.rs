//! # topicbus - In-process structured-topic event bus
//!
//! An in-process, multi-producer/single-consumer event bus addressed by
//! structured "topics": dot-separated paths whose parts can be literal
//! values, wildcards, finite sets, or regular expressions. Producers
//! publish concrete (all-literal) topics from any thread; subscribers
//! register handlers against concrete or wildcarded topics and are invoked
//! in publish order by a single internal consumer thread.
//!
//! # Quick Start
//!
//! ```rust
//! use topicbus::prelude::*;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let engine = Arc::new(EventEngine::new(EngineConfig::default()));
//!
//! engine.register_handler(
//!     "md.{ticker}",
//!     HandlerFn::WithTopic(Box::new(|topic, _args, kwargs| {
//!         println!("tick on {topic}: {kwargs:?}");
//!     })),
//!     None,
//! ).unwrap();
//!
//! engine.start().unwrap();
//! engine.publish("md.002412", Args::new(), Kwargs::new(), true, None).unwrap();
//! std::thread::sleep(Duration::from_millis(20));
//! engine.stop().unwrap();
//! ```
//!
//! # Module Organization
//!
//! ## Core event bus
//! - [`topic`] - Topic parsing, canonical rendering, matching, interning
//! - [`message`] - The message payload and its dynamic argument types
//! - [`hook`] - Per-topic handler registries with panic isolation
//! - [`queue`] - The bounded, blocking multi-producer/single-consumer queue
//! - [`engine`] - The dispatch engine tying the above together
//! - [`timer`] - Periodic ticks published onto reserved topics
//!
//! ## Ambient stack
//! - [`logging`] - The `Logger` contract and its stock implementations
//! - [`config`] - `EngineConfig` with sensible defaults and a builder
//! - [`util`] - Opaque identifiers (`HandlerId`) and serde helpers
//!
//! # Concurrency Model
//!
//! The dispatch engine runs entirely on OS threads: producers call
//! `publish` synchronously from any thread, a single consumer thread
//! dequeues and dispatches, and each registered timer interval owns its own
//! thread. There is no `async` runtime anywhere in this crate — every
//! blocking operation is a real blocking call with well-defined
//! timeout/non-blocking variants, not a `Future` to be polled.
//!
//! # Non-goals
//!
//! Cross-process messaging, persistence, ordered delivery across distinct
//! topics, acknowledgement/retry, multi-consumer fan-out of the same
//! message, and backpressure strategies beyond block-or-fail are all out of
//! scope; see `SPEC_FULL.md` for the full rationale.

pub mod config;
pub mod engine;
pub mod hook;
pub mod logging;
pub mod message;
pub mod prelude;
pub mod queue;
pub mod timer;
pub mod topic;
pub mod util;

pub use config::EngineConfig;
pub use engine::{EngineError, EventEngine};
pub use hook::{EventHook, HandlerFn, HandlerKind, HookError};
pub use logging::{InMemoryLogger, LogEvent, LogLevel, Logger, NoopLogger};
pub use message::{Args, Kwargs, MessagePayload};
pub use queue::{BoundedQueue, QueueError};
pub use timer::{TimerError, TimerService};
pub use topic::{MatchResult, Topic, TopicError, TopicPart};
pub use util::HandlerId;
