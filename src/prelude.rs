//! Prelude module for convenient imports.
//!
//! Re-exports the types most commonly needed to register handlers, publish
//! messages, and run the engine and timer service:
//!
//! ```rust
//! use topicbus::prelude::*;
//! ```
//!
//! # What's Included
//!
//! ## Engine
//! - [`EventEngine`] - The dispatch engine
//! - [`EngineConfig`] - Engine configuration with a builder
//! - [`EngineError`] - Engine error type
//!
//! ## Topics
//! - [`Topic`] - A parsed topic expression
//! - [`TopicError`] - Topic parsing error type
//!
//! ## Messages
//! - [`Args`], [`Kwargs`] - Dynamic positional/keyword arguments
//!
//! ## Hooks
//! - [`HandlerFn`], [`HandlerKind`] - Handler callables and calling
//!   convention tag
//! - [`HookError`] - Event hook error type
//!
//! ## Timers
//! - [`TimerService`] - Periodic ticks onto reserved topics
//! - [`TimerError`] - Timer service error type
//!
//! ## Logging
//! - [`Logger`], [`NoopLogger`], [`InMemoryLogger`] - The log sink contract
//!   and its stock implementations

pub use crate::config::EngineConfig;
pub use crate::engine::{EngineError, EventEngine};
pub use crate::hook::{HandlerFn, HandlerKind, HookError};
pub use crate::logging::{InMemoryLogger, Logger, NoopLogger};
pub use crate::message::{Args, Kwargs};
pub use crate::timer::{TimerError, TimerService};
pub use crate::topic::{Topic, TopicError};
pub use crate::util::HandlerId;
