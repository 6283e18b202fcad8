//! Dynamic argument payloads.
//!
//! The source system is dynamically typed, so positional and keyword
//! arguments can carry any JSON-representable shape. `serde_json::Value`
//! is the pack's standard representation for dynamically-shaped payloads at
//! system boundaries; `Args`/`Kwargs` are thin aliases over it rather than a
//! bespoke enum, so callers get `serde_json`'s existing `Serialize`/
//! `Deserialize`/`PartialEq`/`Display` machinery for free.

// Layer 1: Standard library imports
// (none)

// Layer 2: Third-party crate imports
use serde_json::{Map, Value};

// Layer 3: Internal module imports
// (none)

/// Positional arguments attached to a published message.
pub type Args = Vec<Value>;

/// Keyword arguments attached to a published message.
pub type Kwargs = Map<String, Value>;
