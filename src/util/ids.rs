// Layer 1: Standard library imports
use std::fmt::{self, Display};

// Layer 2: Third-party crate imports
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Layer 3: Internal module imports
// (none)

/// Opaque handle returned by `add_handler`/`register_handler`.
///
/// The Python original identifies handlers by callable identity, which is
/// instance-sensitive for bound methods and has no equivalent for the boxed
/// closures a Rust port must use. `HandlerId` replaces callable identity with
/// an explicit, engine-issued handle: callers hold on to the value returned
/// from registration and pass it back to `remove_handler`/`get_stats`.
///
/// # Example
/// ```rust
/// use topicbus::util::HandlerId;
///
/// let a = HandlerId::new();
/// let b = HandlerId::new();
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandlerId(Uuid);

impl HandlerId {
    /// Generate a new, globally unique handler id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a `HandlerId` from an existing UUID (mainly for tests/replay).
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for HandlerId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
