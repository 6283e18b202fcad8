//! Process-wide topic intern table.
//!
//! Mirrors the lock-free `ActorRegistry` in the teacher's `broker::registry`:
//! a sharded concurrent map behind a lazily-initialized static, giving every
//! equal topic value a single shared `Arc<Topic>` so that repeated
//! subscriptions/publications on the same topic string do not re-parse or
//! re-allocate.

// Layer 1: Standard library imports
use std::sync::{Arc, LazyLock};

// Layer 2: Third-party crate imports
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

// Layer 3: Internal module imports
use crate::topic::topic::Topic;

static INTERN_TABLE: LazyLock<DashMap<String, Arc<Topic>>> = LazyLock::new(DashMap::new);

/// Insert `topic` into the intern table if no topic with the same canonical
/// value is already present, returning the shared instance either way.
///
/// Uses `DashMap`'s `entry` API so that two threads racing to intern the
/// same value never produce two distinct `Arc<Topic>`s for one canonical
/// string — the shard lock held across the match makes the check-then-
/// insert atomic.
pub fn intern(topic: Topic) -> Arc<Topic> {
    match INTERN_TABLE.entry(topic.value().to_string()) {
        Entry::Occupied(entry) => Arc::clone(entry.get()),
        Entry::Vacant(entry) => {
            let shared = Arc::new(topic);
            entry.insert(Arc::clone(&shared));
            shared
        }
    }
}

/// Look up an already-interned topic by its canonical value, without
/// inserting anything.
pub fn get(value: &str) -> Option<Arc<Topic>> {
    INTERN_TABLE.get(value).map(|entry| Arc::clone(entry.value()))
}

/// Number of distinct topics currently interned.
pub fn len() -> usize {
    INTERN_TABLE.len()
}

/// Remove every entry from the intern table.
///
/// Existing `Arc<Topic>` handles held elsewhere remain valid; their
/// allocation is freed once the last such handle is dropped, independent of
/// this call.
pub fn clear() {
    INTERN_TABLE.clear();
}

/// Parse `value` and intern the result in one call.
pub fn parse_interned(value: &str) -> Result<Arc<Topic>, crate::topic::error::TopicError> {
    Topic::parse(value).map(intern)
}
