//! `RoutingIndex`: the two-tier (exact + pattern) hook lookup structure.
//!
//! Mirrors the reader-writer discipline described for the dispatch engine
//! (`spec.md` §5): registration is rare relative to dispatch, so both
//! tiers are `parking_lot::RwLock`-guarded collections read under a shared
//! lock on the hot path and written under an exclusive lock only when
//! hooks are added or removed.

// Layer 1: Standard library imports
use std::collections::HashMap;
use std::sync::Arc;

// Layer 2: Third-party crate imports
use parking_lot::RwLock;

// Layer 3: Internal module imports
use crate::hook::EventHook;
use crate::topic::{match_topic, Topic};

/// Holds every registered [`EventHook`], split into an O(1) exact-match
/// table and a linear-scan pattern list.
#[derive(Default)]
pub struct RoutingIndex {
    exact: RwLock<HashMap<String, Arc<EventHook>>>,
    patterns: RwLock<Vec<Arc<EventHook>>>,
}

impl RoutingIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the existing hook for `topic`'s canonical value, or create
    /// and register a new one with `retry_on_unexpected_topic`.
    pub fn get_or_insert(&self, topic: Arc<Topic>, retry_on_unexpected_topic: bool) -> Arc<EventHook> {
        if topic.is_exact() {
            let mut exact = self.exact.write();
            if let Some(hook) = exact.get(topic.value()) {
                return Arc::clone(hook);
            }
            let hook = Arc::new(EventHook::new(Arc::clone(&topic), retry_on_unexpected_topic));
            exact.insert(topic.value().to_string(), Arc::clone(&hook));
            hook
        } else {
            let mut patterns = self.patterns.write();
            if let Some(hook) = patterns.iter().find(|h| h.topic().value() == topic.value()) {
                return Arc::clone(hook);
            }
            let hook = Arc::new(EventHook::new(Arc::clone(&topic), retry_on_unexpected_topic));
            patterns.push(Arc::clone(&hook));
            hook
        }
    }

    /// Look up the existing hook registered for `topic`'s canonical value,
    /// without creating one.
    pub fn get(&self, topic: &Topic) -> Option<Arc<EventHook>> {
        if topic.is_exact() {
            self.exact.read().get(topic.value()).map(Arc::clone)
        } else {
            self.patterns
                .read()
                .iter()
                .find(|h| h.topic().value() == topic.value())
                .map(Arc::clone)
        }
    }

    /// Remove and return the hook registered for `topic`'s canonical value.
    pub fn remove(&self, topic: &Topic) -> Option<Arc<EventHook>> {
        if topic.is_exact() {
            self.exact.write().remove(topic.value())
        } else {
            let mut patterns = self.patterns.write();
            let pos = patterns.iter().position(|h| h.topic().value() == topic.value())?;
            Some(patterns.remove(pos))
        }
    }

    /// All hooks whose subscription topic matches `concrete` — the exact
    /// hook for that value, if any, plus every pattern hook whose match
    /// succeeds.
    pub fn matching(&self, concrete: &Topic) -> Vec<Arc<EventHook>> {
        let mut hits = Vec::new();
        if let Some(hook) = self.exact.read().get(concrete.value()) {
            hits.push(Arc::clone(hook));
        }
        for hook in self.patterns.read().iter() {
            if match_topic(hook.topic(), concrete).matched {
                hits.push(Arc::clone(hook));
            }
        }
        hits
    }

    /// Total number of registered hooks (exact + pattern).
    pub fn len(&self) -> usize {
        self.exact.read().len() + self.patterns.read().len()
    }

    /// `true` if no hooks are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every registered hook.
    pub fn clear(&self) {
        self.exact.write().clear();
        self.patterns.write().clear();
    }
}
