//! Topic parsing error type.

// Layer 1: Standard library imports
// (none)

// Layer 2: Third-party crate imports
use thiserror::Error;

// Layer 3: Internal module imports
// (none)

/// Errors produced while parsing a topic expression.
///
/// Mirrors the structured-error convention used throughout the crate
/// (`thiserror`-derived enums with contextual fields rather than bare
/// strings).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopicError {
    /// The input string is not a well-formed topic expression.
    ///
    /// Covers: empty input, an unclosed `/…/` or `(…)` span, and a `/…/`
    /// part whose inner text fails to compile as a regular expression.
    #[error("invalid topic {source:?}: {reason}")]
    InvalidTopic {
        /// The original string that failed to parse.
        source: String,
        /// Human-readable reason for the failure.
        reason: String,
    },
}

impl TopicError {
    pub(crate) fn invalid(source: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTopic {
            source: source.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_topic_display() {
        let err = TopicError::invalid("", "empty topic string");
        assert!(err.to_string().contains("empty topic string"));
    }
}
