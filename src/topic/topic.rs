//! The `Topic` value type: a parsed, canonically-rendered topic expression.

// Layer 1: Standard library imports
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

// Layer 2: Third-party crate imports
// (none)

// Layer 3: Internal module imports
use crate::topic::error::TopicError;
use crate::topic::parse::{classify, tokenize};
use crate::topic::part::TopicPart;

/// A parsed topic expression: a sequence of [`TopicPart`]s plus the
/// canonical string rendering of those parts.
///
/// Two topics are equal iff their canonical `value` strings are equal —
/// parsing is not required to preserve the caller's exact spelling (e.g.
/// `+ticker` and `{ticker}` both classify to `Any("ticker")` and render back
/// to `{ticker}`), but re-parsing a rendered value always reproduces the
/// same `Topic` (`parse(render(parse(s))) == parse(s)`, per `spec.md` §8).
#[derive(Debug, Clone)]
pub struct Topic {
    parts: Vec<TopicPart>,
    value: String,
    is_exact: bool,
}

impl Topic {
    /// Parse a topic expression.
    ///
    /// # Errors
    /// Returns [`TopicError::InvalidTopic`] for an empty string, an unclosed
    /// `/…/` or `(…)` span, an empty segment, or a `/…/` part whose inner
    /// text does not compile as a regular expression.
    pub fn parse(value: &str) -> Result<Self, TopicError> {
        if value.is_empty() {
            return Err(TopicError::invalid(value, "empty topic string"));
        }
        let raw_parts = tokenize(value)?;
        let parts: Vec<TopicPart> = raw_parts
            .into_iter()
            .map(classify)
            .collect::<Result<_, _>>()?;
        let rendered = parts
            .iter()
            .map(TopicPart::render)
            .collect::<Vec<_>>()
            .join(".");
        let is_exact = parts.iter().all(TopicPart::is_exact);
        Ok(Self {
            parts,
            value: rendered,
            is_exact,
        })
    }

    /// The parsed parts, in order.
    pub fn parts(&self) -> &[TopicPart] {
        &self.parts
    }

    /// The canonical string rendering of this topic.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// `true` if every part is `Exact` — i.e. this topic denotes exactly one
    /// concrete value and can only ever appear on the publish side, never as
    /// a subscription pattern with wildcards.
    pub fn is_exact(&self) -> bool {
        self.is_exact
    }

    /// Number of dot-separated parts.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// `true` if this topic has no parts — never actually constructible via
    /// [`Topic::parse`], kept for `Vec`-like API symmetry.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl PartialEq for Topic {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Topic {}

impl Hash for Topic {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl FromStr for Topic {
    type Err = TopicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topic::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact_topic_round_trips() {
        let t = Topic::parse("md.MD.002412").unwrap();
        assert_eq!(t.value(), "md.MD.002412");
        assert!(t.is_exact());
    }

    #[test]
    fn test_parse_any_aliases_canonicalize_to_brace_form() {
        let plus = Topic::parse("md.+ticker").unwrap();
        let brace = Topic::parse("md.{ticker}").unwrap();
        assert_eq!(plus.value(), "md.{ticker}");
        assert_eq!(plus, brace);
    }

    #[test]
    fn test_parse_range_and_pattern_canonical_form() {
        let t = Topic::parse("(md|tick)./^[0-9]{6}$/").unwrap();
        assert_eq!(t.value(), "(md|tick)./^[0-9]{6}$/");
        assert!(!t.is_exact());
    }

    #[test]
    fn test_equality_is_by_canonical_value_not_parts_spelling() {
        let a = Topic::parse("md.+x").unwrap();
        let b = Topic::parse("md.{x}").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.value(), b.value());
    }

    #[test]
    fn test_round_trip_law_reparsing_rendered_value() {
        let original = Topic::parse("md.(tick|depth).+symbol").unwrap();
        let reparsed = Topic::parse(original.value()).unwrap();
        assert_eq!(original, reparsed);
        assert_eq!(original.value(), reparsed.value());
    }

    #[test]
    fn test_empty_string_is_invalid() {
        assert!(Topic::parse("").is_err());
    }

    #[test]
    fn test_from_str_matches_parse() {
        let a: Topic = "md.MD".parse().unwrap();
        let b = Topic::parse("md.MD").unwrap();
        assert_eq!(a, b);
    }
}
