//! The four kinds of topic part and their canonical rendering.

// Layer 1: Standard library imports
use std::hash::{Hash, Hasher};
use std::sync::Arc;

// Layer 2: Third-party crate imports
use regex::Regex;

// Layer 3: Internal module imports
// (none)

/// A compiled `Pattern` part.
///
/// `Regex` has no `PartialEq`/`Hash` impl, so equality and hashing are
/// defined over the original source text; two `Pattern` parts with the same
/// source text are always considered equal, independent of however `regex`
/// chooses to represent the compiled program internally.
#[derive(Debug, Clone)]
pub struct PatternPart {
    /// The text between the two `/` delimiters, as written by the caller.
    pub source: String,
    pub(crate) regex: Arc<Regex>,
}

impl PatternPart {
    pub(crate) fn new(source: String, regex: Regex) -> Self {
        Self {
            source,
            regex: Arc::new(regex),
        }
    }

    /// Returns `true` if `candidate` fully matches the pattern (the match
    /// span covers the entire string, not merely a substring).
    pub fn fully_matches(&self, candidate: &str) -> bool {
        self.regex
            .find(candidate)
            .is_some_and(|m| m.start() == 0 && m.end() == candidate.len())
    }
}

impl PartialEq for PatternPart {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for PatternPart {}

impl Hash for PatternPart {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
    }
}

/// One dot-separated segment of a [`crate::topic::Topic`].
///
/// Classification precedence (see `spec.md` §4.1 / `SPEC_FULL.md` §4.1–4.3):
/// a raw segment is tested against `Pattern`, then `Range`, then the two
/// `Any` spellings, and falls back to `Exact` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TopicPart {
    /// A literal segment, e.g. `md`, `MD`, `002412`.
    Exact(String),
    /// A wildcard segment matching any concrete value, e.g. `{ticker}` or
    /// `+ticker`. The carried name is documentation only; it plays no role
    /// in matching.
    Any(String),
    /// A finite set of literal alternatives, e.g. `(md|tick|depth)`.
    Range(Vec<String>),
    /// A regular-expression segment, e.g. `/^[0-9]{6}$/`.
    Pattern(PatternPart),
}

impl TopicPart {
    /// Render this part back to its canonical textual form.
    pub fn render(&self) -> String {
        match self {
            TopicPart::Exact(s) => s.clone(),
            TopicPart::Any(name) => format!("{{{name}}}"),
            TopicPart::Range(options) => format!("({})", options.join("|")),
            TopicPart::Pattern(p) => format!("/{}/", p.source),
        }
    }

    /// Returns `true` for parts that match only a single literal value.
    pub fn is_exact(&self) -> bool {
        matches!(self, TopicPart::Exact(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_exact() {
        assert_eq!(TopicPart::Exact("md".into()).render(), "md");
    }

    #[test]
    fn test_render_any_canonical_form() {
        assert_eq!(TopicPart::Any("ticker".into()).render(), "{ticker}");
    }

    #[test]
    fn test_render_range() {
        let part = TopicPart::Range(vec!["md".into(), "tick".into()]);
        assert_eq!(part.render(), "(md|tick)");
    }

    #[test]
    fn test_render_pattern() {
        let regex = Regex::new("^[0-9]{6}$").unwrap();
        let part = TopicPart::Pattern(PatternPart::new("^[0-9]{6}$".into(), regex));
        assert_eq!(part.render(), "/^[0-9]{6}$/");
    }

    #[test]
    fn test_pattern_part_equality_ignores_compiled_program() {
        let a = PatternPart::new("a+".into(), Regex::new("a+").unwrap());
        let b = PatternPart::new("a+".into(), Regex::new("a+").unwrap());
        assert_eq!(a, b);
    }

    #[test]
    fn test_pattern_fully_matches_requires_whole_string() {
        let p = PatternPart::new("[0-9]{6}".into(), Regex::new("[0-9]{6}").unwrap());
        assert!(p.fully_matches("002412"));
        assert!(!p.fully_matches("002412x"));
        assert!(!p.fully_matches("x002412"));
    }
}
