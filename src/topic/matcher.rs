//! Matching a (possibly wildcarded) pattern topic against a concrete topic.

// Layer 1: Standard library imports
// (none)

// Layer 2: Third-party crate imports
// (none)

// Layer 3: Internal module imports
use crate::topic::part::TopicPart;
use crate::topic::topic::Topic;

/// The outcome of comparing one part of a pattern topic against the
/// corresponding part of a concrete topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchNode {
    /// Whether this part matched.
    pub matched: bool,
    /// The concrete part's literal text, for diagnostics and for building
    /// `{name: value}` extraction maps on top of a successful match.
    pub literal: String,
}

/// The result of matching a pattern topic against a concrete topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// `true` iff every part matched (and part counts were equal).
    pub matched: bool,
    /// Per-part outcomes, empty when the two topics have differing part
    /// counts (a part-count mismatch is never a match, per `spec.md` §4.2).
    pub nodes: Vec<MatchNode>,
}

impl MatchResult {
    /// Number of per-part outcomes recorded.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` if there are no per-part outcomes (implies no match).
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<'a> IntoIterator for &'a MatchResult {
    type Item = &'a MatchNode;
    type IntoIter = std::slice::Iter<'a, MatchNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

fn concrete_literal(part: &TopicPart) -> String {
    match part {
        TopicPart::Exact(s) => s.clone(),
        other => other.render(),
    }
}

fn part_matches(pattern: &TopicPart, concrete: &TopicPart) -> bool {
    match pattern {
        TopicPart::Exact(expected) => matches!(concrete, TopicPart::Exact(actual) if actual == expected),
        TopicPart::Any(_) => true,
        TopicPart::Range(options) => {
            matches!(concrete, TopicPart::Exact(actual) if options.contains(actual))
        }
        TopicPart::Pattern(p) => {
            matches!(concrete, TopicPart::Exact(actual) if p.fully_matches(actual))
        }
    }
}

/// Match `pattern` (a subscription, possibly containing wildcards) against
/// `concrete` (the topic a message was published on).
///
/// Per `spec.md` §4.2: topics with differing part counts never match,
/// regardless of content. Otherwise every part of `pattern` is compared
/// against the part at the same index in `concrete`; an `Any` part matches
/// unconditionally, `Range`/`Pattern`/`Exact` parts only match an `Exact`
/// concrete part satisfying their respective rule.
pub fn match_topic(pattern: &Topic, concrete: &Topic) -> MatchResult {
    if pattern.len() != concrete.len() {
        return MatchResult {
            matched: false,
            nodes: Vec::new(),
        };
    }

    let nodes: Vec<MatchNode> = pattern
        .parts()
        .iter()
        .zip(concrete.parts().iter())
        .map(|(p, c)| MatchNode {
            matched: part_matches(p, c),
            literal: concrete_literal(c),
        })
        .collect();
    let matched = nodes.iter().all(|n| n.matched);

    MatchResult { matched, nodes }
}
