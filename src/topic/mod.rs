//! Topic model: parsing, canonical rendering, matching, and interning.
//!
//! A topic is a dot-separated path of parts, each either a literal
//! (`Exact`), a wildcard (`Any`), a finite set of literals (`Range`), or a
//! regular expression (`Pattern`). Concrete topics (all `Exact` parts) are
//! published on; pattern topics (containing any `Any`/`Range`/`Pattern`
//! part) are subscribed to. See `matcher::match_topic` for the comparison
//! rule between the two.

mod error;
mod intern;
mod matcher;
mod parse;
mod part;
#[allow(clippy::module_inception)]
mod topic;

pub use error::TopicError;
pub use intern::{clear, get, intern, len, parse_interned};
pub use matcher::{match_topic, MatchNode, MatchResult};
pub use part::{PatternPart, TopicPart};
pub use topic::Topic;
