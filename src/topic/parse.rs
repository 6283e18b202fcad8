//! Tokenizing a topic string into raw segments, and classifying each segment
//! into a [`TopicPart`].

// Layer 1: Standard library imports
// (none)

// Layer 2: Third-party crate imports
use regex::Regex;

// Layer 3: Internal module imports
use crate::topic::error::TopicError;
use crate::topic::part::{PatternPart, TopicPart};

/// Split `value` into raw segments on unescaped `.`, respecting balanced
/// `/…/` and `(…)` spans so that a literal `.` written inside either kind of
/// span is never treated as a separator.
pub(crate) fn tokenize(value: &str) -> Result<Vec<&str>, TopicError> {
    let mut tokens = Vec::new();
    let mut start = 0usize;
    let mut in_slash = false;
    let mut paren_depth = 0i32;

    for (idx, ch) in value.char_indices() {
        match ch {
            '/' if paren_depth == 0 => in_slash = !in_slash,
            '(' if !in_slash => paren_depth += 1,
            ')' if !in_slash => {
                paren_depth -= 1;
                if paren_depth < 0 {
                    return Err(TopicError::invalid(value, "unmatched ')' in topic string"));
                }
            }
            '.' if !in_slash && paren_depth == 0 => {
                tokens.push(&value[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    tokens.push(&value[start..]);

    if in_slash {
        return Err(TopicError::invalid(value, "unclosed '/…/' span in topic string"));
    }
    if paren_depth != 0 {
        return Err(TopicError::invalid(value, "unclosed '(…)' span in topic string"));
    }
    if tokens.iter().any(|t| t.is_empty()) {
        return Err(TopicError::invalid(value, "empty segment between '.' separators"));
    }
    Ok(tokens)
}

/// Classify one raw segment into a [`TopicPart`], following the precedence
/// order: `Pattern`, then `Range`, then `Any` (both spellings), else `Exact`.
pub(crate) fn classify(raw: &str) -> Result<TopicPart, TopicError> {
    if raw.len() >= 3 && raw.starts_with('/') && raw.ends_with('/') {
        let inner = &raw[1..raw.len() - 1];
        let regex = Regex::new(inner)
            .map_err(|e| TopicError::invalid(raw, format!("invalid regex in Pattern part: {e}")))?;
        return Ok(TopicPart::Pattern(PatternPart::new(inner.to_string(), regex)));
    }

    if raw.starts_with('(') && raw.ends_with(')') {
        let inner = &raw[1..raw.len() - 1];
        if inner.is_empty() {
            return Ok(TopicPart::Exact(raw.to_string()));
        }
        let options: Vec<&str> = inner.split('|').collect();
        if options.iter().any(|opt| opt.is_empty()) {
            return Err(TopicError::invalid(raw, "empty option in Range part"));
        }
        return Ok(TopicPart::Range(options.into_iter().map(String::from).collect()));
    }

    if raw.starts_with('+') {
        if raw.len() >= 2 {
            return Ok(TopicPart::Any(raw[1..].to_string()));
        }
        return Ok(TopicPart::Exact(raw.to_string()));
    }

    if raw.len() >= 3 && raw.starts_with('{') && raw.ends_with('}') {
        let inner = &raw[1..raw.len() - 1];
        return Ok(TopicPart::Any(inner.to_string()));
    }

    Ok(TopicPart::Exact(raw.to_string()))
}
