//! Tag pattern matching.
//!
//! # Responsibilities
//! - Match a tag against one allow-list entry (exact or wildcard)
//! - Combine entries with OR semantics, first match wins
//!
//! # Design Decisions
//! - Exact entries are compared byte for byte, case-sensitive
//! - `*` becomes `.*`; the rest of the entry is a regex as written
//! - Wildcard entries are anchored to the whole tag
//! - An entry that does not compile never matches

use regex::Regex;
use thiserror::Error;

/// Separator between allow-list entries.
pub const SEPARATOR: char = ',';

/// Wildcard character within an entry.
pub const WILDCARD: char = '*';

/// A wildcard entry that could not be compiled.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid tag pattern {pattern:?}: {reason}")]
pub struct PatternError {
    pub pattern: String,
    pub reason: String,
}

/// One compiled allow-list entry.
#[derive(Debug, Clone)]
pub enum Pattern {
    Exact(String),
    Wildcard(Regex),
    Invalid(PatternError),
}

impl Pattern {
    /// Compile a single entry. Never fails; bad wildcards become `Invalid`.
    pub fn compile(source: &str) -> Self {
        if !source.contains(WILDCARD) {
            return Pattern::Exact(source.to_string());
        }

        match Regex::new(&wildcard_expression(source)) {
            Ok(re) => Pattern::Wildcard(re),
            Err(e) => {
                tracing::debug!(pattern = %source, error = %e, "ignoring invalid tag pattern");
                Pattern::Invalid(PatternError {
                    pattern: source.to_string(),
                    reason: e.to_string(),
                })
            }
        }
    }

    pub fn matches(&self, tag: &str) -> bool {
        match self {
            Pattern::Exact(expected) => expected == tag,
            Pattern::Wildcard(re) => re.is_match(tag),
            Pattern::Invalid(_) => false,
        }
    }
}

/// Translate a wildcard entry into an anchored regular expression.
fn wildcard_expression(source: &str) -> String {
    let mut expr = source.replace(WILDCARD, ".*");
    if !expr.starts_with('^') {
        expr.insert(0, '^');
    }
    if !expr.ends_with('$') {
        expr.push('$');
    }
    expr
}

/// Decide whether `tag` is enabled by the raw allow-list.
///
/// Entries are compiled lazily and evaluation stops at the first match.
pub fn is_enabled(tag: &str, allow_list: &str) -> bool {
    if allow_list.is_empty() {
        return false;
    }

    allow_list
        .split(SEPARATOR)
        .any(|entry| Pattern::compile(entry).matches(tag))
}

/// A precompiled allow-list for evaluating many tags.
#[derive(Debug, Clone, Default)]
pub struct AllowList {
    patterns: Vec<Pattern>,
}

impl AllowList {
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::default();
        }

        Self {
            patterns: raw.split(SEPARATOR).map(Pattern::compile).collect(),
        }
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn matches(&self, tag: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(tag))
    }

    /// Entries that failed to compile.
    pub fn errors(&self) -> impl Iterator<Item = &PatternError> {
        self.patterns.iter().filter_map(|p| match p {
            Pattern::Invalid(e) => Some(e),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_allow_list() {
        assert!(!is_enabled("anything", ""));
        assert!(!is_enabled("", ""));
        assert!(AllowList::parse("").is_empty());
    }

    #[test]
    fn test_exact_match() {
        assert!(is_enabled("b", "a,b,c"));
        assert!(!is_enabled("d", "a,b,c"));
        assert!(!is_enabled("B", "a,b,c"));
        assert!(!is_enabled("a.b", "a"));
    }

    #[test]
    fn test_whitespace_is_significant() {
        assert!(!is_enabled("b", "a, b"));
        assert!(is_enabled(" b", "a, b"));
    }

    #[test]
    fn test_prefix_wildcard() {
        assert!(is_enabled("foo", "foo*"));
        assert!(is_enabled("foobar", "foo*"));
        assert!(!is_enabled("xfoobar", "foo*"));
    }

    #[test]
    fn test_suffix_wildcard() {
        assert!(is_enabled("xbar", "*bar"));
        assert!(is_enabled("bar", "*bar"));
        assert!(!is_enabled("barx", "*bar"));
    }

    #[test]
    fn test_inner_and_multiple_wildcards() {
        assert!(is_enabled("app:db:query", "app:*:query"));
        assert!(is_enabled("a1b2c", "a*b*c"));
        assert!(!is_enabled("a1b2", "a*b*c"));
        assert!(is_enabled("", "*"));
        assert!(is_enabled("anything", "*"));
    }

    #[test]
    fn test_explicit_anchors_kept() {
        assert!(is_enabled("foobar", "^foo*"));
        assert!(is_enabled("xbar", "*bar$"));
        assert!(!is_enabled("xfoo", "^foo*"));
    }

    #[test]
    fn test_scenario_db_and_cache() {
        let raw = "db:*,cache";
        assert!(is_enabled("db:query", raw));
        assert!(is_enabled("cache", raw));
        assert!(!is_enabled("http", raw));
    }

    #[test]
    fn test_invalid_pattern_does_not_poison_list() {
        let raw = "(*,svc";
        assert!(is_enabled("svc", raw));
        assert!(!is_enabled("(x", raw));

        let list = AllowList::parse(raw);
        assert_eq!(list.errors().count(), 1);
        assert!(matches!(list.patterns()[0], Pattern::Invalid(_)));
        assert!(list.matches("svc"));
    }

    #[test]
    fn test_allow_list_agrees_with_is_enabled() {
        let raw = "db:*,cache,*:worker,[*";
        let list = AllowList::parse(raw);
        for tag in ["db:query", "cache", "cache2", "jobs:worker", "worker", "["] {
            assert_eq!(list.matches(tag), is_enabled(tag, raw), "tag {tag:?}");
        }
    }

    #[test]
    fn test_empty_entries() {
        // "a,,b" has an empty entry which only matches the empty tag
        assert!(is_enabled("", "a,,b"));
        assert!(!is_enabled("", "a,b"));
    }
}
