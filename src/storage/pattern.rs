//! Wildcard key patterns.
//!
//! A pattern is a key in which every `*` stands for any run of characters,
//! including the empty one. Everything else is literal and the whole key must
//! match, so `a*` matches `a` and `abc` but not `ba`.

use regex::Regex;
use thiserror::Error;

/// The wildcard marker.
pub const WILDCARD: char = '*';

/// A pattern that could not be turned into a matcher.
#[derive(Debug, Error)]
#[error("invalid pattern '{pattern}': {source}")]
pub struct PatternError {
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}

/// Returns `true` if `s` contains at least one wildcard.
#[inline]
pub fn contains_wildcard(s: &str) -> bool {
    s.contains(WILDCARD)
}

/// Translates a wildcard pattern into an anchored regular expression source.
pub fn to_regex(pattern: &str) -> String {
    let escaped = regex::escape(pattern).replace(r"\*", ".*");
    format!("^{escaped}$")
}

/// A compiled wildcard pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compiles `pattern` into an anchored matcher.
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(&to_regex(pattern)).map_err(|source| PatternError {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { regex })
    }

    /// Tests a key against the whole pattern.
    #[inline]
    pub fn matches(&self, key: &str) -> bool {
        self.regex.is_match(key)
    }
}

/// One-shot helper: compiles `pattern` and tests `key` against it.
pub fn matches(key: &str, pattern: &str) -> Result<bool, PatternError> {
    Ok(Pattern::compile(pattern)?.matches(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_wildcard() {
        assert!(!contains_wildcard("abc"));
        assert!(contains_wildcard("a*c"));
        assert!(contains_wildcard("*abc*"));
        assert!(contains_wildcard("*"));
        assert!(!contains_wildcard(""));
    }

    #[test]
    fn test_to_regex() {
        assert_eq!(to_regex("abc"), "^abc$");
        assert_eq!(to_regex("a*"), "^a.*$");
        assert_eq!(to_regex("*"), "^.*$");
        assert_eq!(to_regex("a.b"), r"^a\.b$");
        assert_eq!(to_regex("a+b?"), r"^a\+b\?$");
    }

    #[test]
    fn test_anchored_match() {
        let pattern = Pattern::compile("a*").unwrap();
        assert!(pattern.matches("a"));
        assert!(pattern.matches("ab"));
        assert!(pattern.matches("abc"));
        assert!(!pattern.matches("ba"));

        // No wildcard means an exact match, never a substring search
        let pattern = Pattern::compile("a").unwrap();
        assert!(pattern.matches("a"));
        assert!(!pattern.matches("abc"));
    }

    #[test]
    fn test_inner_wildcards() {
        let pattern = Pattern::compile("user/*/name").unwrap();
        assert!(pattern.matches("user/42/name"));
        assert!(pattern.matches("user//name"));
        assert!(!pattern.matches("user/42/email"));

        let pattern = Pattern::compile("*mid*").unwrap();
        assert!(pattern.matches("mid"));
        assert!(pattern.matches("amidst"));
        assert!(!pattern.matches("mi-d"));
    }

    #[test]
    fn test_metacharacters_are_literal() {
        assert!(matches("a.c", "a.c").unwrap());
        assert!(!matches("abc", "a.c").unwrap());
        assert!(matches("$x", "$x").unwrap());
        assert!(matches("a+b", "a+*").unwrap());
        assert!(!matches("aab", "a+b").unwrap());
        assert!(matches("why?", "why?").unwrap());
        assert!(!matches("wh", "why?").unwrap());
    }
}
