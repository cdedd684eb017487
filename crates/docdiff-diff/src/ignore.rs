//! Path exclusion: decide whether a dotted key path is ignored.
//!
//! Paths join object keys and array indices with `.`, e.g. `items.0.sku`.
//! A pattern matches a path when one of the following holds:
//!
//! - the pattern equals the path;
//! - the pattern contains `*` and, read as a glob where `*` matches any
//!   substring (dots included), covers the whole path;
//! - the pattern contains `.` and names an ancestor of the path;
//! - the pattern is a bare name equal to one of the path's segments.

use regex::Regex;
use tracing::warn;

/// A single compiled ignore pattern.
#[derive(Clone, Debug)]
pub enum IgnorePattern {
    /// Exact path match only (glob that failed to compile).
    Exact(String),
    /// Anchored glob.
    Glob { source: String, regex: Regex },
    /// Dotted path: matches itself and everything beneath it.
    Prefix(String),
    /// Bare name: matches any path containing it as a segment.
    Segment(String),
}

impl IgnorePattern {
    /// Compile one pattern.
    pub fn compile(pattern: &str) -> Self {
        if pattern.contains('*') {
            match glob_to_regex(pattern) {
                Ok(regex) => IgnorePattern::Glob {
                    source: pattern.to_string(),
                    regex,
                },
                Err(e) => {
                    warn!(pattern, error = %e, "ignore glob did not compile; using exact match");
                    IgnorePattern::Exact(pattern.to_string())
                }
            }
        } else if pattern.contains('.') {
            IgnorePattern::Prefix(pattern.to_string())
        } else {
            IgnorePattern::Segment(pattern.to_string())
        }
    }

    /// The pattern text as supplied.
    pub fn source(&self) -> &str {
        match self {
            IgnorePattern::Exact(s) | IgnorePattern::Prefix(s) | IgnorePattern::Segment(s) => s,
            IgnorePattern::Glob { source, .. } => source,
        }
    }

    /// Returns `true` if `path` is covered by this pattern.
    pub fn matches(&self, path: &str) -> bool {
        if path == self.source() {
            return true;
        }
        match self {
            IgnorePattern::Exact(_) => false,
            IgnorePattern::Glob { regex, .. } => regex.is_match(path),
            IgnorePattern::Prefix(prefix) => path
                .strip_prefix(prefix.as_str())
                .is_some_and(|rest| rest.starts_with('.')),
            IgnorePattern::Segment(name) => path.split('.').any(|segment| segment == name),
        }
    }
}

/// A compiled list of ignore patterns.
#[derive(Clone, Debug, Default)]
pub struct IgnoreSet {
    patterns: Vec<IgnorePattern>,
}

impl IgnoreSet {
    /// Compile every pattern once.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            patterns: patterns
                .into_iter()
                .map(|p| IgnorePattern::compile(p.as_ref()))
                .collect(),
        }
    }

    /// Returns `true` if any pattern matches `path`.
    pub fn matches(&self, path: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(path))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }
}

/// One-shot check that compiles `patterns` on the fly.
///
/// Prefer [`IgnoreSet`] when the same patterns are checked repeatedly.
pub fn should_ignore<S: AsRef<str>>(path: &str, patterns: &[S]) -> bool {
    patterns
        .iter()
        .any(|p| IgnorePattern::compile(p.as_ref()).matches(path))
}

fn glob_to_regex(pattern: &str) -> Result<Regex, regex::Error> {
    let body = pattern
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");
    Regex::new(&format!("^{body}$"))
}
